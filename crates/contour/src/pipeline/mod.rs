pub mod builder;

use std::path::Path;

use geo_types::Polygon;
use tracing::{debug, warn};

use crate::{
    algorithms::{
        assemble::assemble_polygon, dedupe::dedupe_segments, dispatch::dispatch_document,
        graph::AdjacencyGraph, trace::trace_boundary,
    },
    document::Document,
    error::{DxfError, Result},
    traits::{ContourRenderer, DocumentReader},
    types::ContourSet,
};

/// The geometry-reconstruction pipeline: one deterministic forward pass per
/// document, from entity dispatch through boundary tracing to the final
/// polygon list. Holds no state across documents, so independent pipelines
/// may process documents concurrently.
pub struct Pipeline {
    renderer: Box<dyn ContourRenderer>,
    max_insert_depth: usize,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(renderer: Box<dyn ContourRenderer>, max_insert_depth: usize) -> Self {
        Self {
            renderer,
            max_insert_depth,
        }
    }

    /// Open a document through the reader collaborator and process it.
    pub fn open_and_process(
        &self,
        reader: &dyn DocumentReader,
        path: &Path,
    ) -> Result<ContourSet> {
        let document = reader.open(path)?;
        self.process(&document)
    }

    /// Reconstruct all closed contours of one document.
    ///
    /// Any error is terminal for the document: a malformed or unsupported
    /// drawing yields no polygons at all, since a partially reconstructed
    /// contour set would be silently wrong input to a pricing computation.
    pub fn process(&self, document: &Document) -> Result<ContourSet> {
        let outcome = dispatch_document(document, self.max_insert_depth)?;
        debug!(
            closed_figures = outcome.closed_figures.len(),
            pooled_segments = outcome.pool.len(),
            "dispatched entities"
        );

        // Self-closing entities first, in document order.
        let mut polygons: Vec<Polygon<f64>> = Vec::with_capacity(outcome.closed_figures.len());
        for figure in &outcome.closed_figures {
            polygons.push(assemble_polygon(&figure.points)?);
        }

        let pool = dedupe_segments(outcome.pool);
        if !pool.is_empty() {
            let graph = AdjacencyGraph::from_segments(&pool);
            let components = graph.connected_components();
            debug!(
                nodes = graph.node_count(),
                components = components.len(),
                "built adjacency graph"
            );

            for component in components {
                if component.len() < 3 {
                    return Err(DxfError::StrayGeometry {
                        vertices: component.len(),
                    });
                }
                let boundary = trace_boundary(&graph, &component)?;
                polygons.push(assemble_polygon(&boundary)?);
            }
        }

        // Best-effort debug side channel; never affects the result.
        if let Err(error) = self.renderer.render(&polygons) {
            warn!(%error, "contour rendering failed");
        }

        Ok(ContourSet { polygons })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::builder().build()
    }
}
