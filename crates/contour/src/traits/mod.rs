use std::path::Path;

use geo_types::Polygon;

use crate::{document::Document, error::Result};

/// Trait for the CAD document reader collaborator.
///
/// The engine never parses files itself; implementations open a file path and
/// return the typed entity model. This is the sole I/O boundary of the core.
pub trait DocumentReader: Send + Sync {
    fn open(&self, path: &Path) -> Result<Document>;
}

/// Trait for the optional debug side channel that rasterizes traced contours.
///
/// Rendering is best-effort: the pipeline logs a failed render and returns the
/// polygon list unchanged.
pub trait ContourRenderer: Send + Sync {
    fn render(&self, polygons: &[Polygon<f64>]) -> Result<()>;
}

/// Default renderer: discards the contours.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl ContourRenderer for NoopRenderer {
    fn render(&self, _polygons: &[Polygon<f64>]) -> Result<()> {
        Ok(())
    }
}
