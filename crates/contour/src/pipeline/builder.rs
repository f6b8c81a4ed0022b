use crate::{
    algorithms::dispatch::DEFAULT_MAX_INSERT_DEPTH,
    pipeline::Pipeline,
    traits::{ContourRenderer, NoopRenderer},
};

/// Builder for configuring a [`Pipeline`] with a fluent API.
pub struct PipelineBuilder {
    renderer: Option<Box<dyn ContourRenderer>>,
    max_insert_depth: usize,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            renderer: None,
            max_insert_depth: DEFAULT_MAX_INSERT_DEPTH,
        }
    }

    /// Inject a debug renderer (replaces the no-op default).
    pub fn with_renderer<R>(mut self, renderer: R) -> Self
    where
        R: ContourRenderer + 'static,
    {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Bound on INSERT nesting depth.
    pub fn with_max_insert_depth(mut self, depth: usize) -> Self {
        self.max_insert_depth = depth;
        self
    }

    pub fn build(self) -> Pipeline {
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(NoopRenderer));
        Pipeline::new(renderer, self.max_insert_depth)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
