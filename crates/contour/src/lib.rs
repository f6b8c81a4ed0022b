//! # Contour Reconstruction Engine
//!
//! Reconstructs the simple closed 2D contours encoded by a CAD vector
//! drawing (DXF-style entities: lines, arcs, circles, polylines, splines,
//! nested block inserts), for downstream cutting-price estimation.
//!
//! The engine is a single forward pass per document: entities are dispatched
//! to a curve flattener or a shared segment pool, the pool is deduplicated
//! and turned into an adjacency graph, and each connected component is traced
//! into an ordered boundary by angle-sorted neighbor selection. Coordinates
//! are quantized to 3 decimal places the instant they are produced, so points
//! from independently flattened curves join into one contour.
//!
//! ## Quick Start
//!
//! ```rust
//! use contour::{Document, Entity, Pipeline};
//!
//! let document = Document::new(vec![Entity::Circle {
//!     center: [0.0, 0.0],
//!     radius: 50.0,
//! }]);
//!
//! let pipeline = Pipeline::builder().build();
//! let contours = pipeline.process(&document)?;
//!
//! assert_eq!(contours.len(), 1);
//! println!("area: {:.3}", contours.total_area());
//! # Ok::<(), contour::DxfError>(())
//! ```
//!
//! ## Debug rendering
//!
//! ```rust,no_run
//! use contour::{Pipeline, PngContourRenderer};
//!
//! let pipeline = Pipeline::builder()
//!     .with_renderer(PngContourRenderer::new("contours.png"))
//!     .build();
//! ```

pub mod algorithms;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod traits;
pub mod types;

pub use algorithms::dispatch::DEFAULT_MAX_INSERT_DEPTH;
pub use document::{Block, Document, Entity};
pub use error::{DxfError, Result};
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use render::PngContourRenderer;
pub use traits::{ContourRenderer, DocumentReader, NoopRenderer};
pub use types::{ContourSet, Segment, Vertex};
