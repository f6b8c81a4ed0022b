pub mod assemble;
pub mod dedupe;
pub mod dispatch;
pub mod flatten;
pub mod graph;
pub mod trace;

pub use assemble::assemble_polygon;
pub use dedupe::dedupe_segments;
pub use dispatch::{DEFAULT_MAX_INSERT_DEPTH, DispatchOutcome, dispatch_document};
pub use flatten::{FlattenedFigure, clamped_knot_vector, spline_segment_count};
pub use graph::{AdjacencyGraph, NodeId};
pub use trace::trace_boundary;
