use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reconstructing contours from a CAD document.
///
/// Two families, both terminal for the document being processed: invalid-file
/// errors (the document cannot be read, or its geometry does not close into
/// polygons) and entity errors (an entity the engine does not support).
#[derive(Error, Debug)]
pub enum DxfError {
    #[error("could not read file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid DXF structure: {0}")]
    Structure(String),

    /// The boundary trace of a connected component never returned to its
    /// start vertex.
    #[error("design error: figure is not closed")]
    UnclosedFigure,

    /// A connected component is too small to form any polygon, e.g. a pair
    /// of coincident lines or a stray open chain.
    #[error("stray geometry: {vertices} connected vertices cannot form a closed figure")]
    StrayGeometry { vertices: usize },

    /// A boundary closed but collapsed to fewer than 3 distinct vertices.
    #[error("degenerate figure: a closed boundary needs at least 3 distinct vertices, got {0}")]
    DegenerateFigure(usize),

    #[error("unsupported entity type: {0}")]
    UnsupportedEntity(String),

    #[error("unsupported polyline: only 2D polylines can be traced")]
    NonPlanarPolyline,

    /// Block inserts nested past the recursion limit; the reference chain is
    /// either cyclic or pathological.
    #[error("block inserts nested deeper than {0} levels")]
    InsertDepthExceeded(usize),

    #[error("failed to render contour preview: {0}")]
    Render(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DxfError>;
