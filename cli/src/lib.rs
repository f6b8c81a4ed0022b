use std::fs;
use std::path::Path;

use contour::{ContourSet, Document, DocumentReader, DxfError};
use serde::{Deserialize, Serialize};

/// Document reader for JSON entity fixtures (the serde form of
/// [`contour::Document`]). Stands in for a full DXF parser at the engine's
/// reader boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentReader;

impl DocumentReader for JsonDocumentReader {
    fn open(&self, path: &Path) -> contour::Result<Document> {
        let raw = fs::read_to_string(path).map_err(|source| DxfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|error| DxfError::Structure(error.to_string()))
    }
}

/// The numbers a pricing computation consumes for one drawing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteSummary {
    pub contours: usize,
    pub total_area: f64,
    pub total_cut_length: f64,
}

impl QuoteSummary {
    pub fn from_contours(contours: &ContourSet) -> Self {
        Self {
            contours: contours.len(),
            total_area: contours.total_area(),
            total_cut_length: contours.total_cut_length(),
        }
    }
}
