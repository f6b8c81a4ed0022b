//! Final polygon assembly: validates a traced or flattened vertex path and
//! converts it into the output polygon type.

use std::collections::HashSet;

use geo_types::{Coord, LineString, Polygon};

use crate::error::{DxfError, Result};
use crate::types::Vertex;

/// Build a polygon from a closed path. Accepts paths with or without the
/// closing repeat of the first vertex; requires at least 3 distinct vertices.
pub fn assemble_polygon(path: &[Vertex]) -> Result<Polygon<f64>> {
    let ring: &[Vertex] = if path.len() > 1 && path.first() == path.last() {
        &path[..path.len() - 1]
    } else {
        path
    };

    let distinct: HashSet<&Vertex> = ring.iter().collect();
    if distinct.len() < 3 {
        return Err(DxfError::DegenerateFigure(distinct.len()));
    }

    let coords: Vec<Coord<f64>> = ring.iter().map(|v| v.coord()).collect();
    Ok(Polygon::new(LineString::new(coords), Vec::new()))
}

#[cfg(test)]
mod tests {
    use geo::Area;

    use super::*;

    fn vertices(points: &[(f64, f64)]) -> Vec<Vertex> {
        points.iter().map(|&(x, y)| Vertex::quantized(x, y)).collect()
    }

    #[test]
    fn closed_path_with_repeat_assembles() {
        let path = vertices(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let polygon = assemble_polygon(&path).expect("valid square");
        assert!((polygon.unsigned_area() - 100.0).abs() < 1e-9);
        // geo closes the exterior ring itself.
        assert_eq!(polygon.exterior().coords().count(), 5);
    }

    #[test]
    fn path_without_repeat_assembles_too() {
        let path = vertices(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]);
        let polygon = assemble_polygon(&path).expect("valid triangle");
        assert!(polygon.unsigned_area() > 0.0);
    }

    #[test]
    fn fewer_than_three_distinct_vertices_is_an_error() {
        let path = vertices(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]);
        let err = assemble_polygon(&path).unwrap_err();
        assert!(matches!(err, DxfError::DegenerateFigure(2)));
    }

    #[test]
    fn empty_path_is_degenerate() {
        assert!(matches!(
            assemble_polygon(&[]).unwrap_err(),
            DxfError::DegenerateFigure(0)
        ));
    }
}
