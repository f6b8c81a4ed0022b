use std::fmt;

use geo_types::{Coord, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// Coordinates are quantized to 3 decimal places.
const QUANT_SCALE: f64 = 1000.0;

/// Round a raw coordinate to integer thousandths, half away from zero.
///
/// This is the load-bearing step of the whole engine: points produced by
/// independent flattening passes only join into one contour because their
/// quantized values compare equal.
pub fn quantize(value: f64) -> i64 {
    let scaled = value * QUANT_SCALE;
    if scaled >= 0.0 {
        (scaled + 0.5).floor() as i64
    } else {
        (scaled - 0.5).ceil() as i64
    }
}

/// A point in the drawing plane, stored as quantized thousandths so that
/// equality, hashing and ordering are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    x: i64,
    y: i64,
}

impl Vertex {
    /// Quantize a raw coordinate pair. Every point entering the engine goes
    /// through here exactly once, at creation.
    pub fn quantized(x: f64, y: f64) -> Self {
        Self {
            x: quantize(x),
            y: quantize(y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x as f64 / QUANT_SCALE
    }

    pub fn y(&self) -> f64 {
        self.y as f64 / QUANT_SCALE
    }

    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x(),
            y: self.y(),
        }
    }

    /// Polar angle from `self` to `other`, in radians measured
    /// counterclockwise from the positive x-axis.
    pub fn angle_to(&self, other: &Vertex) -> f64 {
        ((other.y - self.y) as f64).atan2((other.x - self.x) as f64)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

/// An edge between two distinct vertices. The endpoint order is the one the
/// originating entity produced; traversal never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vertex,
    pub end: Vertex,
}

impl Segment {
    /// Returns `None` for zero-length segments; a segment needs two distinct
    /// quantized endpoints.
    pub fn new(start: Vertex, end: Vertex) -> Option<Self> {
        if start == end {
            None
        } else {
            Some(Self { start, end })
        }
    }

    /// Endpoints in lexicographic order. Used for deduplication only, so that
    /// a segment and its reversal compare equal.
    pub fn normalized(&self) -> (Vertex, Vertex) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// The reconstructed contours of one document, in discovery order:
/// self-closing entities first (document order), then contours traced from
/// the segment pool (component-discovery order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourSet {
    pub polygons: Vec<Polygon<f64>>,
}

impl ContourSet {
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Sum of the gross areas of all contours. Hole subtraction is the
    /// pricing layer's concern, not this engine's.
    pub fn total_area(&self) -> f64 {
        use geo::Area;
        self.polygons.iter().map(|p| p.unsigned_area()).sum()
    }

    /// Total boundary length over all contours, i.e. the cutting distance.
    pub fn total_cut_length(&self) -> f64 {
        use geo::EuclideanLength;
        self.polygons
            .iter()
            .map(|p| p.exterior().euclidean_length())
            .sum()
    }

    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        use geo::BoundingRect;
        let mut merged: Option<Rect<f64>> = None;
        for rect in self.polygons.iter().filter_map(|p| p.bounding_rect()) {
            merged = Some(match merged {
                None => rect,
                Some(acc) => Rect::new(
                    Coord {
                        x: acc.min().x.min(rect.min().x),
                        y: acc.min().y.min(rect.min().y),
                    },
                    Coord {
                        x: acc.max().x.max(rect.max().x),
                        y: acc.max().y.max(rect.max().y),
                    },
                ),
            });
        }
        merged
    }
}
