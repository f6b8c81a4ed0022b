//! Curve flattening: converts each "complete figure" entity (circle, spline,
//! polyline) into an ordered, quantized point sequence, and samples arcs into
//! point chains for the segment pool.

use crate::error::{DxfError, Result};
use crate::types::{Segment, Vertex};

/// Full circles are sampled every 3 degrees, ~120 points.
const CIRCLE_STEP_DEGREES: f64 = 3.0;
/// Arcs are sampled at one point per 5 degrees of span.
const ARC_STEP_DEGREES: f64 = 5.0;
const MIN_SPLINE_SEGMENTS: usize = 10;

/// A flattened complete-figure entity: an ordered point sequence plus whether
/// its ends coincide. Closed figures become polygons directly; open ones feed
/// the shared segment pool.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedFigure {
    pub points: Vec<Vertex>,
    pub closed: bool,
}

impl FlattenedFigure {
    fn closed(points: Vec<Vertex>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Closedness from the quantized endpoints. Sequences shorter than two
    /// points cannot close and contribute no segments either.
    fn from_points(points: Vec<Vertex>) -> Self {
        let closed = points.len() > 1 && points.first() == points.last();
        Self { points, closed }
    }

    /// The point-to-point segments of this figure, zero-length ones skipped.
    pub fn segments(&self) -> Vec<Segment> {
        chain_segments(&self.points)
    }
}

/// Consecutive segments of an open point chain.
pub fn chain_segments(points: &[Vertex]) -> Vec<Segment> {
    points
        .windows(2)
        .filter_map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Sample a circle at a fixed angular step. Always a closed figure.
pub fn flatten_circle(center: [f64; 2], radius: f64) -> FlattenedFigure {
    let steps = (360.0 / CIRCLE_STEP_DEGREES) as usize;
    let points = (0..steps)
        .map(|i| {
            let angle = (i as f64 * CIRCLE_STEP_DEGREES).to_radians();
            Vertex::quantized(
                center[0] + radius * angle.cos(),
                center[1] + radius * angle.sin(),
            )
        })
        .collect();
    FlattenedFigure::closed(collapse_consecutive(points))
}

/// Sample an arc at a resolution proportional to its angular span, minimum
/// two points. A zero span is a full circle, as in the DXF convention.
pub fn flatten_arc(
    center: [f64; 2],
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Vec<Vertex> {
    let mut span = (end_angle - start_angle).rem_euclid(360.0);
    if span == 0.0 {
        span = 360.0;
    }
    let samples = ((span / ARC_STEP_DEGREES) as usize).max(2);
    let points = (0..samples)
        .map(|i| {
            let fraction = i as f64 / (samples - 1) as f64;
            let angle = (start_angle + span * fraction).to_radians();
            Vertex::quantized(
                center[0] + radius * angle.cos(),
                center[1] + radius * angle.sin(),
            )
        })
        .collect();
    collapse_consecutive(points)
}

/// Reconstruct the basis curve of a SPLINE entity and approximate it with an
/// adaptive number of segments.
pub fn flatten_spline(
    control_points: &[[f64; 2]],
    knots: &[f64],
    degree: usize,
) -> Result<FlattenedFigure> {
    let curve = BasisCurve::new(control_points.to_vec(), knots.to_vec(), degree)?;
    let raw = curve.approximate(spline_segment_count(control_points.len()));
    let points = collapse_consecutive(raw.into_iter().map(|[x, y]| Vertex::quantized(x, y)).collect());
    Ok(FlattenedFigure::from_points(points))
}

/// Segment count for spline approximation, on a logarithmic scale so complex
/// curves gain fidelity without exploding the point count.
pub fn spline_segment_count(num_control_points: usize) -> usize {
    MIN_SPLINE_SEGMENTS.max((((num_control_points + 1) as f64).log2() * 14.0) as usize)
}

/// Read a POLYLINE's vertices directly; only planar polylines are supported.
pub fn flatten_polyline(vertices: &[[f64; 2]], is_2d: bool) -> Result<FlattenedFigure> {
    if !is_2d {
        return Err(DxfError::NonPlanarPolyline);
    }
    Ok(quantize_chain(vertices))
}

/// LWPOLYLINE vertices are 2D by definition.
pub fn flatten_lwpolyline(vertices: &[[f64; 2]]) -> FlattenedFigure {
    quantize_chain(vertices)
}

fn quantize_chain(vertices: &[[f64; 2]]) -> FlattenedFigure {
    let points = collapse_consecutive(
        vertices
            .iter()
            .map(|&[x, y]| Vertex::quantized(x, y))
            .collect(),
    );
    FlattenedFigure::from_points(points)
}

/// Collapse consecutive duplicates left behind by quantization, so no
/// zero-length segment is ever constructed.
fn collapse_consecutive(mut points: Vec<Vertex>) -> Vec<Vertex> {
    points.dedup();
    points
}

/// Clamped uniform knot vector for `num_control_points` points of `degree`.
/// Readers that receive splines without knots can synthesize one with this.
pub fn clamped_knot_vector(num_control_points: usize, degree: usize) -> Vec<f64> {
    let n = num_control_points;
    let spans = n.saturating_sub(degree) as f64;
    (0..n + degree + 1)
        .map(|i| {
            if i <= degree {
                0.0
            } else if i >= n {
                spans
            } else {
                (i - degree) as f64
            }
        })
        .collect()
}

/// A B-spline basis curve evaluated with De Boor's algorithm.
struct BasisCurve {
    control_points: Vec<[f64; 2]>,
    knots: Vec<f64>,
    degree: usize,
}

impl BasisCurve {
    fn new(control_points: Vec<[f64; 2]>, knots: Vec<f64>, degree: usize) -> Result<Self> {
        if control_points.len() <= degree {
            return Err(DxfError::Structure(format!(
                "spline of degree {} needs more than {} control points",
                degree,
                control_points.len()
            )));
        }
        let expected = control_points.len() + degree + 1;
        if knots.len() != expected {
            return Err(DxfError::Structure(format!(
                "spline knot vector has {} values, expected {}",
                knots.len(),
                expected
            )));
        }
        Ok(Self {
            control_points,
            knots,
            degree,
        })
    }

    /// The parameter interval over which the curve is defined.
    fn domain(&self) -> (f64, f64) {
        (
            self.knots[self.degree],
            self.knots[self.knots.len() - self.degree - 1],
        )
    }

    fn find_span(&self, t: f64) -> usize {
        let n = self.control_points.len();
        let mut span = self.degree;
        while span + 1 < n && self.knots[span + 1] <= t {
            span += 1;
        }
        span
    }

    /// De Boor's algorithm: repeated affine interpolation of the control
    /// points local to the knot span containing `t`.
    fn point_at(&self, t: f64) -> [f64; 2] {
        let p = self.degree;
        let k = self.find_span(t);

        let mut d: Vec<[f64; 2]> = (0..=p)
            .map(|j| self.control_points[j + k - p])
            .collect();

        for r in 1..=p {
            for j in (r..=p).rev() {
                let left = self.knots[j + k - p];
                let right = self.knots[j + 1 + k - r];
                let denom = right - left;
                let alpha = if denom.abs() < f64::EPSILON {
                    0.0
                } else {
                    (t - left) / denom
                };
                d[j] = [
                    (1.0 - alpha) * d[j - 1][0] + alpha * d[j][0],
                    (1.0 - alpha) * d[j - 1][1] + alpha * d[j][1],
                ];
            }
        }

        d[p]
    }

    /// Evaluate at `segments + 1` uniformly spaced parameters over the domain.
    fn approximate(&self, segments: usize) -> Vec<[f64; 2]> {
        let (start, end) = self.domain();
        (0..=segments)
            .map(|i| self.point_at(start + (end - start) * i as f64 / segments as f64))
            .collect()
    }
}
