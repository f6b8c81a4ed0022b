//! Entity dispatch: a single traversal of a document's entity list that
//! routes each entity either to the curve flattener (complete figures) or to
//! the shared segment pool (primitives), recursing into block inserts.

use tracing::debug;

use crate::algorithms::flatten::{
    FlattenedFigure, chain_segments, flatten_arc, flatten_circle, flatten_lwpolyline,
    flatten_polyline, flatten_spline,
};
use crate::document::{Document, Entity};
use crate::error::{DxfError, Result};
use crate::types::{Segment, Vertex};

/// Default bound on INSERT nesting. Real cutting drawings nest a handful of
/// levels at most; anything deeper is a cyclic or pathological reference.
pub const DEFAULT_MAX_INSERT_DEPTH: usize = 32;

/// Everything one traversal produces: figures that were already closed when
/// flattened (document order) and the pooled segments of everything else.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    pub closed_figures: Vec<FlattenedFigure>,
    pub pool: Vec<Segment>,
}

/// Walk the document's modelspace and classify every entity.
pub fn dispatch_document(document: &Document, max_insert_depth: usize) -> Result<DispatchOutcome> {
    let mut outcome = DispatchOutcome::default();
    dispatch_entities(document.modelspace(), 0, max_insert_depth, &mut outcome)?;
    Ok(outcome)
}

fn dispatch_entities(
    entities: &[Entity],
    depth: usize,
    max_depth: usize,
    out: &mut DispatchOutcome,
) -> Result<()> {
    for entity in entities {
        match entity {
            Entity::Line { start, end } => {
                let a = Vertex::quantized(start[0], start[1]);
                let b = Vertex::quantized(end[0], end[1]);
                match Segment::new(a, b) {
                    Some(segment) => out.pool.push(segment),
                    None => debug!(%a, "skipping zero-length LINE"),
                }
            }
            Entity::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let points = flatten_arc(*center, *radius, *start_angle, *end_angle);
                out.pool.extend(chain_segments(&points));
            }
            Entity::Insert { block } => {
                if depth + 1 > max_depth {
                    return Err(DxfError::InsertDepthExceeded(max_depth));
                }
                dispatch_entities(&block.entities, depth + 1, max_depth, out)?;
            }
            Entity::Circle { center, radius } => {
                route_figure(flatten_circle(*center, *radius), out);
            }
            Entity::Spline {
                control_points,
                knots,
                degree,
            } => {
                route_figure(flatten_spline(control_points, knots, *degree)?, out);
            }
            Entity::Polyline { vertices, is_2d } => {
                route_figure(flatten_polyline(vertices, *is_2d)?, out);
            }
            Entity::LwPolyline { vertices } => {
                route_figure(flatten_lwpolyline(vertices), out);
            }
            Entity::Unsupported { name } => {
                return Err(DxfError::UnsupportedEntity(name.clone()));
            }
        }
    }
    Ok(())
}

fn route_figure(figure: FlattenedFigure, out: &mut DispatchOutcome) {
    if figure.closed {
        out.closed_figures.push(figure);
    } else {
        out.pool.extend(figure.segments());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Block;

    fn line(start: [f64; 2], end: [f64; 2]) -> Entity {
        Entity::Line { start, end }
    }

    #[test]
    fn line_contributes_one_segment() {
        let document = Document::new(vec![line([0.0, 0.0], [10.0, 0.0])]);
        let outcome = dispatch_document(&document, DEFAULT_MAX_INSERT_DEPTH).expect("dispatch");
        assert_eq!(outcome.pool.len(), 1);
        assert!(outcome.closed_figures.is_empty());
    }

    #[test]
    fn zero_length_line_is_dropped() {
        let document = Document::new(vec![line([1.0, 1.0], [1.0001, 1.0])]);
        let outcome = dispatch_document(&document, DEFAULT_MAX_INSERT_DEPTH).expect("dispatch");
        assert!(outcome.pool.is_empty());
    }

    #[test]
    fn arc_contributes_a_segment_chain() {
        let document = Document::new(vec![Entity::Arc {
            center: [0.0, 0.0],
            radius: 10.0,
            start_angle: 0.0,
            end_angle: 90.0,
        }]);
        let outcome = dispatch_document(&document, DEFAULT_MAX_INSERT_DEPTH).expect("dispatch");
        assert_eq!(outcome.pool.len(), 17); // 18 samples
        // The chain is connected end to end.
        for pair in outcome.pool.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn circle_bypasses_the_pool() {
        let document = Document::new(vec![Entity::Circle {
            center: [0.0, 0.0],
            radius: 50.0,
        }]);
        let outcome = dispatch_document(&document, DEFAULT_MAX_INSERT_DEPTH).expect("dispatch");
        assert!(outcome.pool.is_empty());
        assert_eq!(outcome.closed_figures.len(), 1);
    }

    #[test]
    fn insert_is_traversed_recursively() {
        let document = Document::new(vec![Entity::Insert {
            block: Block {
                name: "OUTER".into(),
                entities: vec![Entity::Insert {
                    block: Block {
                        name: "INNER".into(),
                        entities: vec![line([0.0, 0.0], [5.0, 5.0])],
                    },
                }],
            },
        }]);
        let outcome = dispatch_document(&document, DEFAULT_MAX_INSERT_DEPTH).expect("dispatch");
        assert_eq!(outcome.pool.len(), 1);
    }

    #[test]
    fn insert_recursion_is_bounded() {
        let mut entity = line([0.0, 0.0], [1.0, 1.0]);
        for level in 0..40 {
            entity = Entity::Insert {
                block: Block {
                    name: format!("LEVEL_{level}"),
                    entities: vec![entity],
                },
            };
        }
        let document = Document::new(vec![entity]);
        let err = dispatch_document(&document, DEFAULT_MAX_INSERT_DEPTH).unwrap_err();
        assert!(matches!(err, DxfError::InsertDepthExceeded(_)));
    }

    #[test]
    fn unsupported_entity_fails_naming_the_type() {
        let document = Document::new(vec![Entity::Unsupported {
            name: "TEXT".into(),
        }]);
        let err = dispatch_document(&document, DEFAULT_MAX_INSERT_DEPTH).unwrap_err();
        assert_eq!(err.to_string(), "unsupported entity type: TEXT");
    }
}
