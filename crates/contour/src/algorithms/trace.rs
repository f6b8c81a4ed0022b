//! Boundary tracing: walks one connected component into an ordered vertex
//! path using only local angular information.
//!
//! At each step the unvisited neighbors of the current vertex are ordered by
//! descending polar angle (ties broken by original neighbor order) and the
//! first one is taken, marking that edge visited in both directions. This
//! deterministic choice is what keeps the walk following the outer boundary
//! instead of zig-zagging across self-touching geometry, and it fixes the
//! orientation of the resulting contour across runs.

use std::collections::HashSet;

use crate::algorithms::graph::{AdjacencyGraph, NodeId};
use crate::error::{DxfError, Result};
use crate::types::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceState {
    Tracing,
    Closed,
    Stuck,
}

/// Trace the boundary of one component, starting from its first-discovered
/// vertex. Returns the closed path (first vertex repeated at the end), or an
/// error if the walk dead-ends before returning to the start.
pub fn trace_boundary(graph: &AdjacencyGraph, component: &[NodeId]) -> Result<Vec<Vertex>> {
    let start = component[0];
    let mut current = start;
    let mut visited: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut path = vec![graph.vertex(start)];
    let mut state = TraceState::Tracing;

    while state == TraceState::Tracing {
        match next_unvisited_neighbor(graph, current, &visited) {
            None => state = TraceState::Stuck,
            Some(next) => {
                visited.insert((current, next));
                visited.insert((next, current));
                current = next;
                path.push(graph.vertex(current));
                if current == start {
                    state = TraceState::Closed;
                }
            }
        }
    }

    match state {
        TraceState::Closed => Ok(path),
        _ => Err(DxfError::UnclosedFigure),
    }
}

fn next_unvisited_neighbor(
    graph: &AdjacencyGraph,
    current: NodeId,
    visited: &HashSet<(NodeId, NodeId)>,
) -> Option<NodeId> {
    let origin = graph.vertex(current);
    let mut ordered: Vec<NodeId> = graph.neighbors(current).to_vec();
    // Stable sort: equal angles keep their insertion order.
    ordered.sort_by(|&a, &b| {
        let angle_a = origin.angle_to(&graph.vertex(a));
        let angle_b = origin.angle_to(&graph.vertex(b));
        angle_b
            .partial_cmp(&angle_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ordered
        .into_iter()
        .find(|&neighbor| !visited.contains(&(current, neighbor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Segment;

    fn graph_of(lines: &[((f64, f64), (f64, f64))]) -> AdjacencyGraph {
        let segments: Vec<Segment> = lines
            .iter()
            .map(|&(a, b)| {
                Segment::new(Vertex::quantized(a.0, a.1), Vertex::quantized(b.0, b.1))
                    .expect("distinct endpoints")
            })
            .collect();
        AdjacencyGraph::from_segments(&segments)
    }

    #[test]
    fn square_traces_to_a_closed_path() {
        let graph = graph_of(&[
            ((10.0, 10.0), (0.0, 10.0)),
            ((0.0, 0.0), (10.0, 0.0)),
            ((0.0, 10.0), (0.0, 0.0)),
            ((10.0, 0.0), (10.0, 10.0)),
        ]);
        let component = &graph.connected_components()[0];
        let path = trace_boundary(&graph, component).expect("square closes");

        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());
        // Interior vertices visited exactly once.
        let mut interior = path[1..path.len() - 1].to_vec();
        interior.sort();
        interior.dedup();
        assert_eq!(interior.len(), 3);
    }

    #[test]
    fn open_chain_gets_stuck() {
        let graph = graph_of(&[
            ((0.0, 0.0), (10.0, 0.0)),
            ((10.0, 0.0), (20.0, 0.0)),
            ((20.0, 0.0), (30.0, 5.0)),
        ]);
        let component = &graph.connected_components()[0];
        let err = trace_boundary(&graph, component).unwrap_err();
        assert!(matches!(err, DxfError::UnclosedFigure));
    }

    #[test]
    fn trace_is_deterministic() {
        let lines = [
            ((0.0, 0.0), (10.0, 0.0)),
            ((10.0, 0.0), (15.0, 5.0)),
            ((15.0, 5.0), (10.0, 10.0)),
            ((10.0, 10.0), (0.0, 10.0)),
            ((0.0, 10.0), (0.0, 0.0)),
        ];
        let first = {
            let graph = graph_of(&lines);
            trace_boundary(&graph, &graph.connected_components()[0]).expect("closes")
        };
        let second = {
            let graph = graph_of(&lines);
            trace_boundary(&graph, &graph.connected_components()[0]).expect("closes")
        };
        assert_eq!(first, second);
    }

    #[test]
    fn closure_invariant_holds_for_larger_cycles() {
        // A regular hexagon assembled from individual lines.
        let mut lines = Vec::new();
        let corner = |i: usize| {
            let angle = (i as f64) * std::f64::consts::TAU / 6.0;
            (20.0 * angle.cos(), 20.0 * angle.sin())
        };
        for i in 0..6 {
            lines.push((corner(i), corner((i + 1) % 6)));
        }
        let graph = graph_of(&lines);
        let path = trace_boundary(&graph, &graph.connected_components()[0]).expect("closes");
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), path.last());
    }
}
