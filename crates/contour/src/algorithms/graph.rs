//! Undirected adjacency graph over deduplicated segments, with nodes kept in
//! first-seen order so traversal and component discovery are deterministic.

use std::collections::HashMap;

use crate::types::{Segment, Vertex};

pub type NodeId = usize;

#[derive(Debug, Default)]
pub struct AdjacencyGraph {
    nodes: Vec<Vertex>,
    index: HashMap<Vertex, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
}

impl AdjacencyGraph {
    /// One edge per segment; duplicate edges between the same vertex pair are
    /// collapsed, keeping the graph simple.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut graph = Self::default();
        for segment in segments {
            let a = graph.intern(segment.start);
            let b = graph.intern(segment.end);
            graph.add_edge(a, b);
        }
        graph
    }

    fn intern(&mut self, vertex: Vertex) -> NodeId {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(vertex);
        self.adjacency.push(Vec::new());
        self.index.insert(vertex, id);
        id
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if a == b || self.adjacency[a].contains(&b) {
            return;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn vertex(&self, id: NodeId) -> Vertex {
        self.nodes[id]
    }

    /// Neighbors in edge-insertion order.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id]
    }

    /// Connected components via iterative DFS, each listed in discovery
    /// order; component order follows node insertion order.
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        let mut seen = vec![false; self.nodes.len()];
        let mut components = Vec::new();

        for start in 0..self.nodes.len() {
            if seen[start] {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = vec![start];
            seen[start] = true;
            while let Some(node) = stack.pop() {
                component.push(node);
                for &neighbor in &self.adjacency[node] {
                    if !seen[neighbor] {
                        seen[neighbor] = true;
                        stack.push(neighbor);
                    }
                }
            }
            components.push(component);
        }

        components
    }
}
