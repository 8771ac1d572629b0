//! Walkable graph built from map nodes and path segments

use hashbrown::HashMap;
use log::{debug, trace};

use super::components::{MapNode, SegmentDescriptor};
use super::geodesic::rounded_meters;
use crate::{Meters, NodeId};

/// Undirected weighted adjacency structure.
///
/// Every edge is stored in both directions with the same weight. Nodes are
/// referenced strictly by id, so the graph can be rebuilt and shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationGraph {
    adjacency: HashMap<NodeId, HashMap<NodeId, Meters>>,
}

impl NavigationGraph {
    /// Builds the graph from a full map snapshot.
    ///
    /// Every node gets an adjacency entry, even when no segment touches it.
    /// Path segments with an unknown endpoint, self-loops and segments whose
    /// length cannot be computed are skipped. Decorations never add edges.
    pub fn build(nodes: &[MapNode], segments: &[SegmentDescriptor]) -> Self {
        let mut adjacency: HashMap<NodeId, HashMap<NodeId, Meters>> =
            HashMap::with_capacity(nodes.len());
        let mut by_id: HashMap<NodeId, &MapNode> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            adjacency.entry(node.id).or_default();
            by_id.insert(node.id, node);
        }

        let mut graph = Self { adjacency };
        let mut skipped = 0usize;

        for segment in segments {
            let (a, b) = match segment {
                SegmentDescriptor::PathEdge { a, b } => (*a, *b),
                SegmentDescriptor::Decoration { .. } => continue,
            };

            let (Some(from), Some(to)) = (by_id.get(&a), by_id.get(&b)) else {
                trace!("Skipping segment {a}-{b}: unknown endpoint");
                skipped += 1;
                continue;
            };

            if a == b {
                trace!("Skipping self-referencing segment at node {a}");
                skipped += 1;
                continue;
            }

            let Some(weight) = rounded_meters(from.geometry(), to.geometry()) else {
                trace!("Skipping segment {a}-{b}: endpoint coordinates are not finite");
                skipped += 1;
                continue;
            };

            graph.insert_edge(a, b, weight);
        }

        if skipped > 0 {
            debug!("Skipped {skipped} of {} segments while building the graph", segments.len());
        }

        graph
    }

    fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: Meters) {
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// Neighbors of a node with edge weights; empty for unknown nodes
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Meters)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(&next, &weight)| (next, weight)))
    }

    /// Weight of the edge between two nodes, if they are adjacent
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Meters> {
        self.adjacency.get(&a).and_then(|edges| edges.get(&b)).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, HashMap::len)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Nodes without any walkable edge
    pub fn isolated_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .iter()
            .filter(|(_, edges)| edges.is_empty())
            .map(|(&node, _)| node)
    }
}

/// Convert map nodes and segment descriptors into a walkable graph
pub fn build_graph(nodes: &[MapNode], segments: &[SegmentDescriptor]) -> NavigationGraph {
    NavigationGraph::build(nodes, segments)
}
