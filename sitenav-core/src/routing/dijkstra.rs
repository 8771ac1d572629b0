mod state;

use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::trace;

use self::state::State;
use super::path::reconstruct_path;
use crate::{Meters, NodeId, model::NavigationGraph};

/// Distances and predecessors from a single source.
///
/// Nodes missing from `distances` are unreachable from the source. The source
/// itself never has a predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: NodeId,
    distances: HashMap<NodeId, Meters>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest walking distance to `node`, `None` if unreachable
    pub fn distance_to(&self, node: NodeId) -> Option<Meters> {
        self.distances.get(&node).copied()
    }

    /// Immediate predecessor of `node` on a shortest path
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances.contains_key(&node)
    }

    pub fn distances(&self) -> &HashMap<NodeId, Meters> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<NodeId, NodeId> {
        &self.predecessors
    }

    /// Number of reached nodes, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// Node sequence from the source to `target`, empty if there is no route
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Dijkstra's algorithm over the walkable graph.
///
/// A source missing from the graph is treated as a node without neighbors.
pub fn shortest_paths(graph: &NavigationGraph, source: NodeId) -> ShortestPaths {
    shortest_paths_bounded(graph, source, None, None)
}

/// Dijkstra's algorithm with optional early exit.
///
/// The search stops once `target` is settled, and never records nodes
/// farther than `max_distance` meters. Distances of settled nodes are exact;
/// with a `target` some other nodes may carry tentative distances.
pub fn shortest_paths_bounded(
    graph: &NavigationGraph,
    source: NodeId,
    target: Option<NodeId>,
    max_distance: Option<Meters>,
) -> ShortestPaths {
    let estimated_nodes = graph.node_count().max(1);
    let mut distances: HashMap<NodeId, Meters> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4 + 1);

    if !graph.contains(source) {
        trace!("Source node {source} is not part of the graph");
    }

    // Start node has distance 0
    heap.push(State {
        cost: 0,
        node: source,
    });
    distances.insert(source, 0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node)
            && cost > best
        {
            continue;
        }

        if target == Some(node) {
            break;
        }

        for (next, weight) in graph.neighbors(node) {
            let next_cost = cost.saturating_add(weight);

            if max_distance.is_some_and(|max| next_cost > max) {
                continue;
            }

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}
