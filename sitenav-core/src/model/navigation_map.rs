use geo::Point;
use hashbrown::HashMap;

use super::destinations::SearchCandidate;
use super::map::{MapNode, NavigationGraph, SegmentDescriptor};
use crate::{
    Meters, NodeId,
    routing::{Route, ShortestPaths, shortest_paths, shortest_paths_bounded},
    search::{SearchConfig, SearchMatch, nearest_walkable_node, search_destinations},
};

/// Navigation snapshot of the whole site.
///
/// Owns the nodes, the raw segments, the walkable graph built from them and
/// the searchable destinations. A snapshot is immutable; map data refreshes
/// build a new one.
#[derive(Debug, Clone, Default)]
pub struct NavigationMap {
    nodes: Vec<MapNode>,
    node_index: HashMap<NodeId, usize>,
    segments: Vec<SegmentDescriptor>,
    graph: NavigationGraph,
    /// Indices into `nodes` of nodes with at least one walkable edge
    walkable: Vec<usize>,
    destinations: Vec<SearchCandidate>,
}

impl NavigationMap {
    pub fn new(nodes: Vec<MapNode>, segments: Vec<SegmentDescriptor>) -> Self {
        let graph = NavigationGraph::build(&nodes, &segments);

        let node_index: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id, idx))
            .collect();

        // Duplicate ids resolve to the last occurrence, like the index above
        let walkable = nodes
            .iter()
            .enumerate()
            .filter(|(idx, node)| {
                node_index.get(&node.id) == Some(idx) && graph.degree(node.id) > 0
            })
            .map(|(idx, _)| idx)
            .collect();

        Self {
            nodes,
            node_index,
            segments,
            graph,
            walkable,
            destinations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_destinations(mut self, destinations: Vec<SearchCandidate>) -> Self {
        self.destinations = destinations;
        self
    }

    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.node_index.get(&id).map(|&idx| &self.nodes[idx])
    }

    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    pub fn segments(&self) -> &[SegmentDescriptor] {
        &self.segments
    }

    pub fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    pub fn destinations(&self) -> &[SearchCandidate] {
        &self.destinations
    }

    /// Nodes that are an endpoint of at least one walkable edge
    pub fn walkable_nodes(&self) -> impl Iterator<Item = &MapNode> + '_ {
        self.walkable.iter().map(|&idx| &self.nodes[idx])
    }

    pub fn walkable_node_count(&self) -> usize {
        self.walkable.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn isolated_node_count(&self) -> usize {
        self.graph.isolated_nodes().count()
    }

    /// Walkable node closest to a GPS fix
    pub fn nearest_walkable_node(&self, point: Point<f64>) -> Option<&MapNode> {
        nearest_walkable_node(point, self.walkable_nodes())
    }

    pub fn shortest_paths(&self, source: NodeId) -> ShortestPaths {
        shortest_paths(&self.graph, source)
    }

    /// Shortest walkable route; empty when the target is unreachable
    pub fn route(&self, source: NodeId, target: NodeId) -> Route {
        let paths = shortest_paths_bounded(&self.graph, source, Some(target), None);
        Route::from_shortest_paths(&paths, target)
    }

    /// Route from a GPS fix, snapped to the nearest walkable node.
    ///
    /// `None` when the map has no walkable node at all.
    pub fn route_from_point(&self, point: Point<f64>, target: NodeId) -> Option<Route> {
        let source = self.nearest_walkable_node(point)?;
        Some(self.route(source.id, target))
    }

    /// Route to a search result; empty when the destination has no map node
    pub fn route_to_destination(&self, source: NodeId, destination: &SearchCandidate) -> Route {
        destination
            .node_id
            .map_or_else(Route::empty, |target| self.route(source, target))
    }

    /// Nodes within `max_distance` walking meters, closest first
    pub fn reachable_within(&self, source: NodeId, max_distance: Meters) -> Vec<(NodeId, Meters)> {
        let paths = shortest_paths_bounded(&self.graph, source, None, Some(max_distance));
        let mut reached: Vec<(NodeId, Meters)> = paths
            .distances()
            .iter()
            .map(|(&node, &distance)| (node, distance))
            .collect();
        reached.sort_unstable_by_key(|&(node, distance)| (distance, node));
        reached
    }

    /// Search the destinations of this map by name
    pub fn search(&self, query: &str, config: &SearchConfig) -> Vec<SearchMatch> {
        search_destinations(query, &self.destinations, config)
    }
}
