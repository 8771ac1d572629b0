use geo::{Coord, LineString};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use itertools::Itertools;
use serde::Serialize;
use serde_json::json;

use super::dijkstra::ShortestPaths;
use crate::{Error, Meters, NodeId, model::NavigationGraph, model::NavigationMap};

/// Walkable route from a source node to a target node.
///
/// An empty route means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Node ids from source to target inclusive
    pub nodes: Vec<NodeId>,
    /// Total walking distance in meters
    pub distance: Meters,
}

impl Route {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Route to `target` out of a finished shortest-path computation
    pub fn from_shortest_paths(paths: &ShortestPaths, target: NodeId) -> Self {
        let nodes = paths.path_to(target);
        if nodes.is_empty() {
            return Self::empty();
        }

        Self {
            distance: paths.distance_to(target).unwrap_or_default(),
            nodes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Consecutive node pairs along the route
    pub fn legs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().copied().tuple_windows()
    }

    /// Distance walked at each node of the route, starting at 0.
    ///
    /// A leg missing from `graph` contributes nothing. Totals saturate at
    /// `Meters::MAX`, like the shortest-path costs.
    pub fn cumulative_distances(&self, graph: &NavigationGraph) -> Vec<Meters> {
        if self.nodes.is_empty() {
            return Vec::new();
        }

        let mut walked: Meters = 0;
        let mut cumulative = Vec::with_capacity(self.nodes.len());
        cumulative.push(walked);
        for (from, to) in self.legs() {
            walked = walked.saturating_add(graph.weight(from, to).unwrap_or_default());
            cumulative.push(walked);
        }
        cumulative
    }

    /// Route coordinates (x = longitude, y = latitude); unknown nodes are left out
    pub fn line_string(&self, map: &NavigationMap) -> LineString<f64> {
        self.nodes
            .iter()
            .filter_map(|&id| map.node(id))
            .map(|node| Coord::from(node.geometry()))
            .collect()
    }

    /// Converts the route to a `GeoJSON` `LineString` feature.
    pub fn to_geojson(&self, map: &NavigationMap) -> Result<Feature, Error> {
        let geometry = Geometry::new(GeoJsonValue::from(&self.line_string(map)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "nodes": self.nodes,
                "distance": self.distance,
                "cumulative_distances": self.cumulative_distances(map.graph()),
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self, map: &NavigationMap) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(map)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
