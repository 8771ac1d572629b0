//! Map components - nodes and segment descriptors

use geo::{LineString, Point};
use serde::{Deserialize, Serialize};

use crate::NodeId;

/// Map node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    /// Stable node identifier, unique within one map snapshot
    #[serde(alias = "nodeId", alias = "node_id")]
    pub id: NodeId,
    /// Latitude in decimal degrees (WGS84)
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees (WGS84)
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
    /// Free text or a translation key
    #[serde(default)]
    pub description: Option<String>,
}

impl MapNode {
    pub fn new(id: NodeId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Node coordinates as a `geo` point (x = longitude, y = latitude)
    pub fn geometry(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Whether the coordinates are finite and within WGS84 bounds
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Kind of a non-walkable cartographic overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Road,
    Arrow,
    /// Tunnels. Drawn on the map but never part of the walkable graph.
    Underground,
}

/// Raw map segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentDescriptor {
    /// Walkable connection between two nodes
    PathEdge { a: NodeId, b: NodeId },
    /// Overlay with no endpoint pair; never traversable
    Decoration {
        kind: DecorationKind,
        coordinates: LineString<f64>,
    },
}

impl SegmentDescriptor {
    pub fn path(a: NodeId, b: NodeId) -> Self {
        Self::PathEdge { a, b }
    }

    /// Endpoint pair of a walkable segment
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Self::PathEdge { a, b } => Some((*a, *b)),
            Self::Decoration { .. } => None,
        }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, Self::PathEdge { .. })
    }
}
