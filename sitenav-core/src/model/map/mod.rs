//! Map nodes, segment descriptors and the walkable graph

pub mod components;
pub mod geodesic;
pub mod graph;

pub use components::{DecorationKind, MapNode, SegmentDescriptor};
pub use geodesic::{haversine_distance, rounded_meters};
pub use graph::{NavigationGraph, build_graph};
