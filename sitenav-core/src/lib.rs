//! On-site wayfinding for a residential community.
//!
//! The crate turns a hand-authored set of map nodes and path segments into a
//! walkable graph, computes shortest walking routes over it, snaps GPS fixes
//! to the nearest walkable node and resolves typed destination queries with a
//! typo-tolerant matcher.
//!
//! All routing and resolving operations are pure and never fail on bad map
//! data: malformed segments are skipped, unreachable targets yield an empty
//! route, and missing candidates yield `None` or an empty list. Only loading
//! map data from disk returns [`Error`].

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod search;

pub use error::Error;
pub use loading::{MapDataConfig, create_navigation_map, create_navigation_map_with};
pub use model::{
    DecorationKind, MapNode, NavigationGraph, NavigationMap, SearchCandidate, SegmentDescriptor,
    build_graph,
};
pub use routing::{Route, ShortestPaths, distance_matrix, reconstruct_path, shortest_paths};
pub use search::{
    SearchConfig, SearchMatch, nearest_walkable_node, search_destinations,
    weighted_edit_distance,
};

/// Identifier of a map node
pub type NodeId = u32;

/// Walking distance in whole meters
pub type Meters = u32;
