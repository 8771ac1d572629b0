// Re-export key components
pub use crate::loading::{MapDataConfig, create_navigation_map, create_navigation_map_with};
pub use crate::model::{
    Apartment, Building, DecorationKind, DestinationEntity, MapNode, NavigationGraph,
    NavigationMap, SearchCandidate, SegmentDescriptor, Translate, Untranslated, build_graph,
    flatten_buildings,
};
pub use crate::routing::{
    Route, ShortestPaths, distance_matrix, reconstruct_path, shortest_paths,
    shortest_paths_bounded,
};
pub use crate::search::{
    DEFAULT_TYPO_THRESHOLD, MatchKind, NO_MATCH_DISTANCE, SearchConfig, SearchMatch,
    SubstitutionCosts, nearest_walkable_node, search_destinations, weighted_edit_distance,
    weighted_edit_distance_with,
};

// Core types
pub use crate::Error;
pub use crate::Meters;
pub use crate::NodeId;
