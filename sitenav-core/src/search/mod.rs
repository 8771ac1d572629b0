//! Destination resolving: GPS snapping and typo-tolerant name search

mod destinations;
mod fuzzy;
mod nearest;

pub use destinations::{
    MatchKind, SearchConfig, SearchMatch, search_destinations, search_destinations_with,
};
pub use fuzzy::{
    DEFAULT_TYPO_THRESHOLD, FINAL_FORM_COST, NO_MATCH_DISTANCE, PHONETIC_COST,
    SubstitutionCosts, VISUAL_COST, weighted_edit_distance, weighted_edit_distance_with,
};
pub use nearest::{nearest_walkable_node, nearest_walkable_node_with_distance};
