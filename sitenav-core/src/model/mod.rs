//! Data model for on-site navigation
//!
//! Contains the map primitives, the walkable graph built from them and the
//! destination entities the search operates on.

pub mod destinations;
pub mod map;
pub mod navigation_map;

pub use destinations::{
    Apartment, Building, DestinationEntity, SearchCandidate, Translate, Untranslated,
    flatten_buildings,
};
pub use map::{DecorationKind, MapNode, NavigationGraph, SegmentDescriptor, build_graph};
pub use navigation_map::NavigationMap;
