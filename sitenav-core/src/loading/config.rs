use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the map data files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDataConfig {
    /// Nodes as CSV (`id,latitude,longitude,description`) or a JSON array
    pub nodes_path: PathBuf,
    /// Segments as a GeoJSON `FeatureCollection`
    pub segments_path: PathBuf,
    /// Buildings with nested apartments as a JSON array
    #[serde(default)]
    pub destinations_path: Option<PathBuf>,
}
