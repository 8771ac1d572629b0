//! This module is responsible for loading map data from disk (nodes,
//! segments, destinations) and building a navigation map from it.

mod builder;
mod config;
mod destinations;
mod labels;
mod nodes;
mod segments;

use std::fs::File;
use std::path::Path;

pub use builder::{create_navigation_map, create_navigation_map_with};
pub use config::MapDataConfig;
pub use destinations::{load_buildings, read_buildings};
pub use labels::parse_endpoint_label;
pub use nodes::{load_nodes, read_nodes_csv, read_nodes_json};
pub use segments::{LoadedSegments, load_segments, read_segments};

fn open_file(path: &Path) -> Result<File, std::io::Error> {
    File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })
}
