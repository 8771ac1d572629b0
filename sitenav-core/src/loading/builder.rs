use log::{info, warn};

use super::config::MapDataConfig;
use super::destinations::load_buildings;
use super::nodes::load_nodes;
use super::segments::load_segments;
use crate::{
    Error,
    model::{NavigationMap, Translate, Untranslated, flatten_buildings},
};

/// Creates a navigation map based on the provided configuration
///
/// # Errors
///
/// Returns an error if a file is missing or cannot be decoded as a whole.
/// Individual malformed records are skipped instead.
pub fn create_navigation_map(config: &MapDataConfig) -> Result<NavigationMap, Error> {
    create_navigation_map_with(config, &Untranslated)
}

/// Same as [`create_navigation_map`], producing destination display names
/// through `translator`
pub fn create_navigation_map_with<T: Translate + ?Sized>(
    config: &MapDataConfig,
    translator: &T,
) -> Result<NavigationMap, Error> {
    validate_config(config)?;

    info!("Loading map nodes: {}", config.nodes_path.display());
    let nodes = load_nodes(&config.nodes_path)?;

    info!("Loading map segments: {}", config.segments_path.display());
    let loaded = load_segments(&config.segments_path)?;

    let destinations = match &config.destinations_path {
        Some(path) => {
            info!("Loading destinations: {}", path.display());
            flatten_buildings(&load_buildings(path)?, translator)
        }
        None => Vec::new(),
    };

    let map = NavigationMap::new(nodes, loaded.segments).with_destinations(destinations);

    for warning in coverage_warnings(&map, loaded.skipped) {
        warn!("{warning}");
    }

    info!(
        "Navigation map created with {} nodes, {} walkable edges and {} destinations",
        map.node_count(),
        map.edge_count(),
        map.destinations().len()
    );
    Ok(map)
}

fn validate_config(config: &MapDataConfig) -> Result<(), Error> {
    if !config.nodes_path.exists() {
        return Err(Error::InvalidData(format!(
            "Node file not found: {}",
            config.nodes_path.display()
        )));
    }

    if !config.segments_path.exists() {
        return Err(Error::InvalidData(format!(
            "Segment file not found: {}",
            config.segments_path.display()
        )));
    }

    if let Some(path) = &config.destinations_path
        && !path.exists()
    {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Destination file not found: {}", path.display()),
        )));
    }

    Ok(())
}

/// Data quality problems worth reporting after a map is built
#[allow(clippy::cast_precision_loss)]
fn coverage_warnings(map: &NavigationMap, skipped_segments: usize) -> Vec<String> {
    let mut warnings = Vec::new();

    if skipped_segments > 0 {
        warnings.push(format!(
            "{skipped_segments} segment features could not be interpreted and were skipped"
        ));
    }

    let total = map.node_count();
    if total == 0 {
        warnings.push("Map data contains no nodes. Navigation will not find any route.".into());
        return warnings;
    }

    let isolated = map.isolated_node_count();
    if isolated > 0 {
        let percentage = (isolated as f64 / total as f64) * 100.0;
        warnings.push(format!(
            "{isolated} of {total} map nodes ({percentage:.1}%) are not connected by any \
        walkable segment. They cannot be used as route endpoints."
        ));
    }

    let unrouted = map
        .destinations()
        .iter()
        .filter(|destination| {
            destination
                .node_id
                .is_none_or(|id| map.graph().degree(id) == 0)
        })
        .count();
    if unrouted > 0 {
        warnings.push(format!(
            "{unrouted} destinations have no walkable map node and cannot be navigated to"
        ));
    }

    warnings
}
