use rayon::prelude::*;

use super::dijkstra::shortest_paths;
use crate::{Meters, NodeId, model::NavigationMap};

/// Walking distances from every source to every target.
///
/// Row `i` holds the distances from `sources[i]`; `None` marks an
/// unreachable target. Sources are processed in parallel.
pub fn distance_matrix(
    map: &NavigationMap,
    sources: &[NodeId],
    targets: &[NodeId],
) -> Vec<Vec<Option<Meters>>> {
    log::debug!(
        "Calculating {}x{} distance matrix",
        sources.len(),
        targets.len()
    );

    sources
        .par_iter()
        .map(|&source| {
            let paths = shortest_paths(map.graph(), source);
            targets
                .iter()
                .map(|&target| paths.distance_to(target))
                .collect()
        })
        .collect()
}
