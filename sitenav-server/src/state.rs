use std::sync::Arc;

use serde::Serialize;
use sitenav_core::{NavigationMap, create_navigation_map};
use tokio::sync::RwLock;
use tracing::info;

use crate::{config::ServerConfig, error::ApiError};

/// Shared server state.
///
/// The map snapshot is swapped wholesale on reload; handlers clone the
/// `Arc` and never hold the lock while computing.
#[derive(Clone)]
pub struct AppState {
    map: Arc<RwLock<Arc<NavigationMap>>>,
    pub config: Arc<ServerConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    pub nodes: usize,
    pub edges: usize,
    pub walkable_nodes: usize,
    pub isolated_nodes: usize,
    pub destinations: usize,
}

impl MapSummary {
    pub fn of(map: &NavigationMap) -> Self {
        Self {
            nodes: map.node_count(),
            edges: map.edge_count(),
            walkable_nodes: map.walkable_node_count(),
            isolated_nodes: map.isolated_node_count(),
            destinations: map.destinations().len(),
        }
    }
}

impl AppState {
    pub fn new(map: NavigationMap, config: ServerConfig) -> Self {
        Self {
            map: Arc::new(RwLock::new(Arc::new(map))),
            config: Arc::new(config),
        }
    }

    /// Current map snapshot
    pub async fn map(&self) -> Arc<NavigationMap> {
        Arc::clone(&*self.map.read().await)
    }

    /// Rebuild the map from the configured files and swap it in.
    ///
    /// The previous snapshot stays in place if loading fails.
    pub async fn reload(&self) -> Result<MapSummary, ApiError> {
        let map_config = self.config.map.clone();
        let map = tokio::task::spawn_blocking(move || create_navigation_map(&map_config)).await??;
        let summary = MapSummary::of(&map);

        *self.map.write().await = Arc::new(map);
        info!(?summary, "Map data reloaded");

        Ok(summary)
    }
}
