use std::{fs::read_to_string, path::PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use sitenav_core::{MapDataConfig, SearchConfig};
use tracing::info;

use crate::error::ServerError;

/// Command line arguments; any flag given overrides the config file
#[derive(Parser, Debug, Default)]
#[command(name = "sitenav-server", version, about = "On-site wayfinding API")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub bind: Option<String>,
    /// Map nodes (CSV or JSON)
    #[arg(long)]
    pub nodes: Option<PathBuf>,
    /// Map segments (GeoJSON FeatureCollection)
    #[arg(long)]
    pub segments: Option<PathBuf>,
    /// Buildings with apartments (JSON)
    #[arg(long)]
    pub destinations: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
    pub map: MapDataConfig,
    pub search: SearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 10,
            max_concurrent_requests: 256,
            map: MapDataConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Config file (if any) with command line overrides applied
    pub fn load(cli: &Cli) -> Result<Self, ServerError> {
        let mut config = match &cli.config {
            Some(path) => {
                info!("Reading configuration from {}", path.display());
                Self::from_toml(&read_to_string(path)?)?
            }
            None => Self::default(),
        };

        if let Some(bind) = &cli.bind {
            config.bind.clone_from(bind);
        }
        if let Some(nodes) = &cli.nodes {
            config.map.nodes_path.clone_from(nodes);
        }
        if let Some(segments) = &cli.segments {
            config.map.segments_path.clone_from(segments);
        }
        if let Some(destinations) = &cli.destinations {
            config.map.destinations_path = Some(destinations.clone());
        }

        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ServerError> {
        Ok(toml::from_str(raw)?)
    }
}
