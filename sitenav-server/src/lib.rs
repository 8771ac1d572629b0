//! HTTP API over the wayfinding core.
//!
//! Loads the site map once at startup and serves nearest-node, route and
//! destination search queries against the in-memory snapshot. `POST /reload`
//! rebuilds the snapshot from the configured files.

use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::{Cli, ServerConfig};
use error::{ApiError, ServerError};
use routes::{
    health_handler, nearest_handler, reload_handler, route_geojson_handler, route_handler,
    search_handler,
};
use state::AppState;

pub fn init_tracing() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let limits = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(Duration::from_secs(state.config.request_timeout_secs))
        .concurrency_limit(state.config.max_concurrent_requests.max(1));

    Router::new()
        .route("/health", get(health_handler))
        .route("/nearest", get(nearest_handler))
        .route("/route", get(route_handler))
        .route("/route/geojson", get(route_geojson_handler))
        .route("/search", get(search_handler))
        .route("/reload", post(reload_handler))
        .layer(limits)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

pub async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = ServerConfig::load(&cli)?;

    info!("Loading map data...");
    let map_config = config.map.clone();
    let map =
        tokio::task::spawn_blocking(move || sitenav_core::create_navigation_map(&map_config))
            .await??;

    let address = config.bind.clone();
    let state = AppState::new(map, config);
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
