use axum::{
    Json,
    extract::{Query, State},
};
use geo::Point;
use serde::{Deserialize, Serialize};
use sitenav_core::{MapNode, Meters, NavigationMap, NodeId, Route, SearchConfig, SearchMatch};
use tracing::debug;

use crate::{
    error::ApiError,
    state::{AppState, MapSummary},
};

#[derive(Debug, Deserialize)]
pub struct PointQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Route request: from a node id, or from a GPS fix
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub from: Option<NodeId>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub to: NodeId,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub map: MapSummary,
}

#[derive(Debug, Serialize)]
pub struct NodeResponse {
    pub id: NodeId,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
}

impl From<&MapNode> for NodeResponse {
    fn from(node: &MapNode) -> Self {
        Self {
            id: node.id,
            latitude: node.latitude,
            longitude: node.longitude,
            description: node.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// `false` when no walkable route exists
    pub found: bool,
    pub nodes: Vec<NodeId>,
    pub distance: Meters,
    pub cumulative_distances: Vec<Meters>,
    /// `[latitude, longitude]` pairs along the route
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteResponse {
    fn new(route: &Route, map: &NavigationMap) -> Self {
        Self {
            found: !route.is_empty(),
            nodes: route.nodes.clone(),
            distance: route.distance,
            cumulative_distances: route.cumulative_distances(map.graph()),
            coordinates: route
                .nodes
                .iter()
                .filter_map(|&id| map.node(id))
                .map(|node| [node.latitude, node.longitude])
                .collect(),
        }
    }
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let map = state.map().await;
    Json(HealthResponse {
        status: "ok",
        map: MapSummary::of(&map),
    })
}

pub async fn nearest_handler(
    State(state): State<AppState>,
    Query(query): Query<PointQuery>,
) -> Result<Json<NodeResponse>, ApiError> {
    let point = gps_fix(query.lat, query.lon)?;
    let map = state.map().await;

    map.nearest_walkable_node(point)
        .map(|node| Json(NodeResponse::from(node)))
        .ok_or_else(|| ApiError::NotFound("map has no walkable nodes".to_string()))
}

pub async fn route_handler(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, ApiError> {
    let map = state.map().await;
    let route = resolve_route(&map, &query)?;
    Ok(Json(RouteResponse::new(&route, &map)))
}

pub async fn route_geojson_handler(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let map = state.map().await;
    let route = resolve_route(&map, &query)?;
    let feature = route.to_geojson(&map)?;

    serde_json::to_value(feature)
        .map(Json)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<SearchMatch>> {
    let config = SearchConfig {
        max_results: query
            .limit
            .map_or(state.config.search.max_results, |limit| {
                limit.min(state.config.search.max_results)
            }),
        ..state.config.search.clone()
    };

    let map = state.map().await;
    let matches = map.search(&query.q, &config);
    debug!(query = %query.q, results = matches.len(), "Destination search");
    Json(matches)
}

pub async fn reload_handler(State(state): State<AppState>) -> Result<Json<MapSummary>, ApiError> {
    state.reload().await.map(Json)
}

fn resolve_route(map: &NavigationMap, query: &RouteQuery) -> Result<Route, ApiError> {
    match (query.from, query.lat, query.lon) {
        (Some(from), None, None) => Ok(map.route(from, query.to)),
        (None, Some(lat), Some(lon)) => {
            let point = gps_fix(lat, lon)?;
            Ok(map.route_from_point(point, query.to).unwrap_or_default())
        }
        _ => Err(ApiError::BadRequest(
            "give either `from` or both `lat` and `lon`".to_string(),
        )),
    }
}

fn gps_fix(lat: f64, lon: f64) -> Result<Point<f64>, ApiError> {
    let valid = lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);

    if valid {
        Ok(Point::new(lon, lat))
    } else {
        Err(ApiError::BadRequest(format!("invalid coordinates {lat},{lon}")))
    }
}
