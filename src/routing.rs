use geo::Point;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use sitenav_core::prelude::*;

use crate::model::PyNavigationMap;

/// Convert a route to a Python dictionary
pub(crate) fn route_to_py(
    py: Python<'_>,
    route: &Route,
    map: &NavigationMap,
) -> PyResult<Py<PyAny>> {
    let dict = PyDict::new(py);

    let coordinates: Vec<(f64, f64)> = route
        .nodes
        .iter()
        .filter_map(|&id| map.node(id))
        .map(|node| (node.latitude, node.longitude))
        .collect();

    dict.set_item("found", !route.is_empty())?;
    dict.set_item("nodes", route.nodes.clone())?;
    dict.set_item("distance_meters", route.distance)?;
    dict.set_item("cumulative_distances", route.cumulative_distances(map.graph()))?;
    dict.set_item("coordinates", coordinates)?;

    Ok(dict.into_any().unbind())
}

fn gps_fix(lat: f64, lon: f64) -> PyResult<Point<f64>> {
    let valid = lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);

    if valid {
        Ok(Point::new(lon, lat))
    } else {
        Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Invalid coordinates: {lat}, {lon}"
        )))
    }
}

/// Find the shortest walking route between two nodes
///
/// Parameters
/// ----------
/// navigation_map : NavigationMap
/// source : int
///     Starting node id
/// target : int
///     Destination node id
///
/// Returns
/// -------
/// dict
///     ``found``, ``nodes``, ``distance_meters``, ``cumulative_distances`` and
///     ``coordinates`` as ``(lat, lon)`` pairs. An unreachable target gives
///     ``found=False`` and an empty node list.
#[gen_stub_pyfunction]
#[pyfunction]
pub fn find_route(
    py: Python<'_>,
    navigation_map: &PyNavigationMap,
    source: NodeId,
    target: NodeId,
) -> PyResult<Py<PyAny>> {
    let route = navigation_map.map.route(source, target);
    route_to_py(py, &route, &navigation_map.map)
}

/// Find the shortest walking route from a GPS fix to a node
///
/// The fix is snapped to the nearest walkable node first. Returns ``None``
/// when the map has no walkable nodes.
///
/// Raises
/// ------
/// ValueError
///     If the coordinates are out of range
#[gen_stub_pyfunction]
#[pyfunction]
pub fn find_route_from_point(
    py: Python<'_>,
    navigation_map: &PyNavigationMap,
    lat: f64,
    lon: f64,
    target: NodeId,
) -> PyResult<Option<Py<PyAny>>> {
    let point = gps_fix(lat, lon)?;

    navigation_map
        .map
        .route_from_point(point, target)
        .map(|route| route_to_py(py, &route, &navigation_map.map))
        .transpose()
}

/// Id of the walkable node closest to a GPS fix, or ``None`` on a map
/// without walkable nodes
#[gen_stub_pyfunction]
#[pyfunction]
pub fn nearest_node(
    navigation_map: &PyNavigationMap,
    lat: f64,
    lon: f64,
) -> PyResult<Option<NodeId>> {
    let point = gps_fix(lat, lon)?;
    Ok(navigation_map
        .map
        .nearest_walkable_node(point)
        .map(|node| node.id))
}

/// Walking route between two nodes as a GeoJSON ``Feature`` string
#[gen_stub_pyfunction]
#[pyfunction]
pub fn route_geojson(
    navigation_map: &PyNavigationMap,
    source: NodeId,
    target: NodeId,
) -> PyResult<String> {
    let route = navigation_map.map.route(source, target);
    route.to_geojson_string(&navigation_map.map).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to serialize route: {e}"
        ))
    })
}

/// Nodes reachable within ``max_distance`` meters, as ``(node_id, meters)``
/// pairs sorted by distance
#[gen_stub_pyfunction]
#[pyfunction]
pub fn reachable_within(
    navigation_map: &PyNavigationMap,
    source: NodeId,
    max_distance: Meters,
) -> Vec<(NodeId, Meters)> {
    navigation_map.map.reachable_within(source, max_distance)
}
