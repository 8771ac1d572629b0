use pyo3::prelude::*;
use pyo3_stub_gen::define_stub_info_gatherer;

use matrix::py_distance_matrix;
use model::{PyNavigationMap, py_create_navigation_map};
use routing::{find_route, find_route_from_point, nearest_node, reachable_within, route_geojson};
use search::{py_weighted_edit_distance, search_destinations};

pub mod matrix;
pub mod model;
pub mod routing;
pub mod search;

/// A Python module implemented in Rust.
#[pymodule]
fn sitenav(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyNavigationMap>()?;
    m.add_function(wrap_pyfunction!(py_create_navigation_map, m)?)?;

    m.add_function(wrap_pyfunction!(find_route, m)?)?;
    m.add_function(wrap_pyfunction!(find_route_from_point, m)?)?;
    m.add_function(wrap_pyfunction!(nearest_node, m)?)?;
    m.add_function(wrap_pyfunction!(route_geojson, m)?)?;
    m.add_function(wrap_pyfunction!(reachable_within, m)?)?;

    m.add_function(wrap_pyfunction!(search_destinations, m)?)?;
    m.add_function(wrap_pyfunction!(py_weighted_edit_distance, m)?)?;

    m.add_function(wrap_pyfunction!(py_distance_matrix, m)?)?;
    Ok(())
}

define_stub_info_gatherer!(stub_info);
