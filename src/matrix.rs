use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use sitenav_core::prelude::*;

use crate::model::PyNavigationMap;

/// Walking distances in meters from every source to every target
///
/// Row ``i`` holds the distances from ``sources[i]``; ``None`` marks an
/// unreachable target. Rows are computed in parallel.
#[gen_stub_pyfunction]
#[pyfunction(name = "distance_matrix")]
pub fn py_distance_matrix(
    py: Python<'_>,
    navigation_map: &PyNavigationMap,
    sources: Vec<NodeId>,
    targets: Vec<NodeId>,
) -> Vec<Vec<Option<Meters>>> {
    // Release the GIL while rayon works through the rows
    py.detach(|| distance_matrix(&navigation_map.map, &sources, &targets))
}
