use std::path::PathBuf;

use sitenav_core::prelude::*;

use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

/// NavigationMap
///
/// Walkable map of the site: the nodes, the path segments between them and
/// the searchable destinations (buildings and apartments).
///
/// The map is immutable once created. All routing and search functions take
/// it as their first argument.
///
/// Example:
///
/// .. code-block:: python
///
///     site = create_navigation_map("nodes.csv", "segments.geojson", "buildings.json")
///     route = find_route(site, 1, 5)
#[gen_stub_pyclass]
#[pyclass(name = "NavigationMap")]
pub struct PyNavigationMap {
    pub(crate) map: NavigationMap,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyNavigationMap {
    pub fn node_count(&self) -> usize {
        self.map.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.map.edge_count()
    }

    /// Number of nodes with at least one walkable segment
    pub fn walkable_node_count(&self) -> usize {
        self.map.walkable_node_count()
    }

    pub fn isolated_node_count(&self) -> usize {
        self.map.isolated_node_count()
    }

    pub fn destination_count(&self) -> usize {
        self.map.destinations().len()
    }

    /// Coordinates of a node as ``(latitude, longitude)``, or ``None`` for an
    /// unknown id
    pub fn node_coordinates(&self, node_id: NodeId) -> Option<(f64, f64)> {
        self.map
            .node(node_id)
            .map(|node| (node.latitude, node.longitude))
    }

    /// Neighbouring node ids with segment lengths in meters
    pub fn neighbors(&self, node_id: NodeId) -> Vec<(NodeId, Meters)> {
        let mut neighbors: Vec<_> = self.map.graph().neighbors(node_id).collect();
        neighbors.sort_unstable();
        neighbors
    }

    fn __repr__(&self) -> String {
        format!(
            "NavigationMap with {} nodes, {} edges and {} destinations",
            self.map.node_count(),
            self.map.edge_count(),
            self.map.destinations().len()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Create a navigation map from the site data files
///
/// Nodes are read from CSV (``id,latitude,longitude,description``) or a JSON
/// array, segments from a GeoJSON ``FeatureCollection`` whose path features
/// are labelled ``"nodes A and B"``. Malformed records are skipped with a
/// warning; only unreadable files raise.
///
/// Parameters
/// ----------
/// nodes_path : str
///     Path to the node file
/// segments_path : str
///     Path to the segment GeoJSON file
/// destinations_path : str, optional
///     Path to a JSON array of buildings with nested apartments
///
/// Returns
/// -------
/// NavigationMap
///
/// Raises
/// ------
/// RuntimeError
///     If a file cannot be read or parsed
#[gen_stub_pyfunction]
#[pyfunction]
#[pyo3(name = "create_navigation_map", signature = (nodes_path, segments_path, destinations_path=None))]
pub fn py_create_navigation_map(
    nodes_path: PathBuf,
    segments_path: PathBuf,
    destinations_path: Option<PathBuf>,
) -> PyResult<PyNavigationMap> {
    let config = MapDataConfig {
        nodes_path,
        segments_path,
        destinations_path,
    };

    let map = create_navigation_map(&config).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to create navigation map: {e}"
        ))
    })?;

    Ok(PyNavigationMap { map })
}
