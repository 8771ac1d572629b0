use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use sitenav_core::prelude::*;

use crate::model::PyNavigationMap;

fn kind_name(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Exact => "exact",
        MatchKind::Prefix => "prefix",
        MatchKind::Contains => "contains",
        MatchKind::Typo => "typo",
    }
}

fn match_to_py(py: Python<'_>, found: &SearchMatch) -> PyResult<Py<PyAny>> {
    let dict = PyDict::new(py);
    let candidate = &found.candidate;

    match candidate.entity {
        DestinationEntity::Building { building_id } => {
            dict.set_item("type", "building")?;
            dict.set_item("building_id", building_id)?;
        }
        DestinationEntity::Apartment {
            building_id,
            apartment_id,
        } => {
            dict.set_item("type", "apartment")?;
            dict.set_item("building_id", building_id)?;
            dict.set_item("apartment_id", apartment_id)?;
        }
    }

    dict.set_item("raw_name", &candidate.raw_name)?;
    dict.set_item("display_name", &candidate.display_name)?;
    dict.set_item("node_id", candidate.node_id)?;
    dict.set_item("match", kind_name(found.kind))?;
    dict.set_item("distance", found.distance)?;

    Ok(dict.into_any().unbind())
}

/// Search the map's destinations by name
///
/// Matching tolerates typos, including the common Hebrew letter confusions.
/// Results are ordered exact, prefix, contains, then typo matches, and by
/// edit distance within each group.
///
/// Parameters
/// ----------
/// navigation_map : NavigationMap
/// query : str
///     Text typed by the user
/// max_results : int, default 10
/// typo_threshold : float, default 1.5
///     Weighted edit distance below which a name counts as a typo match
///
/// Returns
/// -------
/// list[dict]
#[gen_stub_pyfunction]
#[pyfunction]
#[pyo3(signature = (navigation_map, query, max_results=10, typo_threshold=1.5))]
pub fn search_destinations(
    py: Python<'_>,
    navigation_map: &PyNavigationMap,
    query: &str,
    max_results: usize,
    typo_threshold: f64,
) -> PyResult<Vec<Py<PyAny>>> {
    let config = SearchConfig {
        typo_threshold,
        max_results,
        ..SearchConfig::default()
    };

    navigation_map
        .map
        .search(query, &config)
        .iter()
        .map(|found| match_to_py(py, found))
        .collect()
}

/// Weighted edit distance between two strings
///
/// Substitutions between commonly confused Hebrew letters cost less than
/// one; every other edit costs one.
#[gen_stub_pyfunction]
#[pyfunction(name = "weighted_edit_distance")]
pub fn py_weighted_edit_distance(a: &str, b: &str) -> f64 {
    weighted_edit_distance(a, b)
}
