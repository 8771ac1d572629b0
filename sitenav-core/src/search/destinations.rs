use serde::{Deserialize, Serialize};

use super::fuzzy::{
    DEFAULT_TYPO_THRESHOLD, NO_MATCH_DISTANCE, SubstitutionCosts, weighted_edit_distance,
    weighted_edit_distance_with,
};
use crate::model::SearchCandidate;

/// How a candidate matched the query, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Prefix,
    Contains,
    Typo,
}

/// Ranked search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub candidate: SearchCandidate,
    pub kind: MatchKind,
    /// Smallest weighted edit distance between the query and the name or
    /// one of its words
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Edit distances strictly below this count as a typo match
    pub typo_threshold: f64,
    pub max_results: usize,
    /// Shorter queries return nothing
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            typo_threshold: DEFAULT_TYPO_THRESHOLD,
            max_results: 10,
            min_query_chars: 1,
        }
    }
}

/// Rank destination candidates by name similarity to `query`.
///
/// Both the raw and the display name are checked. A candidate qualifies when
/// the query is contained in one of its names, or is within the typo
/// threshold of a name or of a single word in it. Results are ordered by
/// match kind, then distance, then display name.
pub fn search_destinations(
    query: &str,
    candidates: &[SearchCandidate],
    config: &SearchConfig,
) -> Vec<SearchMatch> {
    rank(query, candidates, config, weighted_edit_distance)
}

/// Same as [`search_destinations`] with a custom confusion table
pub fn search_destinations_with(
    query: &str,
    candidates: &[SearchCandidate],
    config: &SearchConfig,
    costs: &SubstitutionCosts,
) -> Vec<SearchMatch> {
    rank(query, candidates, config, |a, b| {
        weighted_edit_distance_with(a, b, costs)
    })
}

fn rank<D>(
    query: &str,
    candidates: &[SearchCandidate],
    config: &SearchConfig,
    distance: D,
) -> Vec<SearchMatch>
where
    D: Fn(&str, &str) -> f64,
{
    let query = normalize(query);
    if query.is_empty() || query.chars().count() < config.min_query_chars {
        return Vec::new();
    }

    let mut matches: Vec<SearchMatch> = candidates
        .iter()
        .filter_map(|candidate| {
            let (kind, best) = [&candidate.raw_name, &candidate.display_name]
                .into_iter()
                .map(|name| score(&query, &normalize(name), &distance))
                .fold((None, NO_MATCH_DISTANCE), |(kind, best), (k, d)| {
                    (kind.into_iter().chain(k).min(), best.min(d))
                });

            let kind = kind.or((best < config.typo_threshold).then_some(MatchKind::Typo))?;

            Some(SearchMatch {
                candidate: candidate.clone(),
                kind,
                distance: best,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.distance.total_cmp(&b.distance))
            .then_with(|| a.candidate.display_name.cmp(&b.candidate.display_name))
    });
    matches.truncate(config.max_results);
    matches
}

/// Containment kind (if any) and the smallest edit distance for one name
fn score<D>(query: &str, name: &str, distance: &D) -> (Option<MatchKind>, f64)
where
    D: Fn(&str, &str) -> f64,
{
    if name.is_empty() {
        return (None, NO_MATCH_DISTANCE);
    }

    let kind = if name == query {
        Some(MatchKind::Exact)
    } else if name.starts_with(query) {
        Some(MatchKind::Prefix)
    } else if name.contains(query) {
        Some(MatchKind::Contains)
    } else {
        None
    };

    let best = name
        .split(' ')
        .map(|word| distance(query, word))
        .fold(distance(query, name), f64::min);

    (kind, best)
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
