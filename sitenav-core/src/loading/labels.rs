use itertools::Itertools;

use crate::NodeId;

/// Extract the endpoint pair from a path segment label.
///
/// Labels look like `"between nodes 12 and 13"`. The label must contain
/// exactly two runs of ASCII digits, each fitting a node id; anything else
/// yields `None`.
pub fn parse_endpoint_label(label: &str) -> Option<(NodeId, NodeId)> {
    let (a, b) = label
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<NodeId>().ok())
        .collect_tuple()?;

    Some((a?, b?))
}
