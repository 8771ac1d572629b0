use hashbrown::HashMap;
use log::trace;

use crate::NodeId;

/// Follow predecessors backward from `target` to `source`.
///
/// Returns the node sequence from source to target inclusive, or an empty
/// sequence when the chain does not lead back to the source. `target ==
/// source` has no recorded predecessor and also yields an empty sequence.
/// The walk is bounded by the size of the predecessor map, so a cyclic or
/// corrupted map degrades to an empty result.
pub fn reconstruct_path(
    predecessors: &HashMap<NodeId, NodeId>,
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = target;

    while current != source {
        // Each node on a valid chain has its own entry
        if path.len() >= predecessors.len() {
            trace!("Predecessor chain from {target} exceeds the map size, giving up");
            return Vec::new();
        }
        path.push(current);

        match predecessors.get(&current) {
            Some(&prev) => current = prev,
            None => return Vec::new(),
        }
    }

    if path.is_empty() {
        return path;
    }

    path.push(source);
    path.reverse(); // Now path is from source to target
    path
}
