//! Keeps the network node list in step with the hardware node count.

use crate::model::Node;

/// Resize `list` to `target` entries.
///
/// Growing appends `make(index)` for every new slot, where `index` is the
/// 0-based position in the resulting list. Shrinking drops trailing entries.
/// Retained entries are never touched. Returns whether the list changed; an
/// unchanged list is not written to at all.
pub fn resize<T, F>(list: &mut Vec<T>, target: usize, mut make: F) -> bool
where
    F: FnMut(usize) -> T,
{
    let current = list.len();
    if current == target {
        return false;
    }
    if target > current {
        list.reserve(target - current);
        for index in current..target {
            list.push(make(index));
        }
    } else {
        list.truncate(target);
    }
    true
}

/// Bring `nodes` to `node_count` entries using the default node placeholder.
pub fn sync_nodes(nodes: &mut Vec<Node>, node_count: u32) -> bool {
    let changed = resize(nodes, node_count as usize, Node::placeholder);
    if changed {
        log::debug!("node list resized to {}", nodes.len());
    }
    changed
}
