use std::collections::HashMap;

use super::SizeNode;
use crate::human_size::human_size;

impl SizeNode {
    /// The ID of the node, given its full name (see `NamePath`).
    /// Note that this is not stable if the name, suffix or size changes, so only call it after
    /// `update_stats` and `uniquify`.
    pub fn label(&self, full_name: &str) -> String {
        let mut label = format!("{} {full_name}", human_size(self.size));
        if let Some(suffix) = self.suffix {
            label.push_str(&format!("#{suffix}"));
        }
        label
    }
}

/// Walks the tree in pre-order and assigns suffixes to nodes such that all labels are unique.
/// The first node with a given label keeps it, the n-th one gets the suffix `#n`. If that label
/// is already taken, e.g., by a node whose name itself ends in `#n`, the suffix is counted up
/// until it is free.
pub fn uniquify(root: &mut SizeNode) {
    // Label -> number of nodes that wanted it so far. Suffixed labels are registered as well.
    let mut ids: HashMap<String, usize> = HashMap::new();
    // Treemap renderers treat '' as null, i.e., as the parent of the root.
    ids.insert(String::new(), 1);
    root.internal_iter_mut(|path, node| {
        node.suffix = None;
        let count = ids.entry(node.label(path.as_str())).or_insert(0);
        *count += 1;
        if *count == 1 {
            return;
        }
        let mut suffix = *count;
        loop {
            node.suffix = Some(suffix);
            let label = node.label(path.as_str());
            if !ids.contains_key(&label) {
                ids.insert(label, 1);
                break;
            }
            suffix += 1;
        }
    });
}
