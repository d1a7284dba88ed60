//! Folds records into a `SizeNode` tree and finalizes it into a `Report`.

use log::debug;

use crate::record::Record;
use crate::report::Report;
use crate::size_tree::{uniquify, SizeNode};

/// A tree that is still being built. Becomes a read-only `Report` with `finalize`.
#[derive(Debug, Clone, Default)]
pub struct SizeTree {
    // `None` until the first record arrives. A single record is a leaf root, the first split
    // replaces it by an interior node.
    root: Option<SizeNode>,
}

impl SizeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: &Record) {
        let entry = SizeNode::from_record(record);
        match &mut self.root {
            Some(root) => root.insert(entry, None),
            None => self.root = Some(entry),
        }
    }

    /// Number of distinct records, i.e., after merging duplicates.
    pub fn len(&self) -> usize {
        self.root().map_or(0, SizeNode::len)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&SizeNode> {
        self.root.as_ref()
    }

    /// Sums up the sizes of all subtrees and makes the labels of all nodes unique.
    pub fn finalize(self) -> Report {
        let Some(mut root) = self.root else {
            debug!("no records, empty report");
            return Report::new(0, None);
        };
        let total_size = root.update_stats();
        uniquify(&mut root);
        debug!(
            "finalized tree: {} records, {} nodes, {total_size} bytes",
            root.len(),
            root.node_count()
        );
        Report::new(total_size, Some(root))
    }
}
