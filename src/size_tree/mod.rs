// see https://en.wikipedia.org/wiki/Radix_tree
// The segments of a name are compared as a whole, so this is a radix tree over segment sequences
// (directories, files, symbols) rather than over characters.

mod iteration;
mod label;


pub use iteration::NamePath;
pub use label::uniquify;

use crate::longest_common_prefix::common_prefix_len;
use crate::record::{Record, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SizeNode {
    /// The part of the name that is not already covered by the ancestors.
    name: Vec<Segment>,

    /// Leafs: the (merged) size of the record(s).
    /// Interior nodes: the sum over all children, only valid after `update_stats`.
    size: u64,

    /// Disambiguates nodes with otherwise equal labels, see `uniquify`.
    suffix: Option<usize>,

    data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum NodeData {
    Leaf,
    /// Invariant: children are sorted by their (remaining) name.
    Interior(Vec<SizeNode>),
}

impl SizeNode {

    // Constructors:

    pub fn leaf(name: Vec<Segment>, size: u64) -> Self {
        SizeNode {
            name,
            size,
            suffix: None,
            data: NodeData::Leaf,
        }
    }

    fn interior(name: Vec<Segment>, children: Vec<SizeNode>) -> Self {
        SizeNode {
            name,
            size: 0,
            suffix: None,
            data: NodeData::Interior(children),
        }
    }

    pub fn from_record(record: &Record) -> Self {
        Self::leaf(record.name(), record.size())
    }


    // Accessors:

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.data, NodeData::Leaf)
    }

    pub fn children(&self) -> std::slice::Iter<'_, SizeNode> {
        match &self.data {
            NodeData::Leaf => [].iter(),
            NodeData::Interior(children) => children.iter(),
        }
    }

    /// Returns the number of leafs, i.e., distinct records after merging duplicates.
    /// O(n), where n is the number of nodes in the tree.
    pub fn len(&self) -> usize {
        match &self.data {
            NodeData::Leaf => 1,
            NodeData::Interior(children) => children.iter().map(Self::len).sum(),
        }
    }

    /// Returns the number of nodes, including interior ones.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(Self::node_count).sum::<usize>()
    }


    // Building the tree:

    /// Inserts the leaf `entry`, whose name must have been stripped of all ancestor names of `self`.
    ///
    /// `known_prefix_len` is the length of the common prefix of `self.name` and `entry.name`,
    /// if the caller already computed it.
    ///
    /// If `self` is not a valid ancestor of `entry`, `self` is replaced in place by a new interior
    /// node with the common prefix as name, and `self` and `entry` as its two children.
    pub fn insert(&mut self, entry: SizeNode, known_prefix_len: Option<usize>) {
        debug_assert!(entry.is_leaf(), "only leafs can be inserted");
        let prefix_len = known_prefix_len.unwrap_or_else(|| common_prefix_len(&self.name, &entry.name));
        match &mut self.data {
            // Same record (again), e.g., the same file in two symbol table lines.
            // -> Merge into this leaf.
            NodeData::Leaf if self.name == entry.name => {
                self.size += entry.size;
            }

            // This is an interior node and its name is a prefix of the entry's name.
            // -> Strip the common part and insert among (or into one of) the children.
            NodeData::Interior(children) if prefix_len == self.name.len() => {
                insert_into_children(children, entry, prefix_len);
            }

            // General case: The name of this node only partially overlaps with the entry's name
            // (or this is a leaf, which cannot have children).
            // -> Split this node into an interior node with the common prefix as name,
            // and the old self and the new entry, both stripped of the prefix, as children.
            _ => self.split(prefix_len, entry),
        }
    }

    fn split(&mut self, prefix_len: usize, mut entry: SizeNode) {
        let common_prefix: Vec<Segment> = self.name.drain(..prefix_len).collect();
        entry.name.drain(..prefix_len);
        let new_interior = SizeNode::interior(common_prefix, Vec::with_capacity(2));
        let old_self = std::mem::replace(self, new_interior);
        match &mut self.data /* == new_interior.data */ {
            NodeData::Interior(children) => {
                if old_self.name <= entry.name {
                    children.push(old_self);
                    children.push(entry);
                } else {
                    children.push(entry);
                    children.push(old_self);
                }
            }
            NodeData::Leaf => unreachable!("we just replaced self with a new interior node"),
        }
    }


    // Finalizing:

    /// Computes the sizes of all interior nodes as the sum of their children, recursively.
    /// Returns the size of `self`. Can be called repeatedly.
    pub fn update_stats(&mut self) -> u64 {
        if let NodeData::Interior(children) = &mut self.data {
            self.size = children.iter_mut().map(SizeNode::update_stats).sum();
        }
        self.size
    }
}

/// Inserts `entry` into the sorted `children` of an interior node whose name is `stripped`
/// segments long.
fn insert_into_children(children: &mut Vec<SizeNode>, mut entry: SizeNode, stripped: usize) {
    entry.name.drain(..stripped);

    // Position after all children that sort before or equal to the entry.
    let n = children.partition_point(|child| child.name <= entry.name);

    // Only the direct neighbors of the insertion point can share a prefix with the entry,
    // because siblings don't share a prefix among each other. Prefer the one with the longer common
    // prefix, and the previous one on a tie.
    let previous = n
        .checked_sub(1)
        .map(|i| (i, common_prefix_len(&children[i].name, &entry.name)));
    let next = children
        .get(n)
        .map(|child| (n, common_prefix_len(&child.name, &entry.name)));
    let neighbor = match (previous, next) {
        (Some(previous), Some(next)) if next.1 > previous.1 => Some(next),
        (Some(previous), _) => Some(previous),
        (None, next) => next,
    };

    match neighbor {
        // An empty remaining name only "overlaps" with another empty name, which is the same record.
        Some((i, prefix_len)) if prefix_len > 0 || children[i].name == entry.name => {
            children[i].insert(entry, Some(prefix_len));
        }
        // Nothing in common: new child.
        _ => children.insert(n, entry),
    }
}
