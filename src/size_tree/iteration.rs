use std::convert::Infallible;

use super::{NodeData, SizeNode};
use crate::record::Segment;

/// The full name of the node currently visited, i.e., the names of all nodes along the spine of
/// the tree, joined by `/`.
#[derive(Debug, Clone, Default)]
pub struct NamePath {
    joined: String,
    segments: usize,
    /// `(joined.len(), segments)` before each `push`, to undo it in `pop`.
    marks: Vec<(usize, usize)>,
}

impl NamePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &[Segment]) {
        self.marks.push((self.joined.len(), self.segments));
        for segment in name {
            if self.segments > 0 {
                self.joined.push('/');
            }
            self.joined.push_str(segment);
            self.segments += 1;
        }
    }

    pub fn pop(&mut self) {
        if let Some((len, segments)) = self.marks.pop() {
            self.joined.truncate(len);
            self.segments = segments;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// Nesting level of the currently visited node, the root is at 0.
    pub fn depth(&self) -> usize {
        self.marks.len().saturating_sub(1)
    }
}

impl SizeNode {
    /// Pre-order depth-first traversal of the tree, i.e., every node is visited before its children,
    /// and the children in their sorted order. Stops at the first error returned by `f`.
    pub fn try_internal_iter<'tree, E, F>(&'tree self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&NamePath, &'tree SizeNode) -> Result<(), E>,
    {
        fn visit<'tree, E, F>(node: &'tree SizeNode, path: &mut NamePath, f: &mut F) -> Result<(), E>
        where
            F: FnMut(&NamePath, &'tree SizeNode) -> Result<(), E>,
        {
            path.push(&node.name);
            f(path, node)?;
            for child in node.children() {
                visit(child, path, f)?;
            }
            path.pop();
            Ok(())
        }
        visit(self, &mut NamePath::new(), f)
    }

    /// Infallible pre-order traversal, see `try_internal_iter`.
    pub fn internal_iter<'tree>(&'tree self, mut f: impl FnMut(&NamePath, &'tree SizeNode)) {
        let mut visit = |path: &NamePath, node: &'tree SizeNode| -> Result<(), Infallible> {
            f(path, node);
            Ok(())
        };
        match self.try_internal_iter(&mut visit) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Pre-order traversal that may modify the visited nodes (but not the tree structure).
    pub fn internal_iter_mut(&mut self, mut f: impl FnMut(&NamePath, &mut SizeNode)) {
        fn visit<F>(node: &mut SizeNode, path: &mut NamePath, f: &mut F)
        where
            F: FnMut(&NamePath, &mut SizeNode),
        {
            path.push(&node.name);
            f(path, node);
            if let NodeData::Interior(children) = &mut node.data {
                for child in children.iter_mut() {
                    visit(child, path, f);
                }
            }
            path.pop();
        }
        visit(self, &mut NamePath::new(), &mut f)
    }
}
