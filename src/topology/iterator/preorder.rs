//! Pre-order traversal.

use super::{Visit, push_children};
use crate::topology::functions::check_link;
use crate::topology::index::{LinkIndex, NodeIndex};
use crate::topology::subtree::Subtree;
use crate::topology::tree::Tree;
use crate::tree_error::TreeError;

/// Depth-first iterator yielding each node before the nodes below it.
pub struct Preorder<'a, N, E> {
    tree: &'a Tree<N, E>,
    stack: Vec<LinkIndex>,
    pending: Option<Visit<'a, N, E>>,
}

impl<'a, N, E> Preorder<'a, N, E> {
    fn empty(tree: &'a Tree<N, E>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            pending: None,
        }
    }

    fn lone(tree: &'a Tree<N, E>) -> Self {
        let pending = Visit::new(tree, None, NodeIndex::new(0), None)
            .first(true)
            .last(true);
        Self {
            tree,
            stack: Vec::new(),
            pending: Some(pending),
        }
    }

    fn start(tree: &'a Tree<N, E>, link: LinkIndex, whole: bool) -> Self {
        let mut stack = Vec::new();
        push_children(tree, link, whole, &mut stack);
        let l = tree.link(link);
        let edge = (!whole).then(|| l.edge());
        let pending = Visit::new(tree, Some(link), l.node(), edge)
            .first(true)
            .last(stack.is_empty());
        Self {
            tree,
            stack,
            pending: Some(pending),
        }
    }
}

impl<'a, N, E> Iterator for Preorder<'a, N, E> {
    type Item = Visit<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(v) = self.pending.take() {
            return Some(v);
        }
        let link = self.stack.pop()?;
        push_children(self.tree, link, false, &mut self.stack);
        let l = self.tree.link(link);
        Some(Visit::new(self.tree, Some(link), l.node(), Some(l.edge())).last(self.stack.is_empty()))
    }
}

/// Pre-order over the whole tree starting at the root.
///
/// The root comes first, then the subtree behind the root link, then the
/// other subtrees of the root in rotation order.
pub fn preorder<N, E>(tree: &Tree<N, E>) -> Preorder<'_, N, E> {
    match tree.root_link_index() {
        Some(link) if link.get() < tree.link_count() => Preorder::start(tree, link, true),
        Some(_) => Preorder::empty(tree),
        None if tree.node_count() == 1 => Preorder::lone(tree),
        None => Preorder::empty(tree),
    }
}

/// Pre-order over the whole tree as if it were rooted at `link`'s node,
/// visiting the side behind `link` first.
pub fn preorder_from<N, E>(
    tree: &Tree<N, E>,
    link: LinkIndex,
) -> Result<Preorder<'_, N, E>, TreeError> {
    check_link(tree, link)?;
    Ok(Preorder::start(tree, link, true))
}

/// Pre-order over `subtree` only. Its top node comes first, together with
/// the edge that connects the subtree to the rest of the tree.
pub fn preorder_subtree<N, E>(
    tree: &Tree<N, E>,
    subtree: Subtree,
) -> Result<Preorder<'_, N, E>, TreeError> {
    check_link(tree, subtree.link())?;
    Ok(Preorder::start(tree, subtree.link(), false))
}
