//! Traversal iterators over a [`Tree`].
//!
//! Every iterator yields [`Visit`] items and holds a shared borrow of the
//! tree, so the tree cannot be edited while a traversal is alive. Iterators
//! are cheap to build; start a fresh one for every traversal.
//!
//! - [`preorder`](preorder::preorder): a node before its subtree.
//! - [`postorder`](postorder::postorder): a node after its subtree; the
//!   start node comes last and is flagged by
//!   [`Visit::is_last_iteration`].
//! - [`node_links`](node_links::node_links): the rotation ring of one node,
//!   starting with the link towards the root.

pub mod node_links;
pub mod postorder;
pub mod preorder;

use std::fmt;

use super::edge::TreeEdge;
use super::index::{EdgeIndex, LinkIndex, NodeIndex};
use super::link::TreeLink;
use super::node::TreeNode;
use super::tree::Tree;

pub use node_links::{NodeLinks, node_links, node_links_from};
pub use postorder::{Postorder, postorder, postorder_from, postorder_subtree};
pub use preorder::{Preorder, preorder, preorder_from, preorder_subtree};

/// One position of a traversal: the link through which a node was entered,
/// the node itself, and the edge crossed to get there.
///
/// The start node of a whole-tree traversal was not entered through an
/// edge, so its [`edge`](Self::edge) is `None`. The only node of a
/// single-node tree has neither link nor edge.
pub struct Visit<'a, N, E> {
    tree: &'a Tree<N, E>,
    link: Option<LinkIndex>,
    node: NodeIndex,
    edge: Option<EdgeIndex>,
    first: bool,
    last: bool,
}

impl<'a, N, E> Visit<'a, N, E> {
    pub(crate) fn new(
        tree: &'a Tree<N, E>,
        link: Option<LinkIndex>,
        node: NodeIndex,
        edge: Option<EdgeIndex>,
    ) -> Self {
        Self {
            tree,
            link,
            node,
            edge,
            first: false,
            last: false,
        }
    }

    pub(crate) fn first(mut self, first: bool) -> Self {
        self.first = first;
        self
    }

    pub(crate) fn last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    #[inline]
    pub fn tree(&self) -> &'a Tree<N, E> {
        self.tree
    }

    #[inline]
    pub fn link_index(&self) -> Option<LinkIndex> {
        self.link
    }

    #[inline]
    pub fn node_index(&self) -> NodeIndex {
        self.node
    }

    #[inline]
    pub fn edge_index(&self) -> Option<EdgeIndex> {
        self.edge
    }

    pub fn link(&self) -> Option<&'a TreeLink> {
        self.link.map(|l| self.tree.link(l))
    }

    pub fn node(&self) -> &'a TreeNode<N> {
        self.tree.node(self.node)
    }

    pub fn edge(&self) -> Option<&'a TreeEdge<E>> {
        self.edge.map(|e| self.tree.edge(e))
    }

    /// `true` for the first item the iterator produced.
    #[inline]
    pub fn is_first_iteration(&self) -> bool {
        self.first
    }

    /// `true` for the last item the iterator will produce.
    #[inline]
    pub fn is_last_iteration(&self) -> bool {
        self.last
    }
}

impl<N, E> Clone for Visit<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for Visit<'_, N, E> {}

impl<N, E> fmt::Debug for Visit<'_, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visit")
            .field("link", &self.link)
            .field("node", &self.node)
            .field("edge", &self.edge)
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}

/// Pushes the links entering the children of the node reached through
/// `entry`, so that the first child in rotation order is popped first.
///
/// With `include_entry` the node is the traversal start and the side behind
/// `entry` counts as its first child.
pub(crate) fn push_children<N, E>(
    tree: &Tree<N, E>,
    entry: LinkIndex,
    include_entry: bool,
    stack: &mut Vec<LinkIndex>,
) {
    let base = stack.len();
    if include_entry {
        stack.push(tree.link(entry).outer());
    }
    let mut cur = tree.link(entry).next();
    while cur != entry {
        stack.push(tree.link(cur).outer());
        cur = tree.link(cur).next();
    }
    stack[base..].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::manipulation::add_new_node;

    #[test]
    fn children_come_out_in_rotation_order() {
        let mut t: Tree<u32, ()> = Tree::with_root(0);
        let root = NodeIndex::new(0);
        let a = add_new_node(&mut t, root).unwrap();
        let b = add_new_node(&mut t, root).unwrap();
        let c = add_new_node(&mut t, root).unwrap();
        let entry = t.root_link_index().unwrap();

        let mut stack = vec![LinkIndex::new(99)];
        push_children(&t, entry, true, &mut stack);
        let popped: Vec<NodeIndex> = std::iter::from_fn(|| stack.pop())
            .take(3)
            .map(|l| t.link(l).node())
            .collect();
        assert_eq!(popped, vec![a, b, c]);
        assert_eq!(stack, vec![LinkIndex::new(99)]);
    }
}
