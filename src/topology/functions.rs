//! Small queries over a tree's topology.

use super::index::{EdgeIndex, LinkIndex, NodeIndex};
use super::iterator::postorder::postorder;
use super::iterator::preorder::preorder;
use super::tree::Tree;
use crate::tree_error::TreeError;

/// `true` if `node` is a position inside `tree`.
#[inline]
pub fn belongs_to_node<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> bool {
    node.get() < tree.node_count()
}

#[inline]
pub fn belongs_to_edge<N, E>(tree: &Tree<N, E>, edge: EdgeIndex) -> bool {
    edge.get() < tree.edge_count()
}

#[inline]
pub fn belongs_to_link<N, E>(tree: &Tree<N, E>, link: LinkIndex) -> bool {
    link.get() < tree.link_count()
}

pub(crate) fn check_node<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> Result<(), TreeError> {
    if belongs_to_node(tree, node) {
        Ok(())
    } else {
        Err(TreeError::node_not_in_tree(node))
    }
}

pub(crate) fn check_edge<N, E>(tree: &Tree<N, E>, edge: EdgeIndex) -> Result<(), TreeError> {
    if belongs_to_edge(tree, edge) {
        Ok(())
    } else {
        Err(TreeError::edge_not_in_tree(edge))
    }
}

pub(crate) fn check_link<N, E>(tree: &Tree<N, E>, link: LinkIndex) -> Result<(), TreeError> {
    if belongs_to_link(tree, link) {
        Ok(())
    } else {
        Err(TreeError::link_not_in_tree(link))
    }
}

/// Number of links in the rotation ring starting at `link`.
pub(crate) fn ring_len<N, E>(tree: &Tree<N, E>, link: LinkIndex) -> usize {
    let mut count = 1;
    let mut cur = tree.link(link).next();
    while cur != link {
        count += 1;
        cur = tree.link(cur).next();
    }
    count
}

/// The link whose `next` is `link`.
pub(crate) fn ring_predecessor<N, E>(tree: &Tree<N, E>, link: LinkIndex) -> LinkIndex {
    let mut cur = link;
    while tree.link(cur).next() != link {
        cur = tree.link(cur).next();
    }
    cur
}

/// Number of edges incident to `node`. Zero only for a single-node tree.
pub fn degree<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> Result<usize, TreeError> {
    check_node(tree, node)?;
    Ok(node_degree(tree, node))
}

/// Unchecked [`degree`] for callers that validated `node` already.
pub(crate) fn node_degree<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> usize {
    tree.node(node)
        .primary_link()
        .map_or(0, |link| ring_len(tree, link))
}

pub fn is_leaf<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> Result<bool, TreeError> {
    Ok(degree(tree, node)? == 1)
}

pub fn is_inner<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> Result<bool, TreeError> {
    Ok(degree(tree, node)? > 1)
}

/// `false` for indices outside the tree.
#[inline]
pub fn is_root<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> bool {
    tree.root_node_index() == Some(node)
}

/// Node at the root side of `edge`.
pub fn primary_node<N, E>(tree: &Tree<N, E>, edge: EdgeIndex) -> Result<NodeIndex, TreeError> {
    check_edge(tree, edge)?;
    Ok(tree.link(tree.edge(edge).primary_link()).node())
}

/// Node at the far side of `edge`.
pub fn secondary_node<N, E>(tree: &Tree<N, E>, edge: EdgeIndex) -> Result<NodeIndex, TreeError> {
    check_edge(tree, edge)?;
    Ok(tree.link(tree.edge(edge).secondary_link()).node())
}

/// For every node, the number of nodes below it (away from the root),
/// not counting the node itself. Leaves get 0, the root gets `n - 1`.
pub fn subtree_sizes<N, E>(tree: &Tree<N, E>) -> Vec<usize> {
    let mut sizes = vec![0usize; tree.node_count()];
    for visit in postorder(tree) {
        if visit.is_last_iteration() {
            continue;
        }
        let Some(entry) = visit.link_index() else {
            continue;
        };
        let parent = tree.link(tree.link(entry).outer()).node();
        sizes[parent.get()] += sizes[visit.node_index().get()] + 1;
    }
    sizes
}

/// Number of edges between each node and the root.
pub fn node_depths<N, E>(tree: &Tree<N, E>) -> Vec<usize> {
    let mut depths = vec![0usize; tree.node_count()];
    for visit in preorder(tree) {
        if visit.is_first_iteration() {
            continue;
        }
        let Some(entry) = visit.link_index() else {
            continue;
        };
        let parent = tree.link(tree.link(entry).outer()).node();
        depths[visit.node_index().get()] = depths[parent.get()] + 1;
    }
    depths
}
