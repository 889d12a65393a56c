//! Insertion and deletion of nodes, edges and subtrees.
//!
//! Every entry point checks that its arguments belong to the tree before it
//! touches anything, so an `Err` always leaves the tree as it was. Deletions
//! unhook the doomed entities first and then run a single compaction pass
//! (see [`renumber`](super::renumber)), which keeps all indices dense.

use super::renumber::{Removal, compact};
use super::reroot::reroot_at_node;
use crate::observer::TreeEvent;
use crate::topology::_debug_invariants::{
    assert_tree_valid, inv_assert, inv_assert_eq, ring_contains,
};
use crate::topology::bounds::TreeData;
use crate::topology::edge::TreeEdge;
use crate::topology::functions::{
    check_edge, check_link, check_node, is_root, node_degree, ring_predecessor,
};
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::iterator::preorder::preorder_subtree;
use crate::topology::link::TreeLink;
use crate::topology::node::TreeNode;
use crate::topology::subtree::Subtree;
use crate::topology::tree::Tree;
use crate::tree_error::TreeError;

// =================================================================================
//     Add
// =================================================================================

/// Attaches a new leaf to `target` and returns it.
///
/// The new link at `target` becomes the ring predecessor of the primary
/// link, i.e. the last child in rotation order. The leaf's payload is
/// recreated from `target`'s, the edge payload from the edge above `target`.
/// On a single-node tree the new edge gets a default payload and its link
/// becomes the root link.
pub fn add_new_node<N: TreeData, E: TreeData>(
    tree: &mut Tree<N, E>,
    target: NodeIndex,
) -> Result<NodeIndex, TreeError> {
    check_node(tree, target)?;

    let con_link = LinkIndex::new(tree.link_count());
    let end_link = LinkIndex::new(tree.link_count() + 1);
    let end_node = NodeIndex::new(tree.node_count());
    let con_edge = EdgeIndex::new(tree.edge_count());

    let up_link = tree.node(target).primary_link();
    let node_data = tree.node(target).data().recreate();
    let edge_data = match up_link {
        Some(up) => tree.edge(tree.link(up).edge()).data().recreate(),
        None => E::default(),
    };

    let con_next = match up_link {
        Some(up) => {
            let last = ring_predecessor(tree, up);
            tree.link_mut(last).reset_next(con_link);
            up
        }
        None => con_link,
    };

    tree.push_link(TreeLink::new(con_link, con_next, end_link, target, con_edge));
    tree.push_link(TreeLink::new(end_link, end_link, con_link, end_node, con_edge));
    tree.push_node(TreeNode::new(end_node, Some(end_link), node_data));
    tree.push_edge(TreeEdge::new(con_edge, con_link, end_link, edge_data));

    if up_link.is_none() {
        tree.node_mut(target).reset_primary_link(Some(con_link));
        tree.reset_root_link(Some(con_link));
    }

    assert_tree_valid!(tree);
    tree.notify(TreeEvent::NodeAdded {
        node: end_node,
        parent: target,
        edge: con_edge,
    });
    Ok(end_node)
}

/// Splits `target` with a new node and returns that node.
///
/// See [`add_new_node_on_edge_with`].
pub fn add_new_node_on_edge<N: TreeData, E: TreeData>(
    tree: &mut Tree<N, E>,
    target: EdgeIndex,
) -> Result<NodeIndex, TreeError> {
    add_new_node_on_edge_with(tree, target, |_, _| {})
}

/// Splits `target` with a new mid node and returns that node.
///
/// `target` keeps its primary end and now ends at the mid node; a new edge
/// runs from the mid node to the old secondary end. The mid node's payload
/// is recreated from the primary end node, the new edge's from `target`.
/// `adjust(target, new_edge)` runs once after the rewiring, e.g. to split a
/// branch length between the two halves.
pub fn add_new_node_on_edge_with<N, E, F>(
    tree: &mut Tree<N, E>,
    target: EdgeIndex,
    adjust: F,
) -> Result<NodeIndex, TreeError>
where
    N: TreeData,
    E: TreeData,
    F: FnOnce(&mut TreeEdge<E>, &mut TreeEdge<E>),
{
    check_edge(tree, target)?;

    let pri_link = LinkIndex::new(tree.link_count());
    let sec_link = LinkIndex::new(tree.link_count() + 1);
    let mid_node = NodeIndex::new(tree.node_count());
    let sec_edge = EdgeIndex::new(tree.edge_count());

    let old_pri = tree.edge(target).primary_link();
    let old_sec = tree.edge(target).secondary_link();
    let node_data = tree.node(tree.link(old_pri).node()).data().recreate();
    let edge_data = tree.edge(target).data().recreate();

    tree.push_link(TreeLink::new(pri_link, sec_link, old_pri, mid_node, target));
    tree.push_link(TreeLink::new(sec_link, pri_link, old_sec, mid_node, sec_edge));
    tree.push_node(TreeNode::new(mid_node, Some(pri_link), node_data));
    tree.push_edge(TreeEdge::new(sec_edge, sec_link, old_sec, edge_data));

    tree.link_mut(old_pri).reset_outer(pri_link);
    let far = tree.link_mut(old_sec);
    far.reset_outer(sec_link);
    far.reset_edge(sec_edge);
    tree.edge_mut(target).reset_secondary_link(pri_link);

    let (original, new) = tree.edge_pair_mut(target, sec_edge);
    adjust(original, new);

    assert_tree_valid!(tree);
    tree.notify(TreeEvent::EdgeSplit {
        edge: target,
        node: mid_node,
        new_edge: sec_edge,
    });
    Ok(mid_node)
}

/// Splits `target` and hangs a new leaf off the mid node. Returns the leaf.
pub fn add_new_leaf_node<N: TreeData, E: TreeData>(
    tree: &mut Tree<N, E>,
    target: EdgeIndex,
) -> Result<NodeIndex, TreeError> {
    add_new_leaf_node_with(tree, target, |_, _| {})
}

/// As [`add_new_leaf_node`], with `adjust` applied to the split as in
/// [`add_new_node_on_edge_with`].
pub fn add_new_leaf_node_with<N, E, F>(
    tree: &mut Tree<N, E>,
    target: EdgeIndex,
    adjust: F,
) -> Result<NodeIndex, TreeError>
where
    N: TreeData,
    E: TreeData,
    F: FnOnce(&mut TreeEdge<E>, &mut TreeEdge<E>),
{
    let mid = add_new_node_on_edge_with(tree, target, adjust)?;
    add_new_node(tree, mid)
}

/// Splits `target` and makes the mid node the new root. Returns the root.
pub fn add_root_node<N: TreeData, E: TreeData>(
    tree: &mut Tree<N, E>,
    target: EdgeIndex,
) -> Result<NodeIndex, TreeError> {
    let mid = add_new_node_on_edge(tree, target)?;
    reroot_at_node(tree, mid)?;
    Ok(mid)
}

// =================================================================================
//     Delete
// =================================================================================

/// Deletes `target` according to its degree.
///
/// Leaves and linear nodes are removed on their own. For higher degrees the
/// node goes together with the subtree it heads, that is everything on the
/// far side of its primary link. For the root this keeps the side behind the
/// root link, whose top node becomes the new root.
///
/// The node of a single-node tree cannot be deleted; use [`Tree::clear`].
pub fn delete_node<N, E>(tree: &mut Tree<N, E>, target: NodeIndex) -> Result<(), TreeError> {
    check_node(tree, target)?;
    match node_degree(tree, target) {
        0 => Err(TreeError::SingleNodeTree),
        1 => delete_leaf_node(tree, target),
        2 => delete_linear_node(tree, target),
        _ => {
            let subtree = Subtree::of_node(tree, target)?;
            delete_subtree(tree, subtree)
        }
    }
}

/// Deletes a leaf together with its edge.
///
/// If the leaf was the root, the node it hung off becomes the root.
pub fn delete_leaf_node<N, E>(tree: &mut Tree<N, E>, target: NodeIndex) -> Result<(), TreeError> {
    check_node(tree, target)?;
    require_degree(tree, target, 1)?;
    let Some(link) = tree.node(target).primary_link() else {
        return Err(TreeError::SingleNodeTree);
    };

    let outer = tree.link(link).outer();
    let mut removal = Removal::default();
    removal
        .node(target)
        .link(link)
        .link(outer)
        .edge(tree.link(link).edge());

    splice_out(tree, outer, &removal);
    compact(tree, &removal);

    assert_tree_valid!(tree);
    tree.notify(TreeEvent::NodeDeleted { degree: 1 });
    Ok(())
}

/// Deletes a node of degree two, joining its two edges into one.
///
/// See [`delete_linear_node_with`].
pub fn delete_linear_node<N, E>(tree: &mut Tree<N, E>, target: NodeIndex) -> Result<(), TreeError> {
    delete_linear_node_with(tree, target, |_, _| {})
}

/// Deletes a node of degree two. Its neighbours become directly connected
/// by the edge on the root side of `target`; the other edge is dropped.
///
/// `adjust(remaining_edge, deleted_edge)` runs before anything is rewired,
/// e.g. to add up branch lengths. If `target` was the root, its neighbour
/// behind the root link becomes the root.
pub fn delete_linear_node_with<N, E, F>(
    tree: &mut Tree<N, E>,
    target: NodeIndex,
    adjust: F,
) -> Result<(), TreeError>
where
    F: FnOnce(&mut TreeEdge<E>, &mut TreeEdge<E>),
{
    check_node(tree, target)?;
    require_degree(tree, target, 2)?;
    let Some(pri) = tree.node(target).primary_link() else {
        return Err(TreeError::SingleNodeTree);
    };
    let nxt = tree.link(pri).next();
    let (remaining, deleted) = (tree.link(pri).edge(), tree.link(nxt).edge());

    {
        let (rem, del) = tree.edge_pair_mut(remaining, deleted);
        adjust(rem, del);
    }

    let was_root = is_root(tree, target);
    let adj_pri = tree.link(pri).outer();
    let adj_nxt = tree.link(nxt).outer();
    inv_assert!(adj_pri != adj_nxt);

    // Whichever side the root is on, `adj_pri` is nearer to it.
    let edge = tree.edge_mut(remaining);
    edge.reset_primary_link(adj_pri);
    edge.reset_secondary_link(adj_nxt);
    tree.link_mut(adj_nxt).reset_edge(remaining);
    tree.link_mut(adj_pri).reset_outer(adj_nxt);
    tree.link_mut(adj_nxt).reset_outer(adj_pri);
    if was_root {
        tree.reset_root_link(Some(adj_pri));
    }

    let mut removal = Removal::default();
    removal.node(target).link(pri).link(nxt).edge(deleted);
    compact(tree, &removal);

    assert_tree_valid!(tree);
    tree.notify(TreeEvent::NodeDeleted { degree: 2 });
    Ok(())
}

/// Deletes every node, edge and link of `subtree`, including the edge that
/// connects it to the rest of the tree, in a single compaction pass.
///
/// If the root was inside, the node the subtree hung off becomes the root.
/// A tree reduced to that one node is a single-node tree.
pub fn delete_subtree<N, E>(tree: &mut Tree<N, E>, subtree: Subtree) -> Result<(), TreeError> {
    check_link(tree, subtree.link())?;

    let mut removal = Removal::default();
    for visit in preorder_subtree(tree, subtree)? {
        removal.node(visit.node_index());
        if let Some(entry) = visit.link_index() {
            removal.link(entry).link(tree.link(entry).outer());
        }
        if let Some(edge) = visit.edge_index() {
            removal.edge(edge);
        }
    }
    inv_assert_eq!(removal.links.len(), 2 * removal.nodes.len());
    inv_assert_eq!(removal.edges.len(), removal.nodes.len());

    let attach = tree.link(subtree.link()).outer();
    splice_out(tree, attach, &removal);
    compact(tree, &removal);

    assert_tree_valid!(tree);
    tree.notify(TreeEvent::SubtreeDeleted {
        nodes: removal.nodes.len(),
        edges: removal.edges.len(),
        links: removal.links.len(),
    });
    Ok(())
}

/// Contracts `target`, merging its far node into its near node.
///
/// See [`delete_edge_with`].
pub fn delete_edge<N, E>(tree: &mut Tree<N, E>, target: EdgeIndex) -> Result<(), TreeError> {
    delete_edge_with(tree, target, |_, _| {})
}

/// Contracts `target`: its secondary node disappears and the links that led
/// away from it move to the primary node, taking the place of `target`'s
/// link in the rotation ring. Their relative order is kept.
///
/// `adjust(remaining_node, deleted_node)` runs before anything is rewired so
/// node payloads can be folded.
pub fn delete_edge_with<N, E, F>(
    tree: &mut Tree<N, E>,
    target: EdgeIndex,
    adjust: F,
) -> Result<(), TreeError>
where
    F: FnOnce(&mut TreeNode<N>, &mut TreeNode<N>),
{
    check_edge(tree, target)?;

    let pri = tree.edge(target).primary_link();
    let sec = tree.edge(target).secondary_link();
    let near = tree.link(pri).node();
    let far = tree.link(sec).node();

    {
        let (rem, del) = tree.node_pair_mut(near, far);
        adjust(rem, del);
    }

    let mut moved = Vec::new();
    let mut cur = tree.link(sec).next();
    while cur != sec {
        moved.push(cur);
        cur = tree.link(cur).next();
    }
    for &link in &moved {
        tree.link_mut(link).reset_node(near);
    }

    let succ = tree.link(pri).next();
    let pred = ring_predecessor(tree, pri);
    let replacement = match (moved.first(), moved.last()) {
        (Some(&first), Some(&last)) => {
            if succ == pri {
                tree.link_mut(last).reset_next(first);
            } else {
                tree.link_mut(pred).reset_next(first);
                tree.link_mut(last).reset_next(succ);
            }
            Some(first)
        }
        _ => {
            if succ != pri {
                tree.link_mut(pred).reset_next(succ);
            }
            (succ != pri).then_some(succ)
        }
    };

    if tree.node(near).primary_link() == Some(pri) {
        tree.node_mut(near).reset_primary_link(replacement);
    }
    if tree.root_link_index() == Some(pri) {
        tree.reset_root_link(tree.node(near).primary_link());
    }
    inv_assert!(
        moved.iter().all(|&m| tree
            .node(near)
            .primary_link()
            .is_some_and(|p| ring_contains(tree, p, m))),
        "contracted links missing from the surviving ring"
    );

    let mut removal = Removal::default();
    removal.node(far).link(pri).link(sec).edge(target);
    compact(tree, &removal);

    let survivor = if far < near {
        NodeIndex::new(near.get() - 1)
    } else {
        near
    };
    assert_tree_valid!(tree);
    tree.notify(TreeEvent::EdgeContracted { node: survivor });
    Ok(())
}

// =================================================================================
//     Helpers
// =================================================================================

fn require_degree<N, E>(
    tree: &Tree<N, E>,
    node: NodeIndex,
    expected: usize,
) -> Result<(), TreeError> {
    let found = node_degree(tree, node);
    if found == expected {
        Ok(())
    } else {
        Err(TreeError::DegreeMismatch {
            node,
            expected,
            found,
        })
    }
}

/// Unhooks `attach` from its node's ring ahead of a compaction that removes
/// it. The node's primary link and the root link move to the ring successor
/// if they are about to be removed; with no successor the node is left alone
/// and the tree has no root link.
fn splice_out<N, E>(tree: &mut Tree<N, E>, attach: LinkIndex, removal: &Removal) {
    let node = tree.link(attach).node();
    let succ = tree.link(attach).next();
    let remaining = (succ != attach).then_some(succ);
    if remaining.is_some() {
        let pred = ring_predecessor(tree, attach);
        tree.link_mut(pred).reset_next(succ);
    }
    if tree.node(node).primary_link() == Some(attach) {
        tree.node_mut(node).reset_primary_link(remaining);
    }
    if let Some(root) = tree.root_link_index()
        && removal.has_link(root)
    {
        tree.reset_root_link(tree.node(node).primary_link());
    }
}
