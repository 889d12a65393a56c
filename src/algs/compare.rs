//! Shape and payload comparison of two trees.
//!
//! Two trees compare equal when walking both in pre-order meets nodes of
//! the same degree at every step and the caller's predicates accept each
//! pair of nodes and edges. Node and edge indices need not match.

use itertools::{EitherOrBoth, Itertools};

use crate::topology::edge::TreeEdge;
use crate::topology::functions::node_degree;
use crate::topology::iterator::preorder::preorder;
use crate::topology::node::TreeNode;
use crate::topology::tree::Tree;

/// `true` if both trees have the same shape and every corresponding node
/// and edge pair satisfies `node_cmp` / `edge_cmp`.
pub fn equal<N1, E1, N2, E2, FN, FE>(
    lhs: &Tree<N1, E1>,
    rhs: &Tree<N2, E2>,
    node_cmp: FN,
    edge_cmp: FE,
) -> bool
where
    FN: Fn(&TreeNode<N1>, &TreeNode<N2>) -> bool,
    FE: Fn(&TreeEdge<E1>, &TreeEdge<E2>) -> bool,
{
    if lhs.node_count() != rhs.node_count() || lhs.edge_count() != rhs.edge_count() {
        return false;
    }
    preorder(lhs)
        .zip_longest(preorder(rhs))
        .all(|pair| match pair {
            EitherOrBoth::Both(l, r) => {
                node_degree(lhs, l.node_index()) == node_degree(rhs, r.node_index())
                    && node_cmp(l.node(), r.node())
                    && match (l.edge(), r.edge()) {
                        (Some(a), Some(b)) => edge_cmp(a, b),
                        (None, None) => true,
                        _ => false,
                    }
            }
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => false,
        })
}

/// `true` if both trees have the same shape, ignoring payloads.
pub fn identical_topology<N1, E1, N2, E2>(lhs: &Tree<N1, E1>, rhs: &Tree<N2, E2>) -> bool {
    equal(lhs, rhs, |_, _| true, |_, _| true)
}
