//! Structural algorithms over trees.
//!
//! - [`manipulation`]: add and delete nodes, edges and subtrees.
//! - [`reroot`]: move the root along a path.
//! - [`ladderize`]: order children by subtree size.
//! - [`compare`]: shape and payload equality of two trees.

pub mod compare;
pub mod ladderize;
pub mod manipulation;
pub(crate) mod renumber;
pub mod reroot;

pub use compare::{equal, identical_topology};
pub use ladderize::{LadderizeOrder, ladderize};
pub use manipulation::{
    add_new_leaf_node, add_new_leaf_node_with, add_new_node, add_new_node_on_edge,
    add_new_node_on_edge_with, add_root_node, delete_edge, delete_edge_with, delete_leaf_node,
    delete_linear_node, delete_linear_node_with, delete_node, delete_subtree,
};
pub use reroot::{reroot, reroot_at_node, reroot_at_node_index};
