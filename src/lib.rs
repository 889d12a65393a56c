//! # phylo-tree
//!
//! phylo-tree is a mutable, in-memory tree engine for phylogenetic and other
//! rooted trees. A tree is stored as three dense collections of links, nodes
//! and edges that refer to each other by typed index, with payloads of your
//! choice attached to nodes and edges.
//!
//! ## Features
//! - [`Tree`](topology::Tree) container with checked access, bulk import and
//!   export, swap and deep clone
//! - Pre-order, post-order and per-node link iterators
//! - Insertion, deletion (leaf, linear, subtree, edge contraction), rerooting
//!   and ladderizing that keep indices dense and all invariants intact
//! - A validator for trees assembled from raw content, and a topology
//!   comparator
//! - Optional observers receiving an event for every structural edit
//!
//! ## Invariant checking
//! Editing functions re-run the full validator after every edit in debug
//! builds. Enable the `strict-invariants` feature to keep these checks, and
//! the cheaper local assertions, in release builds as well.
//!
//! ## Usage
//! ```
//! use phylo_tree::prelude::*;
//!
//! let mut tree: Tree<String, f64> = Tree::with_root("R".into());
//! let root = tree.root_node_index().unwrap();
//! let a = add_new_node(&mut tree, root).unwrap();
//! add_new_node(&mut tree, a).unwrap();
//! assert_eq!(tree.node_count(), 3);
//! assert!(is_valid(&tree));
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod observer;
pub mod topology;
pub mod tree_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::compare::{equal, identical_topology};
    pub use crate::algs::ladderize::{LadderizeOrder, ladderize};
    pub use crate::algs::manipulation::{
        add_new_leaf_node, add_new_leaf_node_with, add_new_node, add_new_node_on_edge,
        add_new_node_on_edge_with, add_root_node, delete_edge, delete_edge_with,
        delete_leaf_node, delete_linear_node, delete_linear_node_with, delete_node,
        delete_subtree,
    };
    pub use crate::algs::reroot::{reroot, reroot_at_node, reroot_at_node_index};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::observer::{LogObserver, SharedObserver, TreeEvent, TreeObserver};
    pub use crate::topology::functions::{
        degree, is_inner, is_leaf, is_root, node_depths, primary_node, secondary_node,
        subtree_sizes,
    };
    pub use crate::topology::iterator::{
        Visit, node_links, node_links_from, postorder, postorder_from, postorder_subtree,
        preorder, preorder_from, preorder_subtree,
    };
    pub use crate::topology::{
        EdgeIndex, LinkIndex, NodeIndex, Subtree, Tree, TreeContent, TreeData, TreeEdge,
        TreeLink, TreeNode, is_valid, validate_topology,
    };
    pub use crate::tree_error::{EntityKind, InvariantViolation, TreeError};
}
