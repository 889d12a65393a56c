//! Top-level module for tree topology.
//!
//! This module provides the entity types and the container that represent a
//! rooted tree as links, nodes and edges addressed by typed indices.
//! It includes:
//! - [`TreeLink`], [`TreeNode`], [`TreeEdge`] and their index types
//! - the [`Tree`] container with bulk import and export
//! - traversal iterators and small topology queries
//! - the validator for trees assembled from raw content
//!
//! Structural edits live in [`crate::algs`].

pub(crate) mod _debug_invariants;
pub mod bounds;
pub mod edge;
pub mod functions;
pub mod index;
pub mod iterator;
pub mod link;
pub mod node;
pub mod subtree;
pub mod tree;
pub mod validation;

pub use bounds::TreeData;
pub use edge::TreeEdge;
pub use index::{EdgeIndex, LinkIndex, NodeIndex};
pub use link::TreeLink;
pub use node::TreeNode;
pub use subtree::Subtree;
pub use tree::{Tree, TreeContent};
pub use validation::{is_valid, validate_topology};

#[cfg(test)]
mod tests;
