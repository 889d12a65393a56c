//! TreeError: Unified error type for phylo-tree public APIs
//!
//! Every public entry point that can fail returns one of these instead of
//! panicking. Precondition failures are reported before any mutation happens,
//! so a tree is never left half-edited by an `Err`.

use std::fmt;
use thiserror::Error;

use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};

/// The three entity collections owned by a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Link,
    Node,
    Edge,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Link => f.write_str("link"),
            EntityKind::Node => f.write_str("node"),
            EntityKind::Edge => f.write_str("edge"),
        }
    }
}

/// Unified error type for tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Bounds-checked accessor called with an index past the collection end.
    #[error("{kind} index {index} out of range (count {count})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: usize,
        count: usize,
    },
    /// A mutation argument does not refer to an entity of the target tree.
    #[error("{kind} {index} is not part of the tree")]
    NotInTree { kind: EntityKind, index: usize },
    /// A deletion algorithm was called on a node of the wrong degree.
    #[error("node {node} has degree {found}, expected {expected}")]
    DegreeMismatch {
        node: NodeIndex,
        expected: usize,
        found: usize,
    },
    /// The tree has no nodes at all.
    #[error("tree is empty")]
    EmptyTree,
    /// The tree consists of a single node and therefore has no root link.
    #[error("single-node tree has no links")]
    SingleNodeTree,
    /// The validator found a broken invariant.
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl TreeError {
    pub(crate) fn link_not_in_tree(link: LinkIndex) -> Self {
        TreeError::NotInTree {
            kind: EntityKind::Link,
            index: link.get(),
        }
    }

    pub(crate) fn node_not_in_tree(node: NodeIndex) -> Self {
        TreeError::NotInTree {
            kind: EntityKind::Node,
            index: node.get(),
        }
    }

    pub(crate) fn edge_not_in_tree(edge: EdgeIndex) -> Self {
        TreeError::NotInTree {
            kind: EntityKind::Edge,
            index: edge.get(),
        }
    }

    /// `true` for errors raised by a violated precondition, which leave the
    /// tree untouched.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TreeError::NotInTree { .. }
                | TreeError::DegreeMismatch { .. }
                | TreeError::EmptyTree
                | TreeError::SingleNodeTree
        )
    }
}

/// First broken invariant reported by [`validate_topology`].
///
/// [`validate_topology`]: crate::topology::validation::validate_topology
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("collection sizes inconsistent: {links} links, {nodes} nodes, {edges} edges")]
    CountMismatch {
        links: usize,
        nodes: usize,
        edges: usize,
    },
    #[error("{kind} at position {position} stores index {stored}")]
    IndexMismatch {
        kind: EntityKind,
        position: usize,
        stored: usize,
    },
    #[error("{owner} {owner_index} references {kind} {index}, which does not exist")]
    DanglingReference {
        owner: EntityKind,
        owner_index: usize,
        kind: EntityKind,
        index: usize,
    },
    #[error("link {link} is not paired symmetrically with its outer link {outer}")]
    OuterNotSymmetric { link: LinkIndex, outer: LinkIndex },
    #[error("link {link} and its outer link {outer} belong to different edges")]
    OuterEdgeMismatch { link: LinkIndex, outer: LinkIndex },
    #[error("edge {edge} does not end at link {link}")]
    EdgeLinkMismatch { edge: EdgeIndex, link: LinkIndex },
    #[error("node {node} has no primary link")]
    MissingPrimaryLink { node: NodeIndex },
    #[error("primary link {link} of node {node} belongs to another node")]
    PrimaryLinkForeign { node: NodeIndex, link: LinkIndex },
    #[error("rotation ring of node {node} does not close (link {link} belongs elsewhere)")]
    RingNotClosed { node: NodeIndex, link: LinkIndex },
    #[error("link {link} appears in no rotation ring, or in more than one")]
    RingCoverage { link: LinkIndex },
    #[error("root designation invalid: {0}")]
    Root(&'static str),
    #[error("edge {edge} points towards the root")]
    EdgeDirection { edge: EdgeIndex },
    #[error("primary link of node {node} does not point towards the root")]
    PrimaryLinkDirection { node: NodeIndex },
    #[error("node {node} is reached twice from the root")]
    Cycle { node: NodeIndex },
    #[error("{reached} of {total} nodes are reachable from the root")]
    Disconnected { reached: usize, total: usize },
}
