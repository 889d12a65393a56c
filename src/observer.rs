//! Diagnostic hooks for structural edits.
//!
//! The algorithms never log on their own. A tree may carry a
//! [`TreeObserver`] which receives one [`TreeEvent`] after every completed
//! edit; [`LogObserver`] forwards those events to the `log` facade.

use std::sync::Arc;

use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};

/// A completed structural edit.
///
/// Indices are valid in the tree as it is right after the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// A leaf was attached to `parent`.
    NodeAdded {
        node: NodeIndex,
        parent: NodeIndex,
        edge: EdgeIndex,
    },
    /// `edge` was split by `node`; `new_edge` is the far half.
    EdgeSplit {
        edge: EdgeIndex,
        node: NodeIndex,
        new_edge: EdgeIndex,
    },
    /// A node of the given degree was removed (leaf or linear deletion).
    NodeDeleted { degree: usize },
    /// A subtree was excised in one pass.
    SubtreeDeleted {
        nodes: usize,
        edges: usize,
        links: usize,
    },
    /// An edge was contracted and its far node merged into `node`.
    EdgeContracted { node: NodeIndex },
    /// The root moved to `root_link`.
    Rerooted {
        root_link: LinkIndex,
        flipped_edges: usize,
    },
    /// Rotation rings were reordered by subtree size.
    Ladderized { reordered_nodes: usize },
    /// Collections were replaced through bulk import.
    ContentImported {
        links: usize,
        nodes: usize,
        edges: usize,
    },
    /// The tree was emptied.
    Cleared,
}

/// Receives structural edit events from the tree it is attached to.
pub trait TreeObserver: Send + Sync {
    fn on_event(&self, event: &TreeEvent);
}

impl<F> TreeObserver for F
where
    F: Fn(&TreeEvent) + Send + Sync,
{
    fn on_event(&self, event: &TreeEvent) {
        self(event)
    }
}

/// Shared handle to an observer, cloned along with the tree.
pub type SharedObserver = Arc<dyn TreeObserver>;

/// Forwards every event to `log::debug!` under the `phylo_tree::edit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TreeObserver for LogObserver {
    fn on_event(&self, event: &TreeEvent) {
        log::debug!(target: "phylo_tree::edit", "{event:?}");
    }
}
