//! The tree container.
//!
//! [`Tree`] owns three dense collections (links, nodes, edges) and the root
//! designation. Entities refer to each other by typed index only, so moving,
//! swapping or cloning the collections never invalidates a reference.
//!
//! Structural edits go through the functions in [`crate::algs`]; the
//! container itself only offers access, bulk transfer and clearing.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::TreeEdge;
use super::index::{EdgeIndex, LinkIndex, NodeIndex};
use super::link::TreeLink;
use super::node::TreeNode;
use crate::observer::{SharedObserver, TreeEvent};
use crate::tree_error::{EntityKind, TreeError};

/// The three raw collections plus the root link, moved in and out of a tree
/// in one step by [`Tree::import_content`] and [`Tree::export_content`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeContent<N, E> {
    pub links: Vec<TreeLink>,
    pub nodes: Vec<TreeNode<N>>,
    pub edges: Vec<TreeEdge<E>>,
    pub root_link: Option<LinkIndex>,
}

impl<N, E> Default for TreeContent<N, E> {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            root_link: None,
        }
    }
}

/// A rooted tree with node payloads `N` and edge payloads `E`.
///
/// # Invariants
/// - Every entity's stored index equals its position.
/// - A tree with edges has a root link, and the root node's primary link is
///   that link. A single-node tree has no links and its node is the root.
/// - Every edge's primary link is on the root side.
///
/// Check them with [`validate_topology`](super::validation::validate_topology).
#[derive(Clone)]
pub struct Tree<N = (), E = ()> {
    links: Vec<TreeLink>,
    nodes: Vec<TreeNode<N>>,
    edges: Vec<TreeEdge<E>>,
    root_link: Option<LinkIndex>,
    observer: Option<SharedObserver>,
}

impl<N, E> Default for Tree<N, E> {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            root_link: None,
            observer: None,
        }
    }
}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Tree<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("links", &self.links)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("root_link", &self.root_link)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// One-line size summary.
impl<N, E> fmt::Display for Tree<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tree: {} nodes, {} edges, {} links",
            self.nodes.len(),
            self.edges.len(),
            self.links.len()
        )
    }
}

impl<N, E> Tree<N, E> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree made of a single root node.
    ///
    /// Grow it with [`add_new_node`](crate::algs::manipulation::add_new_node).
    pub fn with_root(data: N) -> Self {
        Self {
            nodes: vec![TreeNode::new(NodeIndex::new(0), None, data)],
            ..Self::default()
        }
    }

    /// Builds a tree directly from raw content. Nothing is validated.
    pub fn from_content(content: TreeContent<N, E>) -> Self {
        let mut tree = Self::default();
        tree.import_content(content);
        tree
    }

    // ---------------------------------------------------------------------
    //     Counts
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ---------------------------------------------------------------------
    //     Checked access
    // ---------------------------------------------------------------------

    pub fn link_at(&self, index: LinkIndex) -> Result<&TreeLink, TreeError> {
        self.links.get(index.get()).ok_or(TreeError::IndexOutOfRange {
            kind: EntityKind::Link,
            index: index.get(),
            count: self.links.len(),
        })
    }

    pub fn node_at(&self, index: NodeIndex) -> Result<&TreeNode<N>, TreeError> {
        self.nodes.get(index.get()).ok_or(TreeError::IndexOutOfRange {
            kind: EntityKind::Node,
            index: index.get(),
            count: self.nodes.len(),
        })
    }

    /// Mutable node access. Only the payload can be changed through it.
    pub fn node_at_mut(&mut self, index: NodeIndex) -> Result<&mut TreeNode<N>, TreeError> {
        let count = self.nodes.len();
        self.nodes
            .get_mut(index.get())
            .ok_or(TreeError::IndexOutOfRange {
                kind: EntityKind::Node,
                index: index.get(),
                count,
            })
    }

    pub fn edge_at(&self, index: EdgeIndex) -> Result<&TreeEdge<E>, TreeError> {
        self.edges.get(index.get()).ok_or(TreeError::IndexOutOfRange {
            kind: EntityKind::Edge,
            index: index.get(),
            count: self.edges.len(),
        })
    }

    /// Mutable edge access. Only the payload can be changed through it.
    pub fn edge_at_mut(&mut self, index: EdgeIndex) -> Result<&mut TreeEdge<E>, TreeError> {
        let count = self.edges.len();
        self.edges
            .get_mut(index.get())
            .ok_or(TreeError::IndexOutOfRange {
                kind: EntityKind::Edge,
                index: index.get(),
                count,
            })
    }

    // ---------------------------------------------------------------------
    //     Root
    // ---------------------------------------------------------------------

    /// Index of the root link; `None` for empty and single-node trees.
    #[inline]
    pub fn root_link_index(&self) -> Option<LinkIndex> {
        self.root_link
    }

    /// Index of the root node; `None` only for an empty tree.
    pub fn root_node_index(&self) -> Option<NodeIndex> {
        match self.root_link {
            Some(link) => self.links.get(link.get()).map(TreeLink::node),
            None if self.nodes.len() == 1 => Some(NodeIndex::new(0)),
            None => None,
        }
    }

    pub fn root_link(&self) -> Result<&TreeLink, TreeError> {
        match self.root_link {
            Some(link) => self.link_at(link),
            None if self.nodes.is_empty() => Err(TreeError::EmptyTree),
            None => Err(TreeError::SingleNodeTree),
        }
    }

    pub fn root_node(&self) -> Result<&TreeNode<N>, TreeError> {
        let node = self.root_node_index().ok_or(TreeError::EmptyTree)?;
        self.node_at(node)
    }

    // ---------------------------------------------------------------------
    //     Iteration over the raw collections
    // ---------------------------------------------------------------------

    pub fn links(&self) -> std::slice::Iter<'_, TreeLink> {
        self.links.iter()
    }

    pub fn nodes(&self) -> std::slice::Iter<'_, TreeNode<N>> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> std::slice::IterMut<'_, TreeNode<N>> {
        self.nodes.iter_mut()
    }

    pub fn edges(&self) -> std::slice::Iter<'_, TreeEdge<E>> {
        self.edges.iter()
    }

    pub fn edges_mut(&mut self) -> std::slice::IterMut<'_, TreeEdge<E>> {
        self.edges.iter_mut()
    }

    // ---------------------------------------------------------------------
    //     Whole-content operations
    // ---------------------------------------------------------------------

    /// Removes every entity and the root designation. The observer stays.
    pub fn clear(&mut self) {
        self.links.clear();
        self.nodes.clear();
        self.edges.clear();
        self.root_link = None;
        self.notify(TreeEvent::Cleared);
    }

    /// Replaces the contents with `content`.
    ///
    /// No validation happens here; call
    /// [`validate_topology`](super::validation::validate_topology) afterwards.
    pub fn import_content(&mut self, content: TreeContent<N, E>) {
        let TreeContent {
            links,
            nodes,
            edges,
            root_link,
        } = content;
        self.links = links;
        self.nodes = nodes;
        self.edges = edges;
        self.root_link = root_link;
        self.notify(TreeEvent::ContentImported {
            links: self.links.len(),
            nodes: self.nodes.len(),
            edges: self.edges.len(),
        });
    }

    /// Moves the contents out, leaving the tree empty.
    pub fn export_content(&mut self) -> TreeContent<N, E> {
        TreeContent {
            links: std::mem::take(&mut self.links),
            nodes: std::mem::take(&mut self.nodes),
            edges: std::mem::take(&mut self.edges),
            root_link: self.root_link.take(),
        }
    }

    /// Exchanges the full contents (observers included) of two trees without
    /// copying any entity.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    // ---------------------------------------------------------------------
    //     Observer
    // ---------------------------------------------------------------------

    pub fn set_observer(&mut self, observer: SharedObserver) {
        self.observer = Some(observer);
    }

    pub fn take_observer(&mut self) -> Option<SharedObserver> {
        self.observer.take()
    }

    pub(crate) fn notify(&self, event: TreeEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }

    // ---------------------------------------------------------------------
    //     Crate-internal access for the algorithms
    //
    //     These index without checks. Callers validate their arguments
    //     up front, after which every stored index is in range.
    // ---------------------------------------------------------------------

    #[inline]
    pub(crate) fn link(&self, index: LinkIndex) -> &TreeLink {
        &self.links[index.get()]
    }

    #[inline]
    pub(crate) fn link_mut(&mut self, index: LinkIndex) -> &mut TreeLink {
        &mut self.links[index.get()]
    }

    #[inline]
    pub(crate) fn node(&self, index: NodeIndex) -> &TreeNode<N> {
        &self.nodes[index.get()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut TreeNode<N> {
        &mut self.nodes[index.get()]
    }

    #[inline]
    pub(crate) fn edge(&self, index: EdgeIndex) -> &TreeEdge<E> {
        &self.edges[index.get()]
    }

    #[inline]
    pub(crate) fn edge_mut(&mut self, index: EdgeIndex) -> &mut TreeEdge<E> {
        &mut self.edges[index.get()]
    }

    /// Two distinct edges borrowed mutably at once.
    pub(crate) fn edge_pair_mut(
        &mut self,
        a: EdgeIndex,
        b: EdgeIndex,
    ) -> (&mut TreeEdge<E>, &mut TreeEdge<E>) {
        pair_mut(&mut self.edges, a.get(), b.get())
    }

    /// Two distinct nodes borrowed mutably at once.
    pub(crate) fn node_pair_mut(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
    ) -> (&mut TreeNode<N>, &mut TreeNode<N>) {
        pair_mut(&mut self.nodes, a.get(), b.get())
    }

    pub(crate) fn push_link(&mut self, link: TreeLink) {
        self.links.push(link);
    }

    pub(crate) fn push_node(&mut self, node: TreeNode<N>) {
        self.nodes.push(node);
    }

    pub(crate) fn push_edge(&mut self, edge: TreeEdge<E>) {
        self.edges.push(edge);
    }

    pub(crate) fn reset_root_link(&mut self, link: Option<LinkIndex>) {
        self.root_link = link;
    }

    /// Moves the three collections out for a rebuilding pass. The root link
    /// stays in place; the caller resets it once the new indices are known.
    pub(crate) fn take_collections(
        &mut self,
    ) -> (Vec<TreeLink>, Vec<TreeNode<N>>, Vec<TreeEdge<E>>) {
        (
            std::mem::take(&mut self.links),
            std::mem::take(&mut self.nodes),
            std::mem::take(&mut self.edges),
        )
    }

    pub(crate) fn put_collections(
        &mut self,
        links: Vec<TreeLink>,
        nodes: Vec<TreeNode<N>>,
        edges: Vec<TreeEdge<E>>,
    ) {
        self.links = links;
        self.nodes = nodes;
        self.edges = edges;
    }
}

impl<N, E> From<TreeContent<N, E>> for Tree<N, E> {
    fn from(content: TreeContent<N, E>) -> Self {
        Self::from_content(content)
    }
}

fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b, "pair_mut needs two distinct positions");
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
