//! TreeLink: the unit of tree topology.
//!
//! Every link sits at one node and one end of one edge. The links of a node
//! form its rotation ring through `next`; the two links of an edge point at
//! each other through `outer`. Nodes and edges only add somewhere to store
//! data; the links alone describe the shape of the tree.

use serde::{Deserialize, Serialize};

use super::index::{EdgeIndex, LinkIndex, NodeIndex};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeLink {
    index: LinkIndex,
    next: LinkIndex,
    outer: LinkIndex,
    node: NodeIndex,
    edge: EdgeIndex,
}

impl TreeLink {
    /// Assemble a link from raw parts.
    ///
    /// Only format readers building a [`TreeContent`] need this; trees grown
    /// through the algorithms in [`crate::algs`] never construct links by hand.
    ///
    /// [`TreeContent`]: super::tree::TreeContent
    pub fn new(
        index: LinkIndex,
        next: LinkIndex,
        outer: LinkIndex,
        node: NodeIndex,
        edge: EdgeIndex,
    ) -> Self {
        Self {
            index,
            next,
            outer,
            node,
            edge,
        }
    }

    #[inline]
    pub fn index(&self) -> LinkIndex {
        self.index
    }

    /// Next link around the same node.
    #[inline]
    pub fn next(&self) -> LinkIndex {
        self.next
    }

    /// Link at the other end of this link's edge.
    #[inline]
    pub fn outer(&self) -> LinkIndex {
        self.outer
    }

    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    #[inline]
    pub fn edge(&self) -> EdgeIndex {
        self.edge
    }

    /// `true` if this link is the only one of its node.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.next == self.index
    }

    pub(crate) fn reset_index(&mut self, index: LinkIndex) {
        self.index = index;
    }

    pub(crate) fn reset_next(&mut self, next: LinkIndex) {
        self.next = next;
    }

    pub(crate) fn reset_outer(&mut self, outer: LinkIndex) {
        self.outer = outer;
    }

    pub(crate) fn reset_node(&mut self, node: NodeIndex) {
        self.node = node;
    }

    pub(crate) fn reset_edge(&mut self, edge: EdgeIndex) {
        self.edge = edge;
    }
}
