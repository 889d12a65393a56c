use serde::{Deserialize, Serialize};

use super::index::{LinkIndex, NodeIndex};

/// A vertex of the tree, carrying a payload of type `N`.
///
/// The primary link is the node's link that points towards the root. It is
/// `None` only for the single node of a tree without edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode<N> {
    index: NodeIndex,
    primary_link: Option<LinkIndex>,
    data: N,
}

impl<N> TreeNode<N> {
    /// Assemble a node from raw parts, for format readers filling a
    /// [`TreeContent`](super::tree::TreeContent).
    pub fn new(index: NodeIndex, primary_link: Option<LinkIndex>, data: N) -> Self {
        Self {
            index,
            primary_link,
            data,
        }
    }

    #[inline]
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    #[inline]
    pub fn primary_link(&self) -> Option<LinkIndex> {
        self.primary_link
    }

    #[inline]
    pub fn data(&self) -> &N {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut N {
        &mut self.data
    }

    pub fn into_data(self) -> N {
        self.data
    }

    pub(crate) fn reset_index(&mut self, index: NodeIndex) {
        self.index = index;
    }

    pub(crate) fn reset_primary_link(&mut self, link: Option<LinkIndex>) {
        self.primary_link = link;
    }
}
