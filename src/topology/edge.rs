use serde::{Deserialize, Serialize};

use super::index::{EdgeIndex, LinkIndex};

/// A connection between two nodes, carrying a payload of type `E`.
///
/// The primary link sits at the end nearer the root, the secondary link at
/// the far end, so `primary -> secondary` always points away from the root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge<E> {
    index: EdgeIndex,
    primary_link: LinkIndex,
    secondary_link: LinkIndex,
    data: E,
}

impl<E> TreeEdge<E> {
    /// Assemble an edge from raw parts, for format readers filling a
    /// [`TreeContent`](super::tree::TreeContent).
    pub fn new(
        index: EdgeIndex,
        primary_link: LinkIndex,
        secondary_link: LinkIndex,
        data: E,
    ) -> Self {
        Self {
            index,
            primary_link,
            secondary_link,
            data,
        }
    }

    #[inline]
    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    #[inline]
    pub fn primary_link(&self) -> LinkIndex {
        self.primary_link
    }

    #[inline]
    pub fn secondary_link(&self) -> LinkIndex {
        self.secondary_link
    }

    #[inline]
    pub fn data(&self) -> &E {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut E {
        &mut self.data
    }

    pub fn into_data(self) -> E {
        self.data
    }

    pub(crate) fn reset_index(&mut self, index: EdgeIndex) {
        self.index = index;
    }

    pub(crate) fn reset_primary_link(&mut self, link: LinkIndex) {
        self.primary_link = link;
    }

    pub(crate) fn reset_secondary_link(&mut self, link: LinkIndex) {
        self.secondary_link = link;
    }

    /// Flip the edge so it points the other way.
    pub(crate) fn swap_links(&mut self) {
        std::mem::swap(&mut self.primary_link, &mut self.secondary_link);
    }
}
