//! Strong, zero-cost handles for tree entities.
//!
//! Links, nodes and edges live in three dense collections and refer to each
//! other by position. Each kind gets its own `usize` newtype so a node index
//! can never be handed to an edge accessor by mistake.
//!
//! Indices are only stable until the next deletion: every deletion compacts
//! the collections and renumbers the survivors.

use std::fmt;

macro_rules! tree_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw position.
            #[inline]
            pub const fn new(raw: usize) -> Self {
                Self(raw)
            }

            /// Returns the raw position.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw position.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

tree_index!(
    /// Position of a [`TreeLink`](super::link::TreeLink) in its tree.
    LinkIndex
);
tree_index!(
    /// Position of a [`TreeNode`](super::node::TreeNode) in its tree.
    NodeIndex
);
tree_index!(
    /// Position of a [`TreeEdge`](super::edge::TreeEdge) in its tree.
    EdgeIndex
);

static_assertions::assert_eq_size!(LinkIndex, usize);
static_assertions::assert_eq_size!(NodeIndex, usize);
static_assertions::assert_eq_size!(EdgeIndex, usize);
