use super::functions::{check_edge, check_link, check_node};
use super::index::{EdgeIndex, LinkIndex, NodeIndex};
use super::tree::Tree;
use crate::tree_error::TreeError;

/// One side of an edge.
///
/// A subtree is named by the link at its top node that points out of it.
/// It contains that node and everything reachable from it without crossing
/// the link's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subtree {
    link: LinkIndex,
}

impl Subtree {
    /// The subtree whose top node owns `link`, excluding `link`'s edge side.
    pub fn new<N, E>(tree: &Tree<N, E>, link: LinkIndex) -> Result<Self, TreeError> {
        check_link(tree, link)?;
        Ok(Self { link })
    }

    /// `node` and everything below it, as seen from the root.
    ///
    /// For the root node this is everything except the side behind the root
    /// link. A single-node tree has no subtree.
    pub fn of_node<N, E>(tree: &Tree<N, E>, node: NodeIndex) -> Result<Self, TreeError> {
        check_node(tree, node)?;
        let link = tree
            .node(node)
            .primary_link()
            .ok_or(TreeError::SingleNodeTree)?;
        Ok(Self { link })
    }

    /// The side of `edge` that points away from the root.
    pub fn of_edge<N, E>(tree: &Tree<N, E>, edge: EdgeIndex) -> Result<Self, TreeError> {
        check_edge(tree, edge)?;
        Ok(Self {
            link: tree.edge(edge).secondary_link(),
        })
    }

    #[inline]
    pub fn link(&self) -> LinkIndex {
        self.link
    }

    /// The subtree's top node in `tree`.
    pub fn node<N, E>(&self, tree: &Tree<N, E>) -> Result<NodeIndex, TreeError> {
        check_link(tree, self.link)?;
        Ok(tree.link(self.link).node())
    }

    /// The complementary side of the same edge.
    ///
    /// Only the range of the link is checked; a handle taken from another
    /// tree yields whatever side that position names here.
    pub fn invert<N, E>(&self, tree: &Tree<N, E>) -> Result<Self, TreeError> {
        check_link(tree, self.link)?;
        Ok(Self {
            link: tree.link(self.link).outer(),
        })
    }
}
