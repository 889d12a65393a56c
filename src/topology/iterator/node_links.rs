//! Circular enumeration of the links around one node.

use super::Visit;
use crate::topology::functions::{check_link, check_node};
use crate::topology::index::{LinkIndex, NodeIndex};
use crate::topology::tree::Tree;
use crate::tree_error::TreeError;

/// Walks `next` from a start link until it comes back, yielding every link
/// of the node exactly once. Each item's edge is the edge of that link.
pub struct NodeLinks<'a, N, E> {
    tree: &'a Tree<N, E>,
    start: LinkIndex,
    cur: Option<LinkIndex>,
}

impl<'a, N, E> Iterator for NodeLinks<'a, N, E> {
    type Item = Visit<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.cur?;
        let l = self.tree.link(cur);
        let next = l.next();
        self.cur = (next != self.start).then_some(next);
        Some(
            Visit::new(self.tree, Some(cur), l.node(), Some(l.edge()))
                .first(cur == self.start)
                .last(self.cur.is_none()),
        )
    }
}

/// The links of `node`, starting with its primary link (the one towards the
/// root), which is flagged by [`Visit::is_first_iteration`].
///
/// The node of a single-node tree has no links and yields nothing.
pub fn node_links<N, E>(
    tree: &Tree<N, E>,
    node: NodeIndex,
) -> Result<NodeLinks<'_, N, E>, TreeError> {
    check_node(tree, node)?;
    let start = tree.node(node).primary_link();
    Ok(NodeLinks {
        tree,
        start: start.unwrap_or(LinkIndex::new(0)),
        cur: start,
    })
}

/// The links of `link`'s node, starting with `link`.
pub fn node_links_from<N, E>(
    tree: &Tree<N, E>,
    link: LinkIndex,
) -> Result<NodeLinks<'_, N, E>, TreeError> {
    check_link(tree, link)?;
    Ok(NodeLinks {
        tree,
        start: link,
        cur: Some(link),
    })
}
