//! Dense renumbering after deletions.
//!
//! Every deletion marks the entities it drops and then runs one
//! [`compact`] pass: each collection is rebuilt from its survivors, every
//! survivor gets its new position as index, and every stored reference is
//! translated through an `old_to_new` map. The root link is translated last.

use crate::topology::_debug_invariants::inv_assert;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::tree::Tree;

/// Marker for positions without a new index.
const REMOVED: usize = usize::MAX;

/// Entities scheduled for removal, by kind.
#[derive(Debug, Default, Clone)]
pub(crate) struct Removal {
    pub links: Vec<LinkIndex>,
    pub nodes: Vec<NodeIndex>,
    pub edges: Vec<EdgeIndex>,
}

impl Removal {
    pub fn link(&mut self, link: LinkIndex) -> &mut Self {
        self.links.push(link);
        self
    }

    pub fn node(&mut self, node: NodeIndex) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn edge(&mut self, edge: EdgeIndex) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// `true` if `link` is scheduled for removal.
    pub fn has_link(&self, link: LinkIndex) -> bool {
        self.links.contains(&link)
    }
}

/// Maps every old position to its new one, or to [`REMOVED`].
fn old_to_new(count: usize, removed: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut map = vec![0usize; count];
    for pos in removed {
        if pos < count {
            map[pos] = REMOVED;
        }
    }
    let mut next = 0;
    for slot in &mut map {
        if *slot != REMOVED {
            *slot = next;
            next += 1;
        }
    }
    map
}

#[inline]
fn translate(map: &[usize], old: usize) -> usize {
    let new = map.get(old).copied().unwrap_or(REMOVED);
    inv_assert!(new != REMOVED, "survivor references removed position {old}");
    new
}

/// Removes the entities in `removal` and renumbers the survivors densely.
///
/// The caller must already have rewired every surviving reference away from
/// the removed entities. The root link must survive unless the tree is
/// reduced to a single node, in which case it must already be `None`.
pub(crate) fn compact<N, E>(tree: &mut Tree<N, E>, removal: &Removal) {
    let link_map = old_to_new(tree.link_count(), removal.links.iter().map(|l| l.get()));
    let node_map = old_to_new(tree.node_count(), removal.nodes.iter().map(|n| n.get()));
    let edge_map = old_to_new(tree.edge_count(), removal.edges.iter().map(|e| e.get()));

    let (links, nodes, edges) = tree.take_collections();

    let links = links
        .into_iter()
        .filter(|l| link_map[l.index().get()] != REMOVED)
        .map(|mut l| {
            l.reset_index(LinkIndex::new(translate(&link_map, l.index().get())));
            l.reset_next(LinkIndex::new(translate(&link_map, l.next().get())));
            l.reset_outer(LinkIndex::new(translate(&link_map, l.outer().get())));
            l.reset_node(NodeIndex::new(translate(&node_map, l.node().get())));
            l.reset_edge(EdgeIndex::new(translate(&edge_map, l.edge().get())));
            l
        })
        .collect();

    let nodes = nodes
        .into_iter()
        .filter(|n| node_map[n.index().get()] != REMOVED)
        .map(|mut n| {
            n.reset_index(NodeIndex::new(translate(&node_map, n.index().get())));
            let primary = n
                .primary_link()
                .map(|p| LinkIndex::new(translate(&link_map, p.get())));
            n.reset_primary_link(primary);
            n
        })
        .collect();

    let edges = edges
        .into_iter()
        .filter(|e| edge_map[e.index().get()] != REMOVED)
        .map(|mut e| {
            e.reset_index(EdgeIndex::new(translate(&edge_map, e.index().get())));
            let (p, s) = (e.primary_link(), e.secondary_link());
            e.reset_primary_link(LinkIndex::new(translate(&link_map, p.get())));
            e.reset_secondary_link(LinkIndex::new(translate(&link_map, s.get())));
            e
        })
        .collect();

    tree.put_collections(links, nodes, edges);

    let root = tree
        .root_link_index()
        .map(|r| LinkIndex::new(translate(&link_map, r.get())));
    tree.reset_root_link(root);
}
