//! Topology validation.
//!
//! The editing algorithms keep every invariant on their own; validation is
//! for content that arrived from outside (bulk import) and for tests. Checks
//! run in a fixed order and stop at the first violation:
//!
//! 1. stored indices equal positions,
//! 2. collection sizes fit a tree,
//! 3. every stored reference is in range,
//! 4. the root designation is well formed,
//! 5. link pairs and edge ends agree,
//! 6. rotation rings close and cover every link exactly once,
//! 7. edges and primary links point consistently with the distance from the
//!    root, and every node is reachable,
//! 8. the root link is the root node's primary link.

use super::index::{EdgeIndex, LinkIndex, NodeIndex};
use super::tree::Tree;
use crate::debug_invariants::DebugInvariants;
use crate::tree_error::{EntityKind, InvariantViolation, TreeError};

/// Checks every invariant of `tree`, returning the first violation.
///
/// Failures are also reported at `info` level through the `log` facade.
pub fn validate_topology<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    let result = check_all(tree);
    if let Err(violation) = &result {
        log::info!("tree validation failed: {violation}");
    }
    result
}

/// `true` if [`validate_topology`] passes.
pub fn is_valid<N, E>(tree: &Tree<N, E>) -> bool {
    validate_topology(tree).is_ok()
}

fn check_all<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    check_indices(tree)?;
    check_counts(tree)?;
    check_references(tree)?;
    check_root_designation(tree)?;
    if tree.link_count() == 0 {
        return Ok(());
    }
    check_pairing(tree)?;
    check_rings(tree)?;
    check_directions(tree)?;
    check_root_primary(tree)
}

fn check_counts<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    let (links, nodes, edges) = (tree.link_count(), tree.node_count(), tree.edge_count());
    let shaped = if nodes == 0 {
        links == 0 && edges == 0
    } else {
        links == 2 * edges && nodes == edges + 1
    };
    if shaped {
        Ok(())
    } else {
        Err(InvariantViolation::CountMismatch {
            links,
            nodes,
            edges,
        })
    }
}

fn check_indices<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    let mismatch = |kind, position: usize, stored: usize| {
        (position != stored).then_some(InvariantViolation::IndexMismatch {
            kind,
            position,
            stored,
        })
    };
    for (pos, link) in tree.links().enumerate() {
        if let Some(v) = mismatch(EntityKind::Link, pos, link.index().get()) {
            return Err(v);
        }
    }
    for (pos, node) in tree.nodes().enumerate() {
        if let Some(v) = mismatch(EntityKind::Node, pos, node.index().get()) {
            return Err(v);
        }
    }
    for (pos, edge) in tree.edges().enumerate() {
        if let Some(v) = mismatch(EntityKind::Edge, pos, edge.index().get()) {
            return Err(v);
        }
    }
    Ok(())
}

fn check_references<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    let (links, nodes, edges) = (tree.link_count(), tree.node_count(), tree.edge_count());
    let dangling = |owner, owner_index: usize, kind, index: usize, count: usize| {
        (index >= count).then_some(InvariantViolation::DanglingReference {
            owner,
            owner_index,
            kind,
            index,
        })
    };

    for link in tree.links() {
        let at = link.index().get();
        let refs = [
            (EntityKind::Link, link.next().get(), links),
            (EntityKind::Link, link.outer().get(), links),
            (EntityKind::Node, link.node().get(), nodes),
            (EntityKind::Edge, link.edge().get(), edges),
        ];
        for (kind, index, count) in refs {
            if let Some(v) = dangling(EntityKind::Link, at, kind, index, count) {
                return Err(v);
            }
        }
    }
    for node in tree.nodes() {
        match node.primary_link() {
            Some(link) => {
                let at = node.index().get();
                if let Some(v) = dangling(EntityKind::Node, at, EntityKind::Link, link.get(), links)
                {
                    return Err(v);
                }
            }
            None if links > 0 => {
                return Err(InvariantViolation::MissingPrimaryLink { node: node.index() });
            }
            None => {}
        }
    }
    for edge in tree.edges() {
        let at = edge.index().get();
        for link in [edge.primary_link(), edge.secondary_link()] {
            if let Some(v) = dangling(EntityKind::Edge, at, EntityKind::Link, link.get(), links) {
                return Err(v);
            }
        }
    }
    Ok(())
}

fn check_root_designation<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    match (tree.root_link_index(), tree.link_count()) {
        (None, 0) => Ok(()),
        (Some(_), 0) => Err(InvariantViolation::Root("root link set on a tree without links")),
        (None, _) => Err(InvariantViolation::Root("missing root link")),
        (Some(root), count) if root.get() >= count => {
            Err(InvariantViolation::Root("root link out of range"))
        }
        (Some(_), _) => Ok(()),
    }
}

fn check_pairing<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    for link in tree.links() {
        let (idx, outer) = (link.index(), link.outer());
        if outer == idx || tree.link(outer).outer() != idx {
            return Err(InvariantViolation::OuterNotSymmetric { link: idx, outer });
        }
        if tree.link(outer).edge() != link.edge() {
            return Err(InvariantViolation::OuterEdgeMismatch { link: idx, outer });
        }
        let edge = tree.edge(link.edge());
        if edge.primary_link() != idx && edge.secondary_link() != idx {
            return Err(InvariantViolation::EdgeLinkMismatch {
                edge: edge.index(),
                link: idx,
            });
        }
    }
    for edge in tree.edges() {
        for link in [edge.primary_link(), edge.secondary_link()] {
            if tree.link(link).edge() != edge.index() {
                return Err(InvariantViolation::EdgeLinkMismatch {
                    edge: edge.index(),
                    link,
                });
            }
        }
    }
    Ok(())
}

fn check_rings<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    let mut seen = vec![false; tree.link_count()];
    for node in tree.nodes() {
        let idx = node.index();
        let Some(primary) = node.primary_link() else {
            return Err(InvariantViolation::MissingPrimaryLink { node: idx });
        };
        if tree.link(primary).node() != idx {
            return Err(InvariantViolation::PrimaryLinkForeign {
                node: idx,
                link: primary,
            });
        }
        let mut cur = primary;
        loop {
            if tree.link(cur).node() != idx || seen[cur.get()] {
                return Err(InvariantViolation::RingNotClosed {
                    node: idx,
                    link: cur,
                });
            }
            seen[cur.get()] = true;
            cur = tree.link(cur).next();
            if cur == primary {
                break;
            }
        }
    }
    match seen.iter().position(|s| !s) {
        Some(pos) => Err(InvariantViolation::RingCoverage {
            link: LinkIndex::new(pos),
        }),
        None => Ok(()),
    }
}

fn check_root_primary<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    let Some(root) = tree.root_link_index() else {
        return Err(InvariantViolation::Root("missing root link"));
    };
    let node = tree.link(root).node();
    if tree.node(node).primary_link() == Some(root) {
        Ok(())
    } else {
        Err(InvariantViolation::Root(
            "root link is not the root node's primary link",
        ))
    }
}

/// Walks outwards from the root. Every link met on the way out must be the
/// primary end of its edge; every link entering a node must be that node's
/// primary link and the secondary end of its edge.
fn check_directions<N, E>(tree: &Tree<N, E>) -> Result<(), InvariantViolation> {
    let Some(root) = tree.root_link_index() else {
        return Err(InvariantViolation::Root("missing root link"));
    };
    let mut visited = vec![false; tree.node_count()];
    let mut reached = 0usize;
    let mut stack: Vec<(LinkIndex, bool)> = vec![(root, true)];

    while let Some((entry, is_root)) = stack.pop() {
        let node: NodeIndex = tree.link(entry).node();
        if visited[node.get()] {
            return Err(InvariantViolation::Cycle { node });
        }
        visited[node.get()] = true;
        reached += 1;

        if !is_root {
            if tree.node(node).primary_link() != Some(entry) {
                return Err(InvariantViolation::PrimaryLinkDirection { node });
            }
            let edge: EdgeIndex = tree.link(entry).edge();
            if tree.edge(edge).secondary_link() != entry {
                return Err(InvariantViolation::EdgeDirection { edge });
            }
        }

        let mut cur = if is_root { entry } else { tree.link(entry).next() };
        loop {
            if !is_root && cur == entry {
                break;
            }
            let edge = tree.link(cur).edge();
            if tree.edge(edge).primary_link() != cur {
                return Err(InvariantViolation::EdgeDirection { edge });
            }
            stack.push((tree.link(cur).outer(), false));
            cur = tree.link(cur).next();
            if is_root && cur == entry {
                break;
            }
        }
    }

    if reached == tree.node_count() {
        Ok(())
    } else {
        Err(InvariantViolation::Disconnected {
            reached,
            total: tree.node_count(),
        })
    }
}

impl<N, E> DebugInvariants for Tree<N, E> {
    fn validate_invariants(&self) -> Result<(), TreeError> {
        validate_topology(self).map_err(TreeError::from)
    }
}
