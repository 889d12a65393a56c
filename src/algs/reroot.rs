//! Moving the root.
//!
//! Only the edges on the path between the old and the new root change
//! direction; everything else already points away from both.

use crate::observer::TreeEvent;
use crate::topology::_debug_invariants::{assert_tree_valid, inv_assert_eq};
use crate::topology::functions::{check_link, check_node};
use crate::topology::index::{LinkIndex, NodeIndex};
use crate::topology::tree::Tree;
use crate::tree_error::TreeError;

/// Makes `at_link` the root link, and its node the root.
///
/// The traversal order around the new root starts with the side behind
/// `at_link`. Rerooting at the current root link changes nothing.
pub fn reroot<N, E>(tree: &mut Tree<N, E>, at_link: LinkIndex) -> Result<(), TreeError> {
    check_link(tree, at_link)?;
    let Some(old_root) = tree.root_node_index() else {
        return Err(TreeError::EmptyTree);
    };
    let target = tree.link(at_link).node();
    let Some(mut cur) = tree.node(target).primary_link() else {
        return Err(TreeError::SingleNodeTree);
    };

    tree.reset_root_link(Some(at_link));
    tree.node_mut(target).reset_primary_link(Some(at_link));

    let mut flipped = 0usize;
    while tree.link(cur).node() != old_root {
        let edge = tree.link(cur).edge();
        inv_assert_eq!(tree.edge(edge).secondary_link(), cur);
        tree.edge_mut(edge).swap_links();
        flipped += 1;

        let outer = tree.link(cur).outer();
        let upper = tree.link(outer).node();
        let Some(to_root) = tree.node(upper).primary_link() else {
            break;
        };
        tree.node_mut(upper).reset_primary_link(Some(outer));
        cur = to_root;
    }

    assert_tree_valid!(tree);
    tree.notify(TreeEvent::Rerooted {
        root_link: at_link,
        flipped_edges: flipped,
    });
    Ok(())
}

/// Makes `node` the root, keeping its current primary link as root link so
/// that its former parent side is traversed first.
///
/// A single-node tree is already rooted at its node; nothing happens.
pub fn reroot_at_node<N, E>(tree: &mut Tree<N, E>, node: NodeIndex) -> Result<(), TreeError> {
    check_node(tree, node)?;
    match tree.node(node).primary_link() {
        Some(link) => reroot(tree, link),
        None => Ok(()),
    }
}

/// [`reroot_at_node`] for a raw node position.
pub fn reroot_at_node_index<N, E>(tree: &mut Tree<N, E>, index: usize) -> Result<(), TreeError> {
    reroot_at_node(tree, NodeIndex::new(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::manipulation::add_new_node;
    use crate::topology::functions::is_root;
    use crate::topology::validation::validate_topology;

    /// 0 -> 1 -> 2 -> 3
    fn chain() -> Tree<u8, u8> {
        let mut t = Tree::with_root(0);
        let mut last = NodeIndex::new(0);
        for _ in 0..3 {
            last = add_new_node(&mut t, last).unwrap();
        }
        t
    }

    #[test]
    fn reroot_flips_path_edges() {
        let mut t = chain();
        let observed = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&observed);
        t.set_observer(std::sync::Arc::new(move |e: &TreeEvent| {
            sink.lock().unwrap().push(e.clone());
        }));

        reroot_at_node(&mut t, NodeIndex::new(3)).unwrap();
        assert!(is_root(&t, NodeIndex::new(3)));
        assert_eq!(validate_topology(&t), Ok(()));
        for edge in t.edges() {
            let p = t.link_at(edge.primary_link()).unwrap().node().get();
            let s = t.link_at(edge.secondary_link()).unwrap().node().get();
            assert_eq!(p, s + 1);
        }
        assert!(matches!(
            observed.lock().unwrap().as_slice(),
            [TreeEvent::Rerooted {
                flipped_edges: 3,
                ..
            }]
        ));
    }

    #[test]
    fn reroot_at_root_is_noop() {
        let mut t = chain();
        let before = t.clone().export_content();
        let root = t.root_link_index().unwrap();
        reroot(&mut t, root).unwrap();
        assert_eq!(t.export_content(), before);
    }

    #[test]
    fn reroot_on_lone_node_is_noop() {
        let mut t: Tree<u8, u8> = Tree::with_root(0);
        reroot_at_node_index(&mut t, 0).unwrap();
        assert_eq!(t.root_node_index(), Some(NodeIndex::new(0)));
        assert!(reroot_at_node_index(&mut t, 1).is_err());
    }
}
