//! Ordering children by subtree size.

use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::observer::TreeEvent;
use crate::topology::_debug_invariants::assert_tree_valid;
use crate::topology::functions::subtree_sizes;
use crate::topology::index::{LinkIndex, NodeIndex};
use crate::topology::tree::Tree;

/// Direction of [`ladderize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LadderizeOrder {
    /// Smallest subtree first.
    #[default]
    SmallFirst,
    /// Largest subtree first.
    LargeFirst,
}

/// Reorders every node's children by the size of the subtree below them.
///
/// The link towards the root keeps its place at the head of each ring, so
/// the root's first child (behind the root link) is never moved. Children of
/// equal size keep their relative order, which makes repeated runs a no-op.
pub fn ladderize<N, E>(tree: &mut Tree<N, E>, order: LadderizeOrder) {
    let sizes = subtree_sizes(tree);
    let mut reordered = 0usize;

    for pos in 0..tree.node_count() {
        let Some(primary) = tree.node(NodeIndex::new(pos)).primary_link() else {
            continue;
        };

        let mut children: Vec<LinkIndex> = Vec::new();
        let mut cur = tree.link(primary).next();
        while cur != primary {
            children.push(cur);
            cur = tree.link(cur).next();
        }
        if children.len() < 2 {
            continue;
        }

        let size_of = |link: LinkIndex| sizes[tree.link(tree.link(link).outer()).node().get()];
        let sorted: Vec<LinkIndex> = match order {
            LadderizeOrder::SmallFirst => children
                .iter()
                .copied()
                .sorted_by_key(|&l| size_of(l))
                .collect(),
            LadderizeOrder::LargeFirst => children
                .iter()
                .copied()
                .sorted_by_key(|&l| Reverse(size_of(l)))
                .collect(),
        };
        if sorted == children {
            continue;
        }
        reordered += 1;

        let mut prev = primary;
        for &link in &sorted {
            tree.link_mut(prev).reset_next(link);
            prev = link;
        }
        tree.link_mut(prev).reset_next(primary);
    }

    assert_tree_valid!(tree);
    tree.notify(TreeEvent::Ladderized {
        reordered_nodes: reordered,
    });
}
