mod validation_tests;

use crate::algs::manipulation::add_new_node;
use crate::topology::index::NodeIndex;
use crate::topology::tree::Tree;

/// Root 0 with children 1 and 2; node 1 has children 3 and 4.
pub(super) fn small_tree() -> Tree<u32, u32> {
    let mut t = Tree::with_root(0);
    let n1 = add_new_node(&mut t, NodeIndex::new(0)).unwrap();
    add_new_node(&mut t, NodeIndex::new(0)).unwrap();
    add_new_node(&mut t, n1).unwrap();
    add_new_node(&mut t, n1).unwrap();
    for (i, node) in t.nodes_mut().enumerate() {
        *node.data_mut() = i as u32;
    }
    t
}
