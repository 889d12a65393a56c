#![allow(dead_code)]
use phylo_tree::prelude::*;

pub type Named = Tree<String, f64>;

/// Builds `((B,(D,E)C)A,F,(H,I)G)R`, children in the listed order, every
/// branch of length 1.0.
pub fn reference_tree() -> Named {
    let mut t = Tree::with_root("R".to_string());
    let r = NodeIndex::new(0);
    let a = child(&mut t, r, "A");
    child(&mut t, a, "B");
    let c = child(&mut t, a, "C");
    child(&mut t, c, "D");
    child(&mut t, c, "E");
    child(&mut t, r, "F");
    let g = child(&mut t, r, "G");
    child(&mut t, g, "H");
    child(&mut t, g, "I");
    t
}

/// Builds the chain `R -> A -> B -> C`.
pub fn caterpillar() -> Named {
    let mut t = Tree::with_root("R".to_string());
    let mut last = NodeIndex::new(0);
    for name in ["A", "B", "C"] {
        last = child(&mut t, last, name);
    }
    t
}

/// Attaches a named leaf with branch length 1.0.
pub fn child(t: &mut Named, parent: NodeIndex, name: &str) -> NodeIndex {
    let n = add_new_node(t, parent).expect("parent in tree");
    *t.node_at_mut(n).unwrap().data_mut() = name.to_string();
    let edge = t.node_at(n).unwrap().primary_link().unwrap();
    let edge = t.link_at(edge).unwrap().edge();
    *t.edge_at_mut(edge).unwrap().data_mut() = 1.0;
    n
}

pub fn node(t: &Named, name: &str) -> NodeIndex {
    t.nodes()
        .find(|n| n.data() == name)
        .unwrap_or_else(|| panic!("no node named {name}"))
        .index()
}

pub fn name(t: &Named, node: NodeIndex) -> &str {
    t.node_at(node).unwrap().data()
}

/// Node names in visiting order.
pub fn names<'a>(visits: impl Iterator<Item = Visit<'a, String, f64>>) -> String {
    visits.map(|v| v.node().data().as_str()).collect()
}

/// Names of the children of `node`, in rotation order.
pub fn children(t: &Named, node: NodeIndex) -> Vec<String> {
    node_links(t, node)
        .unwrap()
        .filter(|v| !v.is_first_iteration() || t.root_node_index() == Some(node))
        .map(|v| {
            let outer = v.link().unwrap().outer();
            t.node_at(t.link_at(outer).unwrap().node())
                .unwrap()
                .data()
                .clone()
        })
        .collect()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Clone + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort();
    let mut b = want.to_vec();
    b.sort();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
