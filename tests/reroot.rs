mod util;
use phylo_tree::prelude::*;
use util::*;

fn orientation(t: &Named) -> Vec<(LinkIndex, LinkIndex)> {
    t.edges()
        .map(|e| (e.primary_link(), e.secondary_link()))
        .collect()
}

#[test]
fn reroot_at_current_root_is_noop() {
    let mut t = reference_tree();
    let before = t.clone();
    let root = t.root_link_index().unwrap();
    reroot(&mut t, root).unwrap();
    assert!(equal(&t, &before, |a, b| a.data() == b.data(), |a, b| a.data() == b.data()));
    assert_eq!(t.export_content(), before.clone().export_content());
}

#[test]
fn reroot_and_back_restores_orientation() {
    let original = reference_tree();
    let root_link = original.root_link_index().unwrap();
    for target in ["A", "D", "I", "F"] {
        let mut t = original.clone();
        let at = node(&t, target);
        reroot_at_node(&mut t, at).unwrap();
        assert!(is_valid(&t));
        assert!(is_root(&t, node(&t, target)));

        reroot(&mut t, root_link).unwrap();
        assert!(is_valid(&t));
        assert_eq!(orientation(&t), orientation(&original), "via {target}");
    }
}

#[test]
fn rerooted_traversal_starts_at_parent_side() {
    let mut t = reference_tree();
    let c = node(&t, "C").get();
    reroot_at_node_index(&mut t, c).unwrap();
    assert_eq!(names(preorder(&t)), "CARFGHIBDE");
    assert_eq!(names(postorder(&t)), "FHIGRBADEC");

    let depths = node_depths(&t);
    assert_eq!(depths[node(&t, "R").get()], 2);
    assert_eq!(depths[node(&t, "H").get()], 4);
}

#[test]
fn reroot_at_a_leaf_link() {
    let mut t = reference_tree();
    let d = node(&t, "D");
    let link = t.node_at(d).unwrap().primary_link().unwrap();
    reroot(&mut t, link).unwrap();
    assert!(is_valid(&t));
    assert_eq!(degree(&t, t.root_node_index().unwrap()).unwrap(), 1);
    assert_eq!(names(preorder(&t)), "DCEARFGHIB");
}

#[test]
fn reroot_rejects_unknown_targets() {
    let mut t = reference_tree();
    assert!(matches!(
        reroot_at_node_index(&mut t, 42),
        Err(TreeError::NotInTree {
            kind: EntityKind::Node,
            index: 42
        })
    ));
    let mut empty: Named = Tree::new();
    assert!(reroot_at_node_index(&mut empty, 0).is_err());
}
