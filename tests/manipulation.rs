mod util;
use std::sync::{Arc, Mutex};

use phylo_tree::prelude::*;
use util::*;

fn edge_above(t: &Named, n: NodeIndex) -> EdgeIndex {
    let up = t.node_at(n).unwrap().primary_link().unwrap();
    t.link_at(up).unwrap().edge()
}

#[test]
fn caterpillar_linear_deletion_merges_lengths() {
    let mut t = caterpillar();
    *t.edge_at_mut(edge_above(&t, node(&t, "C"))).unwrap().data_mut() = 2.5;

    let b = node(&t, "B");
    let mut calls = 0;
    delete_linear_node_with(&mut t, b, |remaining, deleted| {
        calls += 1;
        *remaining.data_mut() += *deleted.data();
    })
    .unwrap();

    assert_eq!(calls, 1);
    assert_eq!((t.node_count(), t.edge_count()), (3, 2));
    assert!(is_valid(&t));
    assert_eq!(names(preorder(&t)), "RAC");
    let c = node(&t, "C");
    assert_eq!(*t.edge_at(edge_above(&t, c)).unwrap().data(), 3.5);
    let up = t.link_at(t.node_at(c).unwrap().primary_link().unwrap()).unwrap();
    assert_eq!(name(&t, t.link_at(up.outer()).unwrap().node()), "A");
}

#[test]
fn leaf_on_inner_node_clones_edge_payload() {
    let mut t = reference_tree();
    let a = node(&t, "A");
    *t.edge_at_mut(edge_above(&t, a)).unwrap().data_mut() = 0.75;

    let leaf = add_new_node(&mut t, a).unwrap();
    assert!(is_valid(&t));
    assert_eq!(degree(&t, leaf).unwrap(), 1);
    assert_eq!(degree(&t, a).unwrap(), 4);
    assert_eq!(children(&t, a), vec!["B", "C", "A"]);
    assert_eq!(*t.edge_at(edge_above(&t, leaf)).unwrap().data(), 0.75);
    assert_eq!(name(&t, leaf), "A");

    // the copy is independent of its source
    *t.edge_at_mut(edge_above(&t, leaf)).unwrap().data_mut() = 9.0;
    assert_eq!(*t.edge_at(edge_above(&t, a)).unwrap().data(), 0.75);
}

#[test]
fn splitting_an_edge_calls_adjust_once() {
    let mut t = reference_tree();
    let (a, b) = (node(&t, "A"), node(&t, "B"));
    let target = edge_above(&t, b);
    *t.edge_at_mut(target).unwrap().data_mut() = 4.0;

    let mut seen = Vec::new();
    let m = add_new_node_on_edge_with(&mut t, target, |original, new| {
        seen.push((original.index(), new.index()));
        let half = *original.data() / 2.0;
        *original.data_mut() = half;
        *new.data_mut() = half;
    })
    .unwrap();

    assert!(is_valid(&t));
    assert_eq!(seen.len(), 1);
    let (original, new) = seen[0];
    assert_eq!(original, target);
    assert_eq!(degree(&t, m).unwrap(), 2);
    assert_eq!(name(&t, m), "A");

    let e_am = t.edge_at(original).unwrap();
    let e_mb = t.edge_at(new).unwrap();
    assert_eq!(t.link_at(e_am.primary_link()).unwrap().node(), a);
    assert_eq!(t.link_at(e_am.secondary_link()).unwrap().node(), m);
    assert_eq!(t.link_at(e_mb.primary_link()).unwrap().node(), m);
    assert_eq!(t.link_at(e_mb.secondary_link()).unwrap().node(), b);
    assert_eq!((*e_am.data(), *e_mb.data()), (2.0, 2.0));
    assert_eq!(children(&t, a), vec!["A", "C"]);
}

#[test]
fn leaf_on_edge_and_root_on_edge() {
    let mut t = reference_tree();
    let f = node(&t, "F");
    let target = edge_above(&t, f);
    let leaf = add_new_leaf_node(&mut t, target).unwrap();
    assert!(is_valid(&t));
    assert_eq!((t.node_count(), t.edge_count()), (12, 11));
    assert_eq!(degree(&t, leaf).unwrap(), 1);

    let h = node(&t, "H");
    let target = edge_above(&t, h);
    let root = add_root_node(&mut t, target).unwrap();
    assert!(is_valid(&t));
    assert!(is_root(&t, root));
    assert_eq!(degree(&t, root).unwrap(), 2);
    assert_eq!(t.node_count(), 13);
}

#[test]
fn delete_subtree_counts() {
    let mut t = reference_tree();
    let c = node(&t, "C");
    let sub = Subtree::of_node(&t, c).unwrap();
    delete_subtree(&mut t, sub).unwrap();
    assert!(is_valid(&t));
    assert_eq!((t.node_count(), t.edge_count(), t.link_count()), (7, 6, 12));
    assert_eq!(names(preorder(&t)), "RABFGHI");
}

#[test]
fn delete_node_dispatches_on_degree() {
    let mut t = reference_tree();

    let d = node(&t, "D");
    delete_node(&mut t, d).unwrap();
    assert_eq!(names(preorder(&t)), "RABCEFGHI");

    let c = node(&t, "C");
    delete_node(&mut t, c).unwrap();
    assert_eq!(names(preorder(&t)), "RABEFGHI");
    assert_eq!(children(&t, node(&t, "A")), vec!["B", "E"]);

    let r = node(&t, "R");
    delete_node(&mut t, r).unwrap();
    assert!(is_valid(&t));
    assert_eq!(names(preorder(&t)), "ABE");
    assert!(is_root(&t, node(&t, "A")));
}

#[test]
fn deleting_the_root_leaf_roots_at_its_neighbour() {
    let mut t = caterpillar();
    let r = node(&t, "R");
    delete_leaf_node(&mut t, r).unwrap();
    assert!(is_valid(&t));
    assert_eq!(names(preorder(&t)), "ABC");
    assert!(is_root(&t, node(&t, "A")));
}

#[test]
fn deleting_a_linear_root() {
    let mut t = caterpillar();
    let a = node(&t, "A");
    reroot_at_node(&mut t, a).unwrap();
    delete_linear_node(&mut t, a).unwrap();
    assert!(is_valid(&t));
    assert_eq!(t.node_count(), 3);
    assert!(is_root(&t, node(&t, "R")));
    assert_eq!(names(preorder(&t)), "RBC");
}

#[test]
fn contracting_an_inner_edge() {
    let mut t = reference_tree();
    let c = node(&t, "C");
    let mut merged = Vec::new();
    let target = edge_above(&t, c);
    delete_edge_with(&mut t, target, |rem, del| {
        merged.push(format!("{}<{}", rem.data(), del.data()));
    })
    .unwrap();
    assert_eq!(merged, vec!["A<C"]);
    assert!(is_valid(&t));
    assert_eq!(children(&t, node(&t, "A")), vec!["B", "D", "E"]);
    assert_eq!(names(preorder(&t)), "RABDEFGHI");
}

#[test]
fn contracting_a_leaf_edge() {
    let mut t = reference_tree();
    let target = edge_above(&t, node(&t, "F"));
    delete_edge(&mut t, target).unwrap();
    assert!(is_valid(&t));
    assert_eq!(names(preorder(&t)), "RABCDEGHI");
}

#[test]
fn preconditions_reject_foreign_arguments() {
    let mut t = reference_tree();
    let before = t.clone();
    let far = NodeIndex::new(100);
    for err in [
        add_new_node(&mut t, far).unwrap_err(),
        add_new_node_on_edge(&mut t, EdgeIndex::new(100)).unwrap_err(),
        delete_edge(&mut t, EdgeIndex::new(100)).unwrap_err(),
        delete_node(&mut t, far).unwrap_err(),
        reroot(&mut t, LinkIndex::new(100)).unwrap_err(),
    ] {
        assert!(err.is_precondition(), "{err}");
        assert!(matches!(err, TreeError::NotInTree { index: 100, .. }));
    }
    assert!(identical_topology(&t, &before));
    assert_eq!(t.node_count(), before.node_count());
}

#[test]
fn observer_sees_each_edit() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let mut t = caterpillar();
    t.set_observer(Arc::new(move |e: &TreeEvent| {
        sink.lock().unwrap().push(e.clone());
    }));

    let c = node(&t, "C");
    add_new_node(&mut t, c).unwrap();
    let b = node(&t, "B");
    delete_linear_node(&mut t, b).unwrap();
    ladderize(&mut t, LadderizeOrder::SmallFirst);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], TreeEvent::NodeAdded { parent, .. } if parent == c));
    assert_eq!(events[1], TreeEvent::NodeDeleted { degree: 2 });
    assert_eq!(events[2], TreeEvent::Ladderized { reordered_nodes: 0 });
}
