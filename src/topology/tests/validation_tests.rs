use super::small_tree;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::tree::{Tree, TreeContent};
use crate::topology::validation::{is_valid, validate_topology};
use crate::tree_error::{EntityKind, InvariantViolation};

fn corrupted(f: impl FnOnce(&mut TreeContent<u32, u32>)) -> Tree<u32, u32> {
    let mut content = small_tree().export_content();
    f(&mut content);
    Tree::from_content(content)
}

#[test]
fn built_trees_validate() {
    assert_eq!(validate_topology(&small_tree()), Ok(()));
    assert!(is_valid(&Tree::<u32, u32>::new()));
    assert!(is_valid(&Tree::<u32, u32>::with_root(1)));
}

#[test]
fn missing_node_breaks_counts() {
    let t = corrupted(|c| {
        c.nodes.pop();
    });
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::CountMismatch {
            links: 8,
            nodes: 4,
            edges: 4
        })
    );
}

#[test]
fn stored_index_must_match_position() {
    let t = corrupted(|c| c.nodes[2].reset_index(NodeIndex::new(3)));
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::IndexMismatch {
            kind: EntityKind::Node,
            position: 2,
            stored: 3
        })
    );
}

#[test]
fn dangling_next_is_reported_not_followed() {
    let t = corrupted(|c| c.links[4].reset_next(LinkIndex::new(99)));
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::DanglingReference {
            owner: EntityKind::Link,
            owner_index: 4,
            kind: EntityKind::Link,
            index: 99
        })
    );
}

#[test]
fn outer_must_be_symmetric() {
    let t = corrupted(|c| c.links[3].reset_outer(LinkIndex::new(3)));
    assert!(matches!(
        validate_topology(&t),
        Err(InvariantViolation::OuterNotSymmetric { .. })
    ));
}

#[test]
fn ring_skipping_a_link_is_caught() {
    // node 1 ring is 1 -> 4 -> 6 -> 1; drop 4 from it
    let t = corrupted(|c| c.links[1].reset_next(LinkIndex::new(6)));
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::RingCoverage {
            link: LinkIndex::new(4)
        })
    );
}

#[test]
fn ring_leaving_its_node_is_caught() {
    let t = corrupted(|c| c.links[4].reset_next(LinkIndex::new(2)));
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::RingNotClosed {
            node: NodeIndex::new(1),
            link: LinkIndex::new(2)
        })
    );
}

#[test]
fn root_link_must_exist_and_lead_the_root_ring() {
    let t = corrupted(|c| c.root_link = None);
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::Root("missing root link"))
    );

    let t = corrupted(|c| c.root_link = Some(LinkIndex::new(2)));
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::Root(
            "root link is not the root node's primary link"
        ))
    );
}

#[test]
fn flipped_edge_is_caught() {
    let t = corrupted(|c| c.edges[0].swap_links());
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::EdgeDirection {
            edge: EdgeIndex::new(0)
        })
    );
}

#[test]
fn primary_link_must_face_the_root() {
    let t = corrupted(|c| c.nodes[1].reset_primary_link(Some(LinkIndex::new(6))));
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::PrimaryLinkDirection {
            node: NodeIndex::new(1)
        })
    );
}

#[test]
fn lone_node_must_not_claim_links() {
    let mut content = Tree::<u32, u32>::with_root(0).export_content();
    content.nodes[0].reset_primary_link(Some(LinkIndex::new(0)));
    let t = Tree::from_content(content);
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::DanglingReference {
            owner: EntityKind::Node,
            owner_index: 0,
            kind: EntityKind::Link,
            index: 0
        })
    );
}

#[test]
fn first_violation_follows_check_order() {
    // index mismatch is reported ahead of the broken counts
    let t = corrupted(|c| {
        c.nodes[2].reset_index(NodeIndex::new(3));
        c.nodes.pop();
    });
    assert!(matches!(
        validate_topology(&t),
        Err(InvariantViolation::IndexMismatch {
            kind: EntityKind::Node,
            position: 2,
            ..
        })
    ));

    // a flipped edge is reported ahead of a misplaced root link
    let t = corrupted(|c| {
        c.root_link = Some(LinkIndex::new(2));
        c.edges[3].swap_links();
    });
    assert_eq!(
        validate_topology(&t),
        Err(InvariantViolation::EdgeDirection {
            edge: EdgeIndex::new(3)
        })
    );
}
