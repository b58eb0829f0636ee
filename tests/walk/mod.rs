use error_tree::{depth_first, Node};

use crate::common::{
    some, walk_messages, Both, Joined, Leaf, LinkedJoined, SourceOnly, UnwrapError, Wrapped,
};

#[test]
fn visits_children_before_later_siblings() {
    //       root (multi)
    //       /        \
    //  child1      child2
    //    |
    //  grand1
    let root = Joined::new(
        "root",
        vec![some(Wrapped::new("child 1", Leaf("grandchild 1"))), some(Leaf("child 2"))],
    );

    assert_eq!(walk_messages(&root), ["root", "child 1", "grandchild 1", "child 2"]);
}

#[test]
fn absent_root_yields_nothing() {
    assert!(walk_messages(None::<&Leaf>).is_empty());
    assert!(walk_messages(None::<Node<'_>>).is_empty());
}

#[test]
fn absent_entries_are_skipped_in_order() {
    let root = Joined::new("root with nil", vec![some(Leaf("err1")), None, some(Leaf("err2"))]);

    assert_eq!(walk_messages(&root), ["root with nil", "err1", "err2"]);
}

#[test]
fn absent_entries_at_any_index_are_skipped() {
    let err = UnwrapError::new(8);

    assert_eq!(walk_messages(&err), ["UnwrapError8", "PointerError8", "ValueError8"]);
}

#[test]
fn node_without_causes_is_a_leaf() {
    assert_eq!(walk_messages(&Wrapped::empty("alone")), ["alone"]);
    assert_eq!(walk_messages(&Joined::new("empty", vec![None, None])), ["empty"]);
}

#[test]
fn single_cause_chain_is_followed() {
    let err = Wrapped::new("a", Wrapped::new("b", Wrapped::new("c", Leaf("d"))));

    assert_eq!(walk_messages(&err), ["a", "b", "c", "d"]);
}

#[test]
fn multi_cause_takes_precedence_over_single_cause() {
    let err = Both {
        single: Leaf("single"),
        multi: Joined::new("multi", vec![some(Leaf("first")), some(Leaf("second"))]),
    };

    assert_eq!(walk_messages(&err), ["both", "first", "second"]);
}

#[test]
fn nested_multi_causes_keep_pre_order() {
    let root = Joined::new(
        "root",
        vec![
            some(Joined::new("left", vec![some(Leaf("l1")), None, some(Leaf("l2"))])),
            None,
            some(Joined::new("right", vec![some(Wrapped::new("r1", Leaf("r1a")))])),
        ],
    );

    assert_eq!(walk_messages(&root), ["root", "left", "l1", "l2", "right", "r1", "r1a"]);
}

#[test]
fn causes_are_not_queried_until_the_walk_continues() {
    let root = Joined::new("root", vec![some(Leaf("a")), some(Leaf("b"))]);

    let mut walk = depth_first(&root);
    let first = walk.next().map(|node| node.to_string());

    assert_eq!(first.as_deref(), Some("root"));
    assert_eq!(root.lookups.get(), 0);

    assert_eq!(walk.next().map(|node| node.to_string()).as_deref(), Some("a"));
    assert_eq!(root.lookups.get(), 2);
}

#[test]
fn walk_is_fused() {
    let leaf = Leaf("only");
    let mut walk = depth_first(&leaf);

    assert!(walk.next().is_some());
    assert!(walk.next().is_none());
    assert!(walk.next().is_none());
}

#[test]
fn yielded_nodes_point_at_the_tree_errors() {
    let root = Wrapped::new("outer", Leaf("inner"));
    let nodes: Vec<Node<'_>> = depth_first(&root).collect();

    assert!(Node::ptr_eq(&nodes[0], &Node::from(&root)));
    let inner = root.cause.as_deref().map(Node::tree);
    assert!(inner.is_some_and(|inner| Node::ptr_eq(&nodes[1], &inner)));
}

#[test]
fn each_call_starts_a_fresh_walk() {
    let root = Wrapped::new("outer", Leaf("inner"));

    assert_eq!(depth_first(&root).count(), 2);
    assert_eq!(depth_first(&root).count(), 2);
}

#[test]
fn causes_linked_through_source_are_plain() {
    let err = SourceOnly(Joined::new("multi", vec![some(Leaf("a")), some(Leaf("b"))]));

    assert_eq!(walk_messages(&err), ["source only", "multi"]);
    assert_eq!(err.0.lookups.get(), 0);
}

#[test]
fn linked_causes_keep_their_multi_cause_view() {
    let err = LinkedJoined(Joined::new("multi", vec![some(Leaf("a")), some(Leaf("b"))]));

    assert_eq!(walk_messages(&err), ["linked", "multi", "a", "b"]);
}
