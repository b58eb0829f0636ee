use error_tree::search::{Matcher, Mode};
use error_tree::{locate, locate_simple, Located, MatchPath, Node, StrategyKind};

use crate::common::{some, Answer, Joined, Leaf, Matching, Unrelated, ValueError, Wrapped};

#[test]
fn reports_position_and_path() {
    let root = Joined::new(
        "root",
        vec![
            some(Leaf("a")),
            some(Wrapped::new("b", Box::new(ValueError(1)))),
            some(Matching::new(2, Answer::Boxed)),
        ],
    );

    assert_eq!(
        locate::<ValueError>(&root),
        Some(Located { value: ValueError(1), position: 3, path: MatchPath::Reconciled })
    );
    assert_eq!(
        locate::<Box<ValueError>>(&root),
        Some(Located { value: Box::new(ValueError(1)), position: 3, path: MatchPath::Direct })
    );
}

#[test]
fn reports_self_match_paths() {
    let value = Matching::new(4, Answer::Value);
    let boxed = Matching::new(4, Answer::Boxed);

    assert_eq!(locate::<ValueError>(&value).map(|l| l.path), Some(MatchPath::SelfMatch));
    assert_eq!(locate::<ValueError>(&boxed).map(|l| l.path), Some(MatchPath::AdaptedSelfMatch));
    assert_eq!(
        locate::<Box<ValueError>>(&value).map(|l| l.path),
        Some(MatchPath::AdaptedSelfMatch)
    );
    assert_eq!(locate::<Box<ValueError>>(&boxed).map(|l| l.path), Some(MatchPath::SelfMatch));
}

#[test]
fn simple_locate_never_reconciles() {
    let err = Wrapped::new("outer", Box::new(ValueError(1)));

    assert!(locate_simple::<ValueError>(&err).is_none());
    assert_eq!(locate_simple::<Box<ValueError>>(&err).map(|l| l.position), Some(1));
}

#[test]
fn matcher_classifies_lazily() {
    let mut matcher = Matcher::<ValueError>::full();
    assert_eq!(matcher.mode(), Mode::Full);
    assert!(matcher.strategy().is_none());

    let exact = ValueError(1);
    assert!(matcher.match_node(Node::from(&exact)).is_some());
    assert!(matcher.strategy().is_none());

    let other = Leaf("other");
    assert!(matcher.match_node(Node::from(&other)).is_none());
    assert_eq!(matcher.strategy().map(|s| s.kind()), Some(StrategyKind::ValuePrimary));
}

#[test]
fn simple_matcher_never_classifies() {
    let mut matcher = Matcher::<Unrelated>::simple();
    let other = Leaf("other");

    assert_eq!(matcher.mode(), Mode::Simple);
    assert!(matcher.match_node(Node::from(&other)).is_none());
    assert!(matcher.strategy().is_none());
}

#[cfg(feature = "serde")]
#[test]
fn match_path_serializes_as_variant_name() {
    let json = serde_json::to_string(&MatchPath::AdaptedSelfMatch).unwrap();
    assert_eq!(json, "\"AdaptedSelfMatch\"");
}
