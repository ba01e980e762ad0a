use super::*;
use crate::ui::core::id::IdPath;

fn node(name: &'static str, rect: Rect, layer: u8, sense: Sense) -> Node {
    Node {
        id: IdPath::root(name).finish(),
        rect,
        layer,
        z: 0,
        sense,
        kind: NodeKind::Unknown,
    }
}

#[test]
fn hit_test_misses_outside_every_node() {
    let mut tree = UiTree::new();
    tree.push(node("a", Rect::new(0, 0, 5, 1), 0, Sense::HOVER));
    assert!(tree.hit_test(Pos::new(9, 9)).is_none());
}

#[test]
fn later_nodes_win_within_a_layer() {
    let mut tree = UiTree::new();
    tree.push(node("under", Rect::new(0, 0, 10, 10), 0, Sense::CLICK));
    tree.push(node("over", Rect::new(2, 2, 4, 4), 0, Sense::CLICK));

    let hit = tree.hit_test(Pos::new(3, 3)).unwrap();
    assert_eq!(hit.id, IdPath::root("over").finish());
}

#[test]
fn higher_layer_beats_insertion_order() {
    let mut tree = UiTree::new();
    tree.push(node("overlay", Rect::new(0, 0, 10, 10), 1, Sense::CLICK));
    tree.push(node("base", Rect::new(0, 0, 10, 10), 0, Sense::CLICK));

    let hit = tree.hit_test(Pos::new(5, 5)).unwrap();
    assert_eq!(hit.id, IdPath::root("overlay").finish());
}

#[test]
fn sense_filter_skips_non_matching_nodes() {
    let mut tree = UiTree::new();
    tree.push(node("hover-only", Rect::new(0, 0, 10, 10), 1, Sense::HOVER));
    tree.push(node("clickable", Rect::new(0, 0, 10, 10), 0, Sense::CLICK));

    let hit = tree.hit_test_with_sense(Pos::new(1, 1), Sense::CLICK).unwrap();
    assert_eq!(hit.id, IdPath::root("clickable").finish());
}

#[test]
fn node_lookup_by_id() {
    let mut tree = UiTree::new();
    tree.push(node("a", Rect::new(0, 0, 1, 1), 0, Sense::NONE));
    tree.push(node("b", Rect::new(1, 0, 1, 1), 0, Sense::NONE));

    let b = tree.node(IdPath::root("b").finish()).unwrap();
    assert_eq!(b.rect, Rect::new(1, 0, 1, 1));
    assert!(tree.node(IdPath::root("missing").finish()).is_none());
}

#[test]
fn clear_empties_the_tree() {
    let mut tree = UiTree::new();
    tree.push(node("a", Rect::new(0, 0, 1, 1), 0, Sense::NONE));
    tree.clear();
    assert!(tree.nodes().is_empty());
}
