use super::*;

#[test]
fn contains_is_exclusive_of_right_and_bottom() {
    let r = Rect::new(2, 3, 4, 5);
    assert!(r.contains(Pos::new(2, 3)));
    assert!(r.contains(Pos::new(5, 7)));
    assert!(!r.contains(Pos::new(6, 3)));
    assert!(!r.contains(Pos::new(2, 8)));
}

#[test]
fn empty_rect_contains_nothing() {
    assert!(!Rect::new(1, 1, 0, 5).contains(Pos::new(1, 1)));
    assert!(!Rect::new(1, 1, 5, 0).contains(Pos::new(1, 1)));
}

#[test]
fn intersect_clips_to_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert_eq!(a.intersect(b), Rect::new(5, 5, 5, 5));

    let disjoint = Rect::new(20, 20, 2, 2);
    assert!(a.intersect(disjoint).is_empty());
}

#[test]
fn inset_shrinks_and_saturates() {
    let r = Rect::new(0, 0, 10, 4);
    assert_eq!(r.inset(Insets::all(1)), Rect::new(1, 1, 8, 2));
    assert!(r.inset(Insets::all(10)).is_empty());
    assert_eq!(r.inset(Insets::xy(2, 0)), Rect::new(2, 0, 6, 4));
}

#[test]
fn split_top_and_bottom_partition_the_rect() {
    let r = Rect::new(0, 0, 10, 10);

    let (top, rest) = r.split_top(3);
    assert_eq!(top, Rect::new(0, 0, 10, 3));
    assert_eq!(rest, Rect::new(0, 3, 10, 7));

    let (rest, bottom) = r.split_bottom(2);
    assert_eq!(rest, Rect::new(0, 0, 10, 8));
    assert_eq!(bottom, Rect::new(0, 8, 10, 2));

    // Oversized splits clamp instead of underflowing.
    let (top, rest) = r.split_top(20);
    assert_eq!(top, r);
    assert!(rest.is_empty());
}

#[test]
fn centered_is_clamped_to_parent() {
    let r = Rect::new(0, 0, 10, 10);
    assert_eq!(r.centered(4, 2), Rect::new(3, 4, 4, 2));
    assert_eq!(r.centered(20, 20), r);
}
