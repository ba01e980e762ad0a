use super::*;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use crate::ui::core::id::IdPath;
use crate::ui::core::tree::{Node, NodeKind};
use crate::ui::core::geom::Rect;

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn tree_with_button(name: &'static str, rect: Rect) -> UiTree {
    let mut tree = UiTree::new();
    tree.push(Node {
        id: IdPath::root(name).finish(),
        rect,
        layer: 0,
        z: 0,
        sense: Sense::HOVER | Sense::CLICK,
        kind: NodeKind::Unknown,
    });
    tree
}

#[test]
fn key_input_produces_no_ui_events() {
    let mut rt = UiRuntime::new();
    let tree = UiTree::new();
    let out = rt.on_input(
        &InputEvent::Key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
        }),
        &tree,
    );
    assert!(out.events.is_empty());
    assert!(!out.needs_redraw);
}

#[test]
fn moving_onto_a_node_reports_hover_change() {
    let mut rt = UiRuntime::new();
    let tree = tree_with_button("btn", Rect::new(2, 2, 4, 1));
    let id = IdPath::root("btn").finish();

    let out = rt.on_input(&mouse(MouseEventKind::Moved, 3, 2), &tree);
    assert_eq!(out.events.len(), 1);
    assert!(matches!(
        out.events[0],
        UiEvent::HoverChanged { from: None, to: Some(to), .. } if to == id
    ));
    assert_eq!(rt.hovered(), Some(id));

    // Staying on the same node is quiet.
    let out = rt.on_input(&mouse(MouseEventKind::Moved, 4, 2), &tree);
    assert!(out.events.is_empty());

    // Leaving reports the transition back to nothing.
    let out = rt.on_input(&mouse(MouseEventKind::Moved, 0, 0), &tree);
    assert!(matches!(
        out.events[0],
        UiEvent::HoverChanged { from: Some(from), to: None, .. } if from == id
    ));
    assert_eq!(rt.hovered(), None);
}

#[test]
fn click_fires_on_release_of_the_pressed_button() {
    let mut rt = UiRuntime::new();
    let tree = tree_with_button("btn", Rect::new(0, 0, 5, 1));
    let id = IdPath::root("btn").finish();

    rt.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 0), &tree);
    assert!(rt.is_pressed());

    let out = rt.on_input(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 0), &tree);
    let click = out
        .events
        .iter()
        .find(|e| matches!(e, UiEvent::Click { .. }))
        .unwrap();
    assert!(matches!(
        click,
        UiEvent::Click { id: cid, button: MouseButton::Left, .. } if *cid == id
    ));
    assert!(!rt.is_pressed());
}

#[test]
fn release_of_a_different_button_does_not_click() {
    let mut rt = UiRuntime::new();
    let tree = tree_with_button("btn", Rect::new(0, 0, 5, 1));

    rt.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 0), &tree);
    let out = rt.on_input(&mouse(MouseEventKind::Up(MouseButton::Right), 1, 0), &tree);
    assert!(!out.events.iter().any(|e| matches!(e, UiEvent::Click { .. })));
}

#[test]
fn press_on_empty_space_never_clicks() {
    let mut rt = UiRuntime::new();
    let tree = tree_with_button("btn", Rect::new(0, 0, 2, 1));

    rt.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 8, 8), &tree);
    let out = rt.on_input(&mouse(MouseEventKind::Up(MouseButton::Left), 8, 8), &tree);
    assert!(!out.events.iter().any(|e| matches!(e, UiEvent::Click { .. })));
}

#[test]
fn click_survives_small_pointer_drift() {
    let mut rt = UiRuntime::new();
    let tree = tree_with_button("btn", Rect::new(0, 0, 5, 1));
    let id = IdPath::root("btn").finish();

    rt.on_input(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 0), &tree);
    rt.on_input(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 0), &tree);
    let out = rt.on_input(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 0), &tree);
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, UiEvent::Click { id: cid, .. } if *cid == id)));
}
