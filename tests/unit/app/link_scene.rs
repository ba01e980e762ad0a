use super::*;

fn scene() -> LinkScene {
    LinkScene::new(Theme::dark())
}

#[test]
fn the_demo_flow_covers_every_authoring_method() {
    let s = scene();
    assert_eq!(s.flow().compiler_count(), 6);

    let action = |i: usize| s.flow().compiler(i).unwrap().details().action;
    assert_eq!(action(0), LinkAction::OpenUserProfile);
    assert_eq!(action(1), LinkAction::OpenChannel);
    assert_eq!(action(2), LinkAction::External);
    assert_eq!(action(3), LinkAction::Custom);
    assert_eq!(action(4), LinkAction::OpenWiki);
    assert_eq!(action(5), LinkAction::External);
}

#[test]
fn the_status_line_starts_empty() {
    assert_eq!(scene().status(), "");
}

#[test]
fn activating_a_semantic_link_records_it() {
    let mut s = scene();
    s.activate(0);

    let last = s.dispatcher().last().unwrap();
    assert_eq!(last.action, LinkAction::OpenUserProfile);
    assert_eq!(last.argument, "2");
    assert_eq!(s.status(), "OpenUserProfile(2)");
}

#[test]
fn the_custom_link_bypasses_the_dispatcher() {
    let mut s = scene();
    s.activate(3);
    s.activate(3);

    assert_eq!(s.custom_clicks(), 2);
    assert!(s.dispatcher().last().is_none());
    assert_eq!(s.status(), "custom clicks: 2");
}

#[test]
fn hovering_surfaces_the_tooltip() {
    let mut s = scene();
    s.set_hovered(Some(1));
    assert_eq!(s.status(), "join channel");
    assert_eq!(s.flow().hovered(), Some(1));

    // The bare URL link has no tooltip to show.
    s.set_hovered(Some(2));
    assert_eq!(s.status(), "");

    s.set_hovered(None);
    assert_eq!(s.flow().hovered(), None);
}

#[test]
fn status_parts_are_joined_in_order() {
    let mut s = scene();
    s.activate(1);
    s.activate(3);
    s.set_hovered(Some(0));
    assert_eq!(
        s.status(),
        "view profile  |  OpenChannel(#lazer)  |  custom clicks: 1"
    );
}
