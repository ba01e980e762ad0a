use super::*;

#[test]
fn builder_sets_fields() {
    let s = Style::default()
        .fg(Color::Rgb(1, 2, 3))
        .bg(Color::Indexed(7))
        .add_mod(Mod::BOLD);
    assert_eq!(s.fg, Some(Color::Rgb(1, 2, 3)));
    assert_eq!(s.bg, Some(Color::Indexed(7)));
    assert!(s.mods.contains(Mod::BOLD));
}

#[test]
fn patch_overrides_colors_and_unions_mods() {
    let base = Style::default().fg(Color::Rgb(0, 0, 0)).add_mod(Mod::DIM);
    let patch = Style::default().fg(Color::Rgb(9, 9, 9)).add_mod(Mod::BOLD);

    let merged = base.patch(patch);
    assert_eq!(merged.fg, Some(Color::Rgb(9, 9, 9)));
    assert!(merged.mods.contains(Mod::DIM | Mod::BOLD));
}

#[test]
fn patch_keeps_unset_fields() {
    let base = Style::default().bg(Color::Indexed(1));
    let merged = base.patch(Style::default().add_mod(Mod::REVERSE));
    assert_eq!(merged.bg, Some(Color::Indexed(1)));
    assert!(merged.fg.is_none());
}

#[test]
fn mod_bits() {
    assert!(Mod::NONE.is_empty());
    let m = Mod::UNDERLINE | Mod::ITALIC;
    assert!(m.contains(Mod::UNDERLINE));
    assert!(!m.contains(Mod::REVERSE));
}
