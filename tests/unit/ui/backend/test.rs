use super::*;
use crate::ui::core::style::{Color, Mod};

fn styled(fg: Color) -> Style {
    Style::default().fg(fg)
}

#[test]
fn text_lands_at_its_position() {
    let mut backend = TestBackend::new(10, 3);
    backend.draw(
        Rect::new(0, 0, 10, 3),
        &[PaintCmd::Text {
            pos: Pos::new(2, 1),
            text: "hi".to_string(),
            style: styled(Color::Indexed(3)),
            clip: None,
        }],
    );

    assert_eq!(backend.buffer().row_string(1), "  hi");
    let cell = backend.buffer().cell(2, 1).unwrap();
    assert_eq!(cell.symbol, "h");
    assert_eq!(cell.style.fg, Some(Color::Indexed(3)));
}

#[test]
fn clipped_text_stops_at_the_clip_edge() {
    let mut backend = TestBackend::new(10, 1);
    backend.draw(
        Rect::new(0, 0, 10, 1),
        &[PaintCmd::Text {
            pos: Pos::new(0, 0),
            text: "abcdef".to_string(),
            style: Style::default(),
            clip: Some(Rect::new(0, 0, 3, 1)),
        }],
    );
    assert_eq!(backend.buffer().row_string(0), "abc");
}

#[test]
fn wide_glyphs_are_never_split() {
    let mut backend = TestBackend::new(3, 1);
    backend.draw(
        Rect::new(0, 0, 3, 1),
        &[PaintCmd::Text {
            pos: Pos::new(0, 0),
            text: "a你b".to_string(),
            style: Style::default(),
            clip: None,
        }],
    );
    // 'a' at 0, wide glyph at 1..3; 'b' does not fit.
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, "a");
    assert_eq!(backend.buffer().cell(1, 0).unwrap().symbol, "你");
    assert_eq!(backend.buffer().cell(2, 0).unwrap().symbol, " ");
}

#[test]
fn fill_rect_paints_the_style() {
    let mut backend = TestBackend::new(4, 2);
    let style = Style::default().bg(Color::Rgb(1, 2, 3));
    backend.draw(
        Rect::new(0, 0, 4, 2),
        &[PaintCmd::FillRect {
            rect: Rect::new(1, 0, 2, 2),
            style,
        }],
    );
    assert_eq!(backend.buffer().cell(1, 1).unwrap().style, style);
    assert_eq!(backend.buffer().cell(0, 0).unwrap().style, Style::default());
}

#[test]
fn hline_repeats_the_character() {
    let mut backend = TestBackend::new(6, 1);
    backend.draw(
        Rect::new(0, 0, 6, 1),
        &[PaintCmd::HLine {
            pos: Pos::new(1, 0),
            len: 3,
            ch: '━',
            style: Style::default().add_mod(Mod::BOLD),
        }],
    );
    assert_eq!(backend.buffer().row_string(0), " ━━━");
}

#[test]
fn border_draws_corners_and_edges() {
    let mut backend = TestBackend::new(4, 3);
    backend.draw(
        Rect::new(0, 0, 4, 3),
        &[PaintCmd::Border {
            rect: Rect::new(0, 0, 4, 3),
            style: Style::default(),
            kind: BorderKind::Plain,
        }],
    );
    assert_eq!(backend.buffer().row_string(0), "┌──┐");
    assert_eq!(backend.buffer().row_string(1), "│  │");
    assert_eq!(backend.buffer().row_string(2), "└──┘");
}

#[test]
fn drawing_outside_the_buffer_is_ignored() {
    let mut backend = TestBackend::new(2, 2);
    backend.draw(
        Rect::new(0, 0, 2, 2),
        &[PaintCmd::Text {
            pos: Pos::new(10, 10),
            text: "off".to_string(),
            style: Style::default(),
            clip: None,
        }],
    );
    assert_eq!(backend.buffer().row_string(0), "");
    assert_eq!(backend.buffer().row_string(1), "");
}

#[test]
fn cursor_is_tracked() {
    let mut backend = TestBackend::new(2, 2);
    assert_eq!(backend.cursor(), None);
    backend.set_cursor(Some(Pos::new(1, 1)));
    assert_eq!(backend.cursor(), Some(Pos::new(1, 1)));
}
