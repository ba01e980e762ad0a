//! Rendering backends.
//!
//! The trait isolates the rest of the codebase from `ratatui` types; the
//! headless test backend renders the same paint commands into an inspectable
//! cell buffer.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

// The concrete terminal backend lives in `ratatui.rs`, but the module name stays generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
