//! Crate-owned input event types.
//!
//! The UI core is headless; terminal input arrives as `crossterm` events and
//! is converted at the edge (feature `tui`) so nothing below the backend
//! adapter mentions crossterm.

use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
    pub modifiers: KeyModifiers,
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

impl InputEvent {
    pub fn is_key(&self) -> bool {
        matches!(self, InputEvent::Key(_))
    }

    pub fn is_mouse(&self) -> bool {
        matches!(self, InputEvent::Mouse(_))
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            InputEvent::Key(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            InputEvent::Mouse(e) => Some(e),
            _ => None,
        }
    }
}

/// Normalized key (uppercase chars folded to char + SHIFT) for binding lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let mut code = event.code;
        let mut modifiers = event.modifiers;

        if let KeyCode::Char(ch) = code {
            if ch.is_ascii_uppercase() {
                code = KeyCode::Char(ch.to_ascii_lowercase());
                modifiers |= KeyModifiers::SHIFT;
            }
        }

        Self::new(code, modifiers)
    }
}

#[cfg(feature = "tui")]
mod convert {
    use super::*;

    fn key_code(code: crossterm::event::KeyCode) -> KeyCode {
        use crossterm::event::KeyCode as C;
        match code {
            C::Char(ch) => KeyCode::Char(ch),
            C::Enter => KeyCode::Enter,
            C::Esc => KeyCode::Esc,
            C::Tab => KeyCode::Tab,
            C::Backspace => KeyCode::Backspace,
            C::Left => KeyCode::Left,
            C::Right => KeyCode::Right,
            C::Up => KeyCode::Up,
            C::Down => KeyCode::Down,
            C::Home => KeyCode::Home,
            C::End => KeyCode::End,
            _ => KeyCode::Other,
        }
    }

    fn modifiers(m: crossterm::event::KeyModifiers) -> KeyModifiers {
        use crossterm::event::KeyModifiers as C;
        let mut out = KeyModifiers::NONE;
        if m.contains(C::SHIFT) {
            out |= KeyModifiers::SHIFT;
        }
        if m.contains(C::CONTROL) {
            out |= KeyModifiers::CONTROL;
        }
        if m.contains(C::ALT) {
            out |= KeyModifiers::ALT;
        }
        out
    }

    fn button(b: crossterm::event::MouseButton) -> MouseButton {
        use crossterm::event::MouseButton as C;
        match b {
            C::Left => MouseButton::Left,
            C::Right => MouseButton::Right,
            C::Middle => MouseButton::Middle,
        }
    }

    fn mouse_kind(kind: crossterm::event::MouseEventKind) -> MouseEventKind {
        use crossterm::event::MouseEventKind as C;
        match kind {
            C::Down(b) => MouseEventKind::Down(button(b)),
            C::Up(b) => MouseEventKind::Up(button(b)),
            C::Drag(b) => MouseEventKind::Drag(button(b)),
            C::Moved => MouseEventKind::Moved,
            C::ScrollUp => MouseEventKind::ScrollUp,
            C::ScrollDown => MouseEventKind::ScrollDown,
            C::ScrollLeft => MouseEventKind::ScrollLeft,
            C::ScrollRight => MouseEventKind::ScrollRight,
        }
    }

    impl From<crossterm::event::Event> for InputEvent {
        fn from(event: crossterm::event::Event) -> Self {
            use crossterm::event::Event as C;
            match event {
                C::Key(e) => InputEvent::Key(KeyEvent {
                    code: key_code(e.code),
                    modifiers: modifiers(e.modifiers),
                }),
                C::Mouse(e) => InputEvent::Mouse(MouseEvent {
                    kind: mouse_kind(e.kind),
                    column: e.column,
                    row: e.row,
                    modifiers: modifiers(e.modifiers),
                }),
                C::Resize(w, h) => InputEvent::Resize(w, h),
                C::FocusGained => InputEvent::FocusGained,
                C::FocusLost => InputEvent::FocusLost,
                C::Paste(s) => InputEvent::Paste(s),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
