//! UI layer (deep wrapper over `ratatui`).
//!
//! All `ratatui`/`crossterm` types stay behind the backend adapter; the UI
//! core (geometry, painter, hit-test tree, widgets) is headless and is driven
//! the same way by the terminal backend and by the test backend.

pub mod backend;

pub mod core;

pub mod widgets;
