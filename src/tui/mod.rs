//! Terminal plumbing for the interactive binary.

pub mod terminal_guard;

pub use terminal_guard::TerminalGuard;
