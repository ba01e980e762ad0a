//! The visual test harness: interactive scenes driving the widgets with
//! synthetic scenarios.

pub mod break_scene;
pub mod harness;
pub mod link_scene;

pub use break_scene::BreakScene;
pub use harness::Harness;
pub use link_scene::LinkScene;
