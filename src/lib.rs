//! cadenza - terminal rhythm-game client UI layer
//!
//! Module structure:
//! - core: framework primitives (input events, bindables, clock)
//! - game: domain model (links, users, break periods)
//! - ui: UI core (geometry, painter, hit-test tree), backends and widgets
//! - app: the visual test harness scenes
//! - services: configuration

pub mod app;
pub mod core;
pub mod game;
pub mod logging;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
