pub mod geom;
pub mod id;
pub mod input;
pub mod painter;
pub mod runtime;
pub mod scene;
pub mod style;
pub mod theme;

pub use scene::tree;
pub use scene::widget;
