pub mod tree;
pub mod widget;
