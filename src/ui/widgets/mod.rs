pub mod break_overlay;
pub mod link_flow;
