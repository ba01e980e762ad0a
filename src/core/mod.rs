pub mod bindable;
pub mod clock;
pub mod event;

pub use bindable::Bindable;
pub use clock::{Clock, ManualClock, WallClock};
