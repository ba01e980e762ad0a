pub mod breaks;
pub mod link;
pub mod user;

pub use breaks::BreakPeriod;
pub use link::{Link, LinkAction, LinkDetails, LinkDispatcher, LinkEnv, UrlOpener};
pub use user::User;
