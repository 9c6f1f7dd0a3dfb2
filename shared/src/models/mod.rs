//! Domain models for the Kitchen Inventory platform

mod batch;
mod dashboard;
mod forecast;
mod notification;
mod usage;
mod user;

pub use batch::*;
pub use dashboard::*;
pub use forecast::*;
pub use notification::*;
pub use usage::*;
pub use user::*;
