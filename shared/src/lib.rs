//! Shared types and logic for the Kitchen Inventory platform
//!
//! This crate contains the domain types exchanged with the inventory backend
//! and the prediction service, plus the pure display computations used by the
//! gateway and by the browser (via WASM).

pub mod fifo;
pub mod forecast;
pub mod format;
pub mod freshness;
pub mod inventory;
pub mod models;
pub mod notification;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
