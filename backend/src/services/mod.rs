//! Business logic services for the Kitchen Inventory gateway

pub mod auth;
pub mod dashboard;
pub mod fifo;
pub mod forecast;
pub mod inventory;
pub mod notification;
pub mod usage;

pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use fifo::FifoService;
pub use forecast::ForecastService;
pub use inventory::InventoryService;
pub use notification::NotificationService;
pub use usage::UsageService;
