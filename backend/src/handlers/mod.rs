//! HTTP handlers for the gateway endpoints

pub mod auth;
pub mod dashboard;
pub mod fifo;
pub mod forecast;
pub mod health;
pub mod inventory;
pub mod notification;
pub mod predictions;
pub mod usage;

pub use auth::*;
pub use dashboard::*;
pub use fifo::*;
pub use forecast::*;
pub use health::*;
pub use inventory::*;
pub use notification::*;
pub use predictions::*;
pub use usage::*;

use serde::Deserialize;
use shared::types::Language;

/// `?lang=` selector for localized labels
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

impl LanguageQuery {
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default()
    }
}
