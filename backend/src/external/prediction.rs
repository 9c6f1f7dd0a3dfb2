//! Client for the demand prediction service

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::format::format_date_to_string;

use super::{decode_body, upstream_message};
use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// Prediction service client
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a client from configuration
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Prediction request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Prediction service unreachable: {}", e);
                AppError::PredictionServiceUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Prediction service returned {}: {}", status, body);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|_| AppError::PredictionServiceUnavailable)?;

        decode_body(&bytes, "prediction")
    }

    /// Raw demand forecast
    pub async fn forecast(&self) -> AppResult<Value> {
        self.fetch("/api/forecast", &[]).await
    }

    /// Forecast dashboard for a date window
    pub async fn prediction_dashboard<T: DeserializeOwned>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<T> {
        self.fetch(
            "/prediction-dashboard",
            &[
                ("forecast_start_date", format_date_to_string(start)),
                ("forecast_end_date", format_date_to_string(end)),
            ],
        )
        .await
    }
}
