//! Client for the inventory backend REST API
//!
//! The backend owns batches, usage, notifications, analytics and accounts.
//! Every call forwards the caller's JWT as a bearer token.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, IntoUrl, Method, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use uuid::Uuid;

use shared::format::format_date_to_string;
use shared::models::{
    Batch, CreateBatchInput, DashboardSummary, FifoBatch, FreshnessStatusSummary, LoginInput,
    LoginResponse, ManualUsageInput, MenuUsageInput, NotificationApiItem, RegisterInput,
    UsageRecord,
};
use shared::types::PageResponse;

use super::{decode_body, upstream_message};
use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// Inventory backend client
#[derive(Clone)]
pub struct InventoryApiClient {
    client: Client,
    base_url: String,
}

impl InventoryApiClient {
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

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        self.request_to(method, format!("{}{}", self.base_url, path), token)
    }

    fn request_to<U>(&self, method: Method, url: U, token: Option<&str>) -> RequestBuilder
    where
        U: IntoUrl + std::fmt::Display,
    {
        let request_id = Uuid::new_v4();
        tracing::debug!("Backend request {}: {} {}", request_id, method, url);

        let builder = self
            .client
            .request(method, url)
            .header("X-Request-Id", request_id.to_string());
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Backend request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Backend returned {}: {}", status, body);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to read backend response: {}", e)))?;

        decode_body(&bytes, "backend")
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> AppResult<T> {
        self.execute(self.request(Method::GET, path, token)).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, token: Option<&str>, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(method, path, token).json(body)).await
    }

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    pub async fn login(&self, input: &LoginInput) -> AppResult<LoginResponse> {
        self.send_json(Method::POST, "/api/auth/login", None, input).await
    }

    pub async fn register(&self, input: &RegisterInput) -> AppResult<Value> {
        self.send_json(Method::POST, "/api/auth/register", None, input).await
    }

    /// Unit endpoints (create, join by code, accept invite)
    pub async fn post_unit<B: Serialize>(&self, path: &str, token: &str, input: &B) -> AppResult<Value> {
        self.send_json(Method::POST, path, Some(token), input).await
    }

    // ------------------------------------------------------------------
    // Batches & FIFO
    // ------------------------------------------------------------------

    pub async fn list_batches(&self, token: &str) -> AppResult<Vec<Batch>> {
        let batches: Option<Vec<Batch>> = self.get("/api/batches", Some(token)).await?;
        Ok(batches.unwrap_or_default())
    }

    pub async fn create_batch(&self, token: &str, input: &CreateBatchInput) -> AppResult<Value> {
        self.send_json(Method::POST, "/api/batches", Some(token), input).await
    }

    pub async fn fifo_batches(&self, token: &str) -> AppResult<Vec<FifoBatch>> {
        let batches: Option<Vec<FifoBatch>> = self.get("/api/fifo/batches", Some(token)).await?;
        Ok(batches.unwrap_or_default())
    }

    pub async fn batches_by_priority(&self, token: &str) -> AppResult<Vec<FifoBatch>> {
        let batches: Option<Vec<FifoBatch>> = self
            .get("/api/fifo/all-batches-by-priority", Some(token))
            .await?;
        Ok(batches.unwrap_or_default())
    }

    pub async fn freshness_summary(&self, token: &str) -> AppResult<Vec<FreshnessStatusSummary>> {
        let summary: Option<Vec<FreshnessStatusSummary>> = self
            .get("/api/batches/freshness-summary", Some(token))
            .await?;
        Ok(summary.unwrap_or_default())
    }

    // ------------------------------------------------------------------
    // Usage
    // ------------------------------------------------------------------

    pub async fn menus(&self, token: &str) -> AppResult<Value> {
        self.get("/api/menus", Some(token)).await
    }

    pub async fn use_for_menu(&self, token: &str, input: &MenuUsageInput) -> AppResult<Value> {
        self.send_json(Method::POST, "/api/batches/use-for-menu", Some(token), input)
            .await
    }

    pub async fn use_manual(&self, token: &str, input: &ManualUsageInput) -> AppResult<Value> {
        self.send_json(Method::POST, "/api/batches/use-manual", Some(token), input)
            .await
    }

    pub async fn record_usage(&self, token: &str, record: &UsageRecord) -> AppResult<Value> {
        self.send_json(Method::POST, "/api/usage/record", Some(token), record)
            .await
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub async fn notifications(&self, token: &str) -> AppResult<PageResponse<NotificationApiItem>> {
        self.get("/api/notifications", Some(token)).await
    }

    pub async fn notification_summary(&self, token: &str) -> AppResult<Value> {
        self.get("/api/notifications/summary", Some(token)).await
    }

    pub async fn mark_all_notifications_read(&self, token: &str) -> AppResult<Value> {
        self.execute(self.request(Method::PUT, "/api/notifications/mark-all-read", Some(token)))
            .await
    }

    pub async fn mark_notifications_read(&self, token: &str, ids: &[String]) -> AppResult<Value> {
        self.send_json(Method::PUT, "/api/notifications/mark-read", Some(token), ids)
            .await
    }

    pub async fn delete_notification(&self, token: &str, id: &str) -> AppResult<Value> {
        let url = self.notification_url(id)?;
        self.execute(self.request_to(Method::DELETE, url, Some(token)))
            .await
    }

    /// URL of one notification; the id is encoded as a single path segment
    fn notification_url(&self, id: &str) -> AppResult<Url> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(AppError::NotFound("Notification".to_string()));
        }

        let mut url = Url::parse(&format!("{}/api/notifications", self.base_url))
            .map_err(|e| AppError::Configuration(format!("Backend base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Backend base URL cannot carry a path".to_string()))?
            .push(id);
        Ok(url)
    }

    // ------------------------------------------------------------------
    // Dashboard & analytics
    // ------------------------------------------------------------------

    pub async fn dashboard_summary(&self, token: &str) -> AppResult<DashboardSummary> {
        self.get("/api/dashboard/summary", Some(token)).await
    }

    pub async fn expiry_alerts(&self, token: &str) -> AppResult<Value> {
        self.get("/api/dashboard/expiry-alerts", Some(token)).await
    }

    pub async fn potential_food_loss(&self, token: &str) -> AppResult<Value> {
        self.get("/api/analytics/potential-food-loss", Some(token)).await
    }

    pub async fn ingredient_usage(&self, token: &str, start: NaiveDate, end: NaiveDate) -> AppResult<Value> {
        let builder = self
            .request(Method::GET, "/api/analytics/ingredient-usage", Some(token))
            .query(&[
                ("startDate", format_date_to_string(start)),
                ("endDate", format_date_to_string(end)),
            ]);
        self.execute(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> InventoryApiClient {
        InventoryApiClient::with_base_url("http://backend.local:8080/".to_string())
    }

    #[test]
    fn test_notification_url_plain_id() {
        let url = client().notification_url("42").unwrap();
        assert_eq!(url.as_str(), "http://backend.local:8080/api/notifications/42");
    }

    #[test]
    fn test_notification_url_keeps_traversal_in_one_segment() {
        let url = client().notification_url("../batches/5").unwrap();
        assert_eq!(
            url.as_str(),
            "http://backend.local:8080/api/notifications/..%2Fbatches%2F5"
        );
        assert_eq!(url.path_segments().unwrap().count(), 3);
    }

    #[test]
    fn test_notification_url_rejects_dot_segments() {
        for id in ["", ".", ".."] {
            assert!(matches!(client().notification_url(id), Err(AppError::NotFound(_))));
        }
    }
}
