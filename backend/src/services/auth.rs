//! Authentication service: login, registration, units and profile

use serde_json::Value;
use validator::Validate;

use shared::models::{
    InviteInput, LoginInput, LoginResponse, RegisterInput, UnitCodeInput, UnitInput, UserProfile,
};

use crate::error::AppResult;
use crate::external::InventoryApiClient;
use crate::middleware::decode_claims;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    api: InventoryApiClient,
}

impl AuthService {
    pub fn new(api: InventoryApiClient) -> Self {
        Self { api }
    }

    /// Validate credentials locally, then exchange them for a backend token
    pub async fn login(&self, input: LoginInput) -> AppResult<LoginResponse> {
        input.validate()?;
        let response = self.api.login(&input).await?;
        tracing::info!("User {} logged in", response.username);
        Ok(response)
    }

    pub async fn register(&self, input: RegisterInput) -> AppResult<Value> {
        input.validate()?;
        self.api.register(&input).await
    }

    pub async fn create_unit(&self, token: &str, input: UnitInput) -> AppResult<Value> {
        input.validate()?;
        self.api.post_unit("/api/units", token, &input).await
    }

    pub async fn join_unit(&self, token: &str, input: UnitCodeInput) -> AppResult<Value> {
        input.validate()?;
        self.api.post_unit("/api/units/join", token, &input).await
    }

    pub async fn accept_invite(&self, token: &str, input: InviteInput) -> AppResult<Value> {
        input.validate()?;
        self.api.post_unit("/api/units/invite", token, &input).await
    }

    /// Profile of the token holder
    pub fn profile(token: &str) -> AppResult<UserProfile> {
        decode_claims(token).map(UserProfile::from)
    }
}
