//! HTTP handlers for authentication and unit membership

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use shared::models::{
    InviteInput, LoginInput, LoginResponse, RegisterInput, UnitCodeInput, UnitInput, UserProfile,
};

use crate::error::AppResult;
use crate::middleware::{session_cookie, SessionToken};
use crate::services::AuthService;
use crate::AppState;

/// Log in and store the token in the session cookie
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<impl IntoResponse> {
    let service = AuthService::new(state.inventory_api.clone());
    let response: LoginResponse = service.login(input).await?;
    let cookie = session_cookie(&state.config.auth, Some(&response.token))?;

    Ok(([(header::SET_COOKIE, cookie)], Json(response)))
}

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let service = AuthService::new(state.inventory_api.clone());
    let created = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Clear the session cookie
pub async fn logout(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cookie = session_cookie(&state.config.auth, None)?;
    Ok((
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, cookie)],
    ))
}

/// Profile of the logged-in user
pub async fn get_user(token: SessionToken) -> AppResult<Json<UserProfile>> {
    let profile = AuthService::profile(token.as_str())?;
    Ok(Json(profile))
}

pub async fn create_unit(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<UnitInput>,
) -> AppResult<Json<Value>> {
    let service = AuthService::new(state.inventory_api.clone());
    Ok(Json(service.create_unit(token.as_str(), input).await?))
}

pub async fn join_unit(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<UnitCodeInput>,
) -> AppResult<Json<Value>> {
    let service = AuthService::new(state.inventory_api.clone());
    Ok(Json(service.join_unit(token.as_str(), input).await?))
}

pub async fn accept_invite(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<InviteInput>,
) -> AppResult<Json<Value>> {
    let service = AuthService::new(state.inventory_api.clone());
    Ok(Json(service.accept_invite(token.as_str(), input).await?))
}
