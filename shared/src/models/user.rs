//! Authentication and unit membership models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email(message = "Email tidak valid."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password minimal 8 karakter."))]
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 2, message = "Nama minimal 2 karakter."))]
    pub username: String,
    #[validate(email(message = "Email tidak valid."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password minimal 8 karakter."))]
    pub password: String,
}

/// Backend response to a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: String,
    pub email: String,
    pub username: String,
    pub role: String,
}

/// Claims carried by the backend-issued JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Public profile derived from the token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<TokenClaims> for UserProfile {
    fn from(claims: TokenClaims) -> Self {
        Self {
            username: claims.username,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Kitchen unit creation form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnitInput {
    #[validate(length(min = 2, message = "Nama unit minimal 2 karakter."))]
    pub unit_name: String,
    #[validate(length(min = 5, message = "Alamat minimal 5 karakter."))]
    pub address: String,
    #[validate(length(min = 2, message = "Nama kontak minimal 2 karakter."))]
    pub contact_person: String,
    #[validate(length(min = 10, message = "Nomor telepon minimal 10 karakter."))]
    pub contact_phone: String,
}

/// Join an existing unit by its code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnitCodeInput {
    #[validate(length(min = 5, message = "Kode unit minimal 5 karakter."))]
    pub unit_code: String,
}

/// Accept an invitation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InviteInput {
    #[validate(length(min = 5, message = "Kode undangan minimal 5 karakter."))]
    pub invite_code: String,
}
