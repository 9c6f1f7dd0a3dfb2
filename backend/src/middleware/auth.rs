//! Session handling
//!
//! The browser holds the backend-issued JWT in an HttpOnly cookie. The
//! gateway forwards it to the backend as a bearer token; API clients may send
//! the bearer header directly instead.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderValue, StatusCode},
    Json,
};
use axum_extra::headers::{authorization::Bearer, Authorization, Cookie, HeaderMapExt};
use jsonwebtoken::{errors::ErrorKind, DecodingKey, Validation};

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult, ErrorDetail, ErrorResponse};
use crate::AppState;
use shared::models::TokenClaims;

/// Raw backend token of the current request
#[derive(Clone, Debug)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Find the token in the session cookie, then in the Authorization header
    pub fn from_parts(parts: &Parts, cookie_name: &str) -> Option<Self> {
        let from_cookie = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookies| cookies.get(cookie_name).map(str::to_string));

        from_cookie
            .or_else(|| {
                parts
                    .headers
                    .typed_get::<Authorization<Bearer>>()
                    .map(|auth| auth.token().to_string())
            })
            .filter(|token| !token.is_empty())
            .map(SessionToken)
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for SessionToken {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        SessionToken::from_parts(parts, &state.config.auth.cookie_name).ok_or_else(|| {
            let error = ErrorResponse {
                error: ErrorDetail {
                    code: "UNAUTHORIZED".to_string(),
                    message_en: "Authentication required".to_string(),
                    message_id: "Silakan masuk terlebih dahulu".to_string(),
                    field: None,
                },
            };
            (StatusCode::UNAUTHORIZED, Json(error))
        })
    }
}

/// Read the claims of a backend token.
///
/// The signing key stays with the backend, so only structure and expiry are
/// checked here.
pub fn decode_claims(token: &str) -> AppResult<TokenClaims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();

    jsonwebtoken::decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
        })
}

/// `Set-Cookie` value storing the token, or clearing it when `token` is `None`
pub fn session_cookie(config: &AuthConfig, token: Option<&str>) -> AppResult<HeaderValue> {
    let (value, max_age) = match token {
        Some(token) => (token, config.cookie_max_age_secs),
        None => ("", 0),
    };

    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name, value, max_age
    );
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie)
        .map_err(|_| AppError::Internal("Token contains characters not allowed in a cookie".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_with_exp(exp: i64) -> String {
        let claims = TokenClaims {
            sub: "42".into(),
            email: "chef@dapur.id".into(),
            username: "chef".into(),
            role: "ADMIN".into(),
            iat: 0,
            exp,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-only")).unwrap()
    }

    fn parts(header: (&str, &str)) -> Parts {
        let (parts, _) = Request::builder()
            .header(header.0, header.1)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn test_decode_claims_without_signing_key() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let claims = decode_claims(&token_with_exp(exp)).unwrap();
        assert_eq!(claims.username, "chef");
        assert_eq!(claims.role, "ADMIN");
    }

    #[test]
    fn test_decode_claims_rejects_expired_and_garbage() {
        let exp = chrono::Utc::now().timestamp() - 7200;
        assert!(matches!(decode_claims(&token_with_exp(exp)), Err(AppError::TokenExpired)));
        assert!(matches!(decode_claims("not-a-jwt"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_token_from_cookie_or_bearer() {
        let from_cookie = SessionToken::from_parts(&parts(("cookie", "theme=dark; token=abc.def.ghi")), "token");
        assert_eq!(from_cookie.unwrap().as_str(), "abc.def.ghi");

        let from_header = SessionToken::from_parts(&parts(("authorization", "Bearer xyz")), "token");
        assert_eq!(from_header.unwrap().as_str(), "xyz");

        assert!(SessionToken::from_parts(&parts(("cookie", "token=")), "token").is_none());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = AuthConfig::default();
        let set = session_cookie(&config, Some("abc")).unwrap();
        let set = set.to_str().unwrap();
        assert!(set.starts_with("token=abc;"));
        assert!(set.contains("HttpOnly"));
        assert!(set.contains("Max-Age=86400"));
        assert!(set.contains("Secure"));

        let cleared = session_cookie(&config, None).unwrap();
        assert!(cleared.to_str().unwrap().contains("Max-Age=0"));
    }
}
