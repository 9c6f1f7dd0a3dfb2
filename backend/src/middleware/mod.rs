//! Request extractors and middleware

pub mod auth;

pub use auth::{decode_claims, session_cookie, SessionToken};
