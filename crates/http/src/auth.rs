//! API key authentication.
//!
//! One shared static key loaded from configuration at startup. Handlers opt
//! in by taking [`RequireApiKey`] as an argument; requests without a matching
//! `x-api-key` header are rejected with 401 before the handler body runs.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The configured API key, shared immutably across request handlers.
#[derive(Clone)]
pub struct ApiKeySecret(Arc<str>);

impl ApiKeySecret {
    pub fn new(key: &str) -> Self {
        Self(Arc::from(key))
    }

    /// Constant-time comparison; a length mismatch returns early.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl std::fmt::Debug for ApiKeySecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKeySecret(..)")
    }
}

/// Extractor guarding a route behind the configured API key.
pub struct RequireApiKey;

impl<S> FromRequestParts<S> for RequireApiKey
where
    S: Send + Sync,
    ApiKeySecret: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let secret = ApiKeySecret::from_ref(state);

        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("missing API key"))?;

        if !secret.matches(provided) {
            tracing::warn!("request rejected: invalid API key");
            return Err(AppError::unauthorized("invalid API key"));
        }

        Ok(Self)
    }
}
