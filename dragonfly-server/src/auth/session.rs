//! Per-request operator session
//!
//! The desk has no login of its own; the fronting client names the operator
//! in the `X-Operator` header. A [`Session`] lives for one request only.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::core::ServerState;
use crate::utils::AppError;

/// Header carrying the operator name
pub const OPERATOR_HEADER: &str = "x-operator";

/// Identity of the operator issuing the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub operator: String,
}

impl Session {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
        }
    }

    fn from_parts(parts: &Parts) -> Option<Self> {
        parts
            .headers
            .get(OPERATOR_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Session::new)
    }
}

/// Session Extractor
///
/// Rejects the request with `NotAuthenticated` (401) when the operator
/// header is missing, blank or not valid UTF-8.
impl FromRequestParts<ServerState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(session.clone());
        }

        match Session::from_parts(parts) {
            Some(session) => {
                parts.extensions.insert(session.clone());
                Ok(session)
            }
            None => {
                tracing::warn!(target: "security", uri = %parts.uri, "Missing operator header");
                Err(AppError::unauthorized())
            }
        }
    }
}
