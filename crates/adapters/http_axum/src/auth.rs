//! Caller identity.
//!
//! Authentication happens upstream. The proxy in front of this service sets
//! [`USER_ID_HEADER`] on every request it lets through; handlers only ever
//! read the user id from there, never from a request body.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tripkeeper_domain::id::UserId;

use crate::error::ApiError;

/// Header carrying the authenticated user's identifier.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The user on whose behalf a request runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserId);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(UserId::new)
            .map(Self)
            .ok_or_else(|| {
                tracing::debug!("request without caller identity");
                ApiError::Unauthorized
            })
    }
}
