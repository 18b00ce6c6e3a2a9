//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TripkeeperError`] via `From`, so callers only ever match on one enum.

use std::error::Error as StdError;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum TripkeeperError {
    /// The payload broke a trip invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist for the caller.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A persistence adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Rejections produced while checking a trip payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field required on create was absent (or blank, for `name`).
    #[error("Missing required parameter: {field}")]
    MissingRequiredParameter { field: &'static str },

    /// `endDate` is not strictly after `startDate`.
    #[error("endDate must be after startDate")]
    InvalidDateRange,

    /// A date field could not be parsed.
    #[error("invalid timestamp for {field}: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
}

/// A lookup found nothing visible to the caller.
///
/// The message deliberately omits the id so a record owned by another user
/// reads the same as one that never existed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} was not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    /// Shorthand for a missing trip.
    #[must_use]
    pub fn trip(id: impl ToString) -> Self {
        Self {
            entity: "Trip",
            id: id.to_string(),
        }
    }
}
