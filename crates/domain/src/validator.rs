//! Trip validation — decides whether a payload may become, or update, a trip.
//!
//! Everything here is pure: the same input always yields the same output and
//! nothing is persisted. The service layer calls in through
//! [`TripValidation`] so an alternative rule set can be injected.

use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::time::Timestamp;
use crate::trip::{NewTrip, Trip, TripDetails, TripPatch};

/// Rules applied to trip payloads before they reach storage.
pub trait TripValidation {
    /// Check a create payload and return it with defaults applied.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first broken rule.
    fn validate_create(&self, payload: NewTrip) -> Result<TripDetails, ValidationError>;

    /// Merge `patch` over `existing` and check the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the merged trip would be invalid.
    fn validate_update(
        &self,
        existing: &Trip,
        patch: TripPatch,
    ) -> Result<TripDetails, ValidationError>;
}

/// The standard trip rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripValidator;

impl TripValidation for TripValidator {
    fn validate_create(&self, payload: NewTrip) -> Result<TripDetails, ValidationError> {
        let name = payload
            .name
            .as_deref()
            .and_then(normalize_name)
            .ok_or(ValidationError::MissingRequiredParameter { field: "name" })?;
        let status = payload
            .status
            .ok_or(ValidationError::MissingRequiredParameter { field: "status" })?;
        let is_public = payload
            .is_public
            .ok_or(ValidationError::MissingRequiredParameter { field: "isPublic" })?;

        check_date_range(payload.start_date, payload.end_date)?;

        Ok(TripDetails {
            name,
            description: payload.description.unwrap_or_default(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            status,
            is_public,
            tags: payload.tags.map(normalize_tags).unwrap_or_default(),
            waypoints: payload.waypoints.unwrap_or_default(),
        })
    }

    fn validate_update(
        &self,
        existing: &Trip,
        mut patch: TripPatch,
    ) -> Result<TripDetails, ValidationError> {
        if let Some(name) = patch.name.take() {
            let name = normalize_name(&name)
                .ok_or(ValidationError::MissingRequiredParameter { field: "name" })?;
            patch.name = Some(name);
        }
        patch.tags = patch.tags.map(normalize_tags);

        let merged = patch.apply_to(&existing.details);
        check_date_range(merged.start_date, merged.end_date)?;
        Ok(merged)
    }
}

fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn normalize_tags(tags: BTreeSet<String>) -> BTreeSet<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn check_date_range(
    start: Option<Timestamp>,
    end: Option<Timestamp>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end <= start => Err(ValidationError::InvalidDateRange),
        _ => Ok(()),
    }
}
