//! Trip — a user-owned travel plan and the payloads that shape it.

mod status;

pub use status::{TripStatus, UnknownStatus};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::id::{TripId, UserId};
use crate::time::Timestamp;
use crate::waypoint::Waypoint;

/// A persisted travel plan.
///
/// `id` and `user_id` never change after creation. Everything a patch may
/// touch lives in [`TripDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub details: TripDetails,
}

impl Trip {
    /// Bind validated details to an identity and an owner.
    #[must_use]
    pub fn new(id: TripId, user_id: UserId, details: TripDetails) -> Self {
        Self {
            id,
            user_id,
            details,
        }
    }

    /// Whether `user_id` owns this trip.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// The mutable field set of a trip, with every default already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub name: String,
    pub description: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: TripStatus,
    pub is_public: bool,
    pub tags: BTreeSet<String>,
    pub waypoints: Vec<Waypoint>,
}

/// Candidate fields for a new trip.
///
/// Required fields are optional here so their absence can be reported by
/// the validator instead of being lost at parse time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTrip {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: Option<TripStatus>,
    pub is_public: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
    pub waypoints: Option<Vec<Waypoint>>,
}

impl NewTrip {
    /// Create a builder for constructing a [`NewTrip`].
    #[must_use]
    pub fn builder() -> NewTripBuilder {
        NewTripBuilder::default()
    }
}

/// Step-by-step builder for [`NewTrip`].
#[derive(Debug, Default)]
pub struct NewTripBuilder {
    inner: NewTrip,
}

impl NewTripBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Timestamp) -> Self {
        self.inner.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Timestamp) -> Self {
        self.inner.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn status(mut self, status: TripStatus) -> Self {
        self.inner.status = Some(status);
        self
    }

    #[must_use]
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.inner.is_public = Some(is_public);
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn waypoint(mut self, waypoint: Waypoint) -> Self {
        self.inner.waypoints.get_or_insert_with(Vec::new).push(waypoint);
        self
    }

    /// Return the assembled payload. Validation happens later, in
    /// [`TripValidator`](crate::validator::TripValidator).
    #[must_use]
    pub fn build(self) -> NewTrip {
        self.inner
    }
}

/// A partial update. `Some` replaces the stored value, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: Option<TripStatus>,
    pub is_public: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
    pub waypoints: Option<Vec<Waypoint>>,
}

impl TripPatch {
    /// Overlay this patch on `details` without any checks.
    #[must_use]
    pub fn apply_to(self, details: &TripDetails) -> TripDetails {
        TripDetails {
            name: self.name.unwrap_or_else(|| details.name.clone()),
            description: self
                .description
                .unwrap_or_else(|| details.description.clone()),
            start_date: self.start_date.or(details.start_date),
            end_date: self.end_date.or(details.end_date),
            status: self.status.unwrap_or(details.status),
            is_public: self.is_public.unwrap_or(details.is_public),
            tags: self.tags.unwrap_or_else(|| details.tags.clone()),
            waypoints: self.waypoints.unwrap_or_else(|| details.waypoints.clone()),
        }
    }
}
