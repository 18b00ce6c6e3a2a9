//! Trip service — use-cases for managing a user's trips.
//!
//! Every operation is scoped by the caller's [`UserId`]. A trip owned by
//! someone else is reported exactly like a trip that does not exist.

use tripkeeper_domain::error::{NotFoundError, TripkeeperError};
use tripkeeper_domain::id::{TripId, UserId};
use tripkeeper_domain::trip::{NewTrip, Trip, TripPatch};
use tripkeeper_domain::validator::{TripValidation, TripValidator};

use crate::ports::TripRepository;

/// Application service for trip CRUD operations.
pub struct TripService<R, V = TripValidator> {
    repo: R,
    validator: V,
}

impl<R: TripRepository> TripService<R> {
    /// Create a service that applies the standard [`TripValidator`] rules.
    pub fn with_default_validator(repo: R) -> Self {
        Self::new(repo, TripValidator)
    }
}

impl<R: TripRepository, V: TripValidation> TripService<R, V> {
    /// Create a new service from its repository and validator.
    pub fn new(repo: R, validator: V) -> Self {
        Self { repo, validator }
    }

    /// List the trips owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(%user_id))]
    pub async fn find_all(&self, user_id: &UserId) -> Result<Vec<Trip>, TripkeeperError> {
        self.repo.find_all_by_user(user_id).await
    }

    /// Look up one trip owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TripkeeperError::NotFound`] when the trip does not exist or
    /// belongs to another user, or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(%trip_id, %user_id))]
    pub async fn find_one(
        &self,
        trip_id: TripId,
        user_id: &UserId,
    ) -> Result<Trip, TripkeeperError> {
        self.repo
            .find_by_id_and_user(trip_id, user_id)
            .await?
            .ok_or_else(|| NotFoundError::trip(trip_id).into())
    }

    /// Validate `payload` and store it as a new trip owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TripkeeperError::Validation`] if the payload is rejected, in
    /// which case nothing is stored, or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(%user_id))]
    pub async fn create(
        &self,
        payload: NewTrip,
        user_id: &UserId,
    ) -> Result<Trip, TripkeeperError> {
        let details = self
            .validator
            .validate_create(payload)
            .inspect_err(|err| tracing::debug!(%err, "rejected trip creation"))?;

        let trip = Trip::new(TripId::new(), user_id.clone(), details);
        let created = self.repo.insert(trip).await?;
        tracing::info!(trip_id = %created.id, "trip created");
        Ok(created)
    }

    /// Apply `patch` to a trip owned by `user_id`.
    ///
    /// A patch that changes nothing returns the stored trip without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TripkeeperError::NotFound`] when the trip is not visible to
    /// the caller, [`TripkeeperError::Validation`] when the merged trip would
    /// be invalid (the stored trip is left untouched), or a storage error.
    #[tracing::instrument(skip_all, fields(%trip_id, %user_id))]
    pub async fn update(
        &self,
        trip_id: TripId,
        patch: TripPatch,
        user_id: &UserId,
    ) -> Result<Trip, TripkeeperError> {
        let existing = self.find_one(trip_id, user_id).await?;

        let details = self
            .validator
            .validate_update(&existing, patch)
            .inspect_err(|err| tracing::debug!(%err, "rejected trip update"))?;
        if details == existing.details {
            return Ok(existing);
        }

        let updated = self.repo.replace(trip_id, user_id, details).await?;
        tracing::info!("trip updated");
        Ok(updated)
    }

    /// Delete a trip owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TripkeeperError::NotFound`] when the trip is not visible to
    /// the caller, or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(%trip_id, %user_id))]
    pub async fn delete(&self, trip_id: TripId, user_id: &UserId) -> Result<bool, TripkeeperError> {
        self.find_one(trip_id, user_id).await?;

        if !self.repo.remove(trip_id, user_id).await? {
            return Err(NotFoundError::trip(trip_id).into());
        }
        tracing::info!("trip deleted");
        Ok(true)
    }
}
