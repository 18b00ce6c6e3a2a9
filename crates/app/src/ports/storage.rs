//! Storage port — repository trait for trip persistence.
//!
//! Every lookup takes the owning [`UserId`]; an adapter must never return a
//! trip to a caller that does not own it.

use std::future::Future;
use std::sync::Arc;

use tripkeeper_domain::error::TripkeeperError;
use tripkeeper_domain::id::{TripId, UserId};
use tripkeeper_domain::trip::{Trip, TripDetails};

/// Repository for persisting and querying [`Trip`]s.
pub trait TripRepository {
    /// All trips owned by `user_id`, in insertion order.
    fn find_all_by_user(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<Trip>, TripkeeperError>> + Send;

    /// The trip with `id`, if it exists and belongs to `user_id`.
    fn find_by_id_and_user(
        &self,
        id: TripId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Trip>, TripkeeperError>> + Send;

    /// Store a new trip.
    fn insert(&self, trip: Trip) -> impl Future<Output = Result<Trip, TripkeeperError>> + Send;

    /// Overwrite the mutable fields of a trip owned by `user_id`.
    ///
    /// Implementations return [`TripkeeperError::NotFound`] when no row
    /// matched, e.g. because the trip was removed concurrently.
    fn replace(
        &self,
        id: TripId,
        user_id: &UserId,
        details: TripDetails,
    ) -> impl Future<Output = Result<Trip, TripkeeperError>> + Send;

    /// Delete a trip owned by `user_id`. Returns whether a row was removed.
    fn remove(
        &self,
        id: TripId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, TripkeeperError>> + Send;
}

impl<T: TripRepository + Send + Sync> TripRepository for Arc<T> {
    fn find_all_by_user(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Vec<Trip>, TripkeeperError>> + Send {
        (**self).find_all_by_user(user_id)
    }

    fn find_by_id_and_user(
        &self,
        id: TripId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Trip>, TripkeeperError>> + Send {
        (**self).find_by_id_and_user(id, user_id)
    }

    fn insert(&self, trip: Trip) -> impl Future<Output = Result<Trip, TripkeeperError>> + Send {
        (**self).insert(trip)
    }

    fn replace(
        &self,
        id: TripId,
        user_id: &UserId,
        details: TripDetails,
    ) -> impl Future<Output = Result<Trip, TripkeeperError>> + Send {
        (**self).replace(id, user_id, details)
    }

    fn remove(
        &self,
        id: TripId,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, TripkeeperError>> + Send {
        (**self).remove(id, user_id)
    }
}
