//! Shared application state for axum handlers.

use std::sync::Arc;

use tripkeeper_app::ports::TripRepository;
use tripkeeper_app::services::trip_service::TripService;
use tripkeeper_domain::validator::{TripValidation, TripValidator};

/// Application state shared across all axum handlers.
///
/// Generic over the repository and validator to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, V = TripValidator> {
    /// Trip CRUD service.
    pub trip_service: Arc<TripService<R, V>>,
}

impl<R, V> Clone for AppState<R, V> {
    fn clone(&self) -> Self {
        Self {
            trip_service: Arc::clone(&self.trip_service),
        }
    }
}

impl<R, V> AppState<R, V>
where
    R: TripRepository + Send + Sync + 'static,
    V: TripValidation + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(trip_service: TripService<R, V>) -> Self {
        Self {
            trip_service: Arc::new(trip_service),
        }
    }
}
