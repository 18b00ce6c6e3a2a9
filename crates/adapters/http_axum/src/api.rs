//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod trips;

use axum::Router;
use axum::routing::get;

use tripkeeper_app::ports::TripRepository;
use tripkeeper_domain::validator::TripValidation;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, V>() -> Router<AppState<R, V>>
where
    R: TripRepository + Send + Sync + 'static,
    V: TripValidation + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/trips",
            get(trips::list::<R, V>).post(trips::create::<R, V>),
        )
        .route(
            "/trips/{id}",
            get(trips::get::<R, V>)
                .patch(trips::update::<R, V>)
                .delete(trips::delete::<R, V>),
        )
}
