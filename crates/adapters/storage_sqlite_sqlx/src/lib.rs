//! # tripkeeper-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `TripRepository` port defined in `tripkeeper-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `tripkeeper-app` (for port traits) and `tripkeeper-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod trip_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use trip_repo::SqliteTripRepository;
