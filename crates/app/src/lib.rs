//! # tripkeeper-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TripRepository` — user-scoped persistence for trips
//! - Define **driving/inbound ports** as use-case structs:
//!   - `TripService` — list, get, create, update, delete trips for a user
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `tripkeeper-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
