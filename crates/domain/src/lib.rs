//! # tripkeeper-domain
//!
//! Pure domain model for the tripkeeper travel planner.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Trips** (user-owned travel plans with dates, status, tags)
//! - Define **Waypoints** (ordered stops within a trip)
//! - Define the **create payload** and **patch** shapes accepted for trips
//! - Hold the `TripValidator`, the only place trip invariants are decided
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod trip;
pub mod validator;
pub mod waypoint;
