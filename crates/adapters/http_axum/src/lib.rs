//! # tripkeeper-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for trips under `/api/trips`
//! - Resolve the caller's identity from the header set by the upstream
//!   authenticating proxy
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `tripkeeper-app` (for port traits and services) and
//! `tripkeeper-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
