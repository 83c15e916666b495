//! # cafeshop-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for cafe shops (`/`, `/add/cafe-shop/{cafe_username}`,
//!   `/search/cafe-shop/{cafe_id}`, `/update/…`, `/delete/…`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses with a single
//!   error envelope
//!
//! ## Dependency rule
//! Depends on `cafeshop-app` (for port traits and services) and `cafeshop-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
