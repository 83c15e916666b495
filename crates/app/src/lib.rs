//! # cafeshop-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CafeShopRepository` — CRUD and single-column writes for cafe shops
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CafeShopService` — create, list, get, replace, update one field, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `cafeshop-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
