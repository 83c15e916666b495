//! # cafeshop-domain
//!
//! Pure domain model for the cafe shop directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifier, error conventions
//! - Define the **CafeShop** record and its **Rating** scores
//! - Define the **field allow-list** of mutable columns
//! - Enforce input rules (required fields, map links, rating choices) and
//!   report failures as structured field errors
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod cafe_shop;
