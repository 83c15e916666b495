//! # cafeshop-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `cafeshop-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Bootstrap the `cafe_shops` table (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `cafeshop-app` (for port traits) and `cafeshop-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod cafe_shop_repo;
mod error;
mod pool;

pub use cafe_shop_repo::SqliteCafeShopRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
