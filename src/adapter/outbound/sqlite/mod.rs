//! SQLite persistence adapter.
//!
//! Implements the [`CatalogStore`](crate::port::outbound::CatalogStore)
//! port with Diesel ORM over a pooled SQLite connection.

pub mod catalog;
pub mod database;

pub use catalog::SqliteCatalogStore;
