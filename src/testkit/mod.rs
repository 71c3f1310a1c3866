//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`db`] — Migrated in-memory database pools and user-row fixtures.
//! - [`domain`] — Builders for listings and filters used across tests.

pub mod db;
pub mod domain;
