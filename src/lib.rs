//! Doorstep - real-estate listing catalog and inquiry service.
//!
//! This crate provides the data-access layer of a property listing backend:
//! querying, filtering, creating, updating, and deleting home listings, plus
//! the buyer-to-realtor inquiry flow.
//!
//! # Architecture
//!
//! The crate uses hexagonal layering around a single application service:
//!
//! - **`service::HomeCatalogService`** - the sole access point for listing
//!   and inquiry data; enforces existence checks and projects rows into
//!   caller-facing response shapes
//! - **`port::outbound::CatalogStore`** - the persistence contract the
//!   service depends on
//! - **`adapter::outbound::sqlite`** - Diesel/SQLite implementation of the
//!   store behind an r2d2 connection pool
//!
//! Authentication, input validation, and HTTP routing are the upstream
//! controller layer's responsibility; identities arrive here already
//! resolved and are trusted as-is.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Entities, query predicates, and response projections
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for infrastructure dependencies
//! - [`adapter`] - Diesel/SQLite implementations of the ports
//! - [`service`] - The catalog service consumed by the controller layer
//!
//! # Example
//!
//! ```no_run
//! use doorstep::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
//! use doorstep::adapter::outbound::sqlite::SqliteCatalogStore;
//! use doorstep::domain::HomeFilter;
//! use doorstep::service::HomeCatalogService;
//!
//! # async fn run() -> doorstep::error::Result<()> {
//! let pool = create_pool("doorstep.sqlite")?;
//! run_migrations(&pool)?;
//!
//! let catalog = HomeCatalogService::new(SqliteCatalogStore::new(pool));
//! let homes = catalog.list_homes(&HomeFilter::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
