//! Outbound adapters.

pub mod sqlite;
