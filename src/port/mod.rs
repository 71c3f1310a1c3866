//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports describe the infrastructure the service layer needs without
//! naming an implementation; adapters provide the implementations.

pub mod outbound;
