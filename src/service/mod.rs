//! Application services exposed to the controller layer.

pub mod catalog;

pub use catalog::HomeCatalogService;
