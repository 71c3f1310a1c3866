use thiserror::Error;

use crate::domain::id::HomeId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A home lookup matched no row.
    #[error("home #{0} not found")]
    HomeNotFound(HomeId),

    /// A filtered listing query matched no rows.
    #[error("no homes match the requested filter")]
    NoMatchingHomes,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Whether this error carries the catalog's "no such record" semantic.
    ///
    /// The controller layer maps these to a 404 response; every other
    /// variant surfaces as a server error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::HomeNotFound(_) | Error::NoMatchingHomes)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_not_found_display_includes_id() {
        let err = Error::HomeNotFound(HomeId::new(42));
        assert_eq!(err.to_string(), "home #42 not found");
    }

    #[test]
    fn not_found_predicate_covers_both_lookup_misses() {
        assert!(Error::HomeNotFound(HomeId::new(1)).is_not_found());
        assert!(Error::NoMatchingHomes.is_not_found());
        assert!(!Error::Database("locked".to_string()).is_not_found());
        assert!(!Error::Connection("pool exhausted".to_string()).is_not_found());
    }
}
