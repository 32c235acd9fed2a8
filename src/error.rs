//! Error types for catalog construction

use thiserror::Error;

/// Errors raised while building a pattern catalog.
///
/// These are the only hard failures in the crate: a malformed catalog must
/// surface at startup, never during a `read` call. Extraction itself is
/// heuristic and total — a miss is an empty field, not an error.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A pattern in the named category failed to compile
    #[error("Invalid pattern in category '{category}': {source}")]
    Pattern {
        category: &'static str,
        #[source]
        source: Box<regex::Error>,
    },

    /// A derived line-capturing pattern failed to compile after wrapping
    #[error("Invalid line variant in category '{category}': {source}")]
    LineVariant {
        category: &'static str,
        #[source]
        source: Box<regex::Error>,
    },
}

/// Result type for catalog construction
pub type Result<T> = std::result::Result<T, CatalogError>;
