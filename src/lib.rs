//! cf-scout: Codeforces problem intake for problem trackers
//!
//! This crate recognizes Codeforces problem URLs in their public shapes,
//! extracts them from free-form text, fetches problem metadata from the
//! Codeforces API, and deduplicates against the host application's store.

pub mod config;
pub mod fetch;
pub mod store;
pub mod url;

use thiserror::Error;

/// Main error type for fetch operations
///
/// The `Display` text of each variant is the user-facing failure message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Problem already exists in database")]
    AlreadyExists,

    #[error("Problem already exists in database (with alternate URL)")]
    AlreadyExistsAlternate,

    /// Existence check failed; carries the store's message verbatim
    #[error(transparent)]
    Store(#[from] store::StoreError),

    #[error("Failed to fetch problem data from Codeforces API")]
    ApiRejected,

    #[error("Problem not found in Codeforces API response")]
    NotFound,

    /// Connection, timeout, or body decoding failure from the HTTP layer
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::ApiConfig;
pub use fetch::{build_http_client, ProblemFetcher, ProblemRecord};
pub use store::{MemoryStore, ProblemStore, StoreError, StoreResult};
pub use url::{
    extract_all_urls, extract_problem_info, extract_urls, format_problem_url, ContestMatcher,
    ContestReference, ExtractedUrls, ProblemReference, UrlKind,
};
