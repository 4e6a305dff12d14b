//! Problem store seam and error types
//!
//! This module defines the trait interface the fetch flow uses to ask the
//! host application's datastore about already-stored problems, plus an
//! in-memory implementation for tests and small hosts.

use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

/// Error reported by a problem store
///
/// Carries the store's own message verbatim; the fetch flow surfaces it
/// unchanged to the user.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates a store error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The verbatim error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for the host application's problem datastore
///
/// An `Ok` answer is authoritative: absent an error, `true` means a problem
/// with exactly that URL is already stored.
#[async_trait]
pub trait ProblemStore: Send + Sync {
    /// Checks whether a problem with this exact URL is already stored
    async fn problem_exists(&self, url: &str) -> StoreResult<bool>;
}

/// In-memory problem store backed by a set of URLs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    urls: HashSet<String>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with URLs
    pub fn with_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }

    /// Records a URL as stored
    pub fn insert(&mut self, url: impl Into<String>) {
        self.urls.insert(url.into());
    }
}

#[async_trait]
impl ProblemStore for MemoryStore {
    async fn problem_exists(&self, url: &str) -> StoreResult<bool> {
        Ok(self.urls.contains(url))
    }
}
