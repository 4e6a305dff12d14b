//! Problem fetcher implementation
//!
//! This module drives the full intake flow for one recognized problem
//! reference: duplicate checks against the host's store, the API request,
//! and record assembly, including the gym fallback.

use crate::config::ApiConfig;
use crate::fetch::api::{standings_url, ApiResponse};
use crate::fetch::{normalize_handle, ProblemRecord};
use crate::store::ProblemStore;
use crate::url::ProblemReference;
use crate::{FetchError, FetchResult};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The API client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use cf_scout::config::ApiConfig;
/// use cf_scout::fetch::build_http_client;
///
/// let config = ApiConfig::default();
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &ApiConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches problem metadata for recognized references
///
/// One fetcher can serve any number of references; the HTTP client is
/// reused across calls.
pub struct ProblemFetcher {
    client: Client,
    config: ApiConfig,
}

impl ProblemFetcher {
    /// Creates a fetcher with a freshly built HTTP client
    pub fn new(config: ApiConfig) -> FetchResult<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    /// Creates a fetcher around an existing HTTP client
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Fetches problem data for a recognized reference
    ///
    /// # Fetch Flow
    ///
    /// 1. Existence check on the canonical URL; a hit is a duplicate
    /// 2. For non-gym problems, the problemset alias is checked too when
    ///    it differs from the reference URL
    /// 3. One `contest.standings` request (first row only) supplies the
    ///    contest's problem list
    /// 4. The entry matching the reference's index becomes the record; a
    ///    gym problem missing from the response gets a synthesized record,
    ///    every other miss is an error
    ///
    /// # Arguments
    ///
    /// * `store` - The host's problem datastore, consulted for duplicates
    /// * `reference` - The recognized problem reference
    /// * `submitter` - Handle to attribute the record to; `None` or empty
    ///   falls back to the default handle
    ///
    /// # Returns
    ///
    /// The assembled [`ProblemRecord`], or the [`FetchError`] describing
    /// why no record was produced
    pub async fn fetch_problem_data<S>(
        &self,
        store: &S,
        reference: &ProblemReference,
        submitter: Option<&str>,
    ) -> FetchResult<ProblemRecord>
    where
        S: ProblemStore + ?Sized,
    {
        match self.fetch_inner(store, reference, submitter).await {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::error!("Error fetching problem data for {}: {}", reference.url, e);
                Err(e)
            }
        }
    }

    async fn fetch_inner<S>(
        &self,
        store: &S,
        reference: &ProblemReference,
        submitter: Option<&str>,
    ) -> FetchResult<ProblemRecord>
    where
        S: ProblemStore + ?Sized,
    {
        let submitter = normalize_handle(submitter);

        // Duplicate check on the reference URL; a store failure here ends
        // the flow with the store's own message
        if store.problem_exists(&reference.url).await? {
            tracing::info!("Problem {} already stored", reference.problem_id);
            return Err(FetchError::AlreadyExists);
        }

        // A regular problem is reachable under its problemset alias as
        // well; either stored form makes it a duplicate. An alias check
        // failure counts as a miss
        if let Some(alias) = reference.problemset_alias() {
            if alias != reference.url {
                match store.problem_exists(&alias).await {
                    Ok(true) => {
                        tracing::info!(
                            "Problem {} already stored under alternate URL",
                            reference.problem_id
                        );
                        return Err(FetchError::AlreadyExistsAlternate);
                    }
                    Ok(false) => {}
                    Err(e) => {
                        tracing::warn!("Alias existence check failed for {}: {}", alias, e);
                    }
                }
            }
        }

        let api_url = standings_url(&self.config.base_url, reference);
        tracing::debug!("Requesting problem data from {}", api_url);

        let response = self.client.get(&api_url).send().await?;
        let envelope: ApiResponse = response.json().await?;

        if envelope.status != "OK" {
            tracing::warn!(
                "Codeforces API rejected request for contest {}: {}",
                reference.contest_id,
                envelope.comment.as_deref().unwrap_or("no comment")
            );
            return Err(FetchError::ApiRejected);
        }

        let result = envelope.result.ok_or(FetchError::ApiRejected)?;

        let problem = result
            .problems
            .iter()
            .find(|problem| problem.index == reference.index);

        match problem {
            Some(problem) => Ok(ProblemRecord::from_api(problem, reference, submitter)),
            None if reference.is_gym() => {
                // The public API carries no problem metadata for many gym
                // contests; synthesize a minimal record instead of failing
                tracing::debug!(
                    "Gym problem {} missing from API response, synthesizing record",
                    reference.problem_id
                );
                Ok(ProblemRecord::gym_fallback(reference, submitter))
            }
            None => Err(FetchError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = ApiConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_with_timeouts() {
        let config = ApiConfig {
            timeout_secs: Some(30),
            connect_timeout_secs: Some(10),
            ..ApiConfig::default()
        };
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_fetcher_construction() {
        let fetcher = ProblemFetcher::new(ApiConfig::default());
        assert!(fetcher.is_ok());
    }

    // The fetch flow itself is covered by the wiremock integration tests
}
