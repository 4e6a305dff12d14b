//! Problem data fetching module
//!
//! This module owns the record assembly and the fetch flow: deduplication
//! against the host's [`ProblemStore`](crate::store::ProblemStore),
//! the `contest.standings` API call, and the gym fallback for contests the
//! API carries no problem metadata for.

mod api;
mod fetcher;

// Re-export main types
pub use api::{standings_url, ApiProblem, ApiResponse, StandingsResult};
pub use fetcher::{build_http_client, ProblemFetcher};

use crate::url::ProblemReference;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default submitter handle when the caller provides none
pub const DEFAULT_SUBMITTER: &str = "tourist";

/// A fully assembled problem record, ready for the caller to persist
///
/// The caller owns persistence; the record carries everything else.
/// Engagement counters start at zero and `difficulty` is omitted from the
/// serialized form when the API reports no rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    /// Problem name as the API reports it, or a synthesized gym name
    pub name: String,

    /// Tag list; `["gym"]` for synthesized gym records
    pub tags: Vec<String>,

    /// Difficulty rating, when the API reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u32>,

    /// The URL of the reference this record was fetched for
    pub url: String,

    /// Solve counter, starts at zero
    pub solved: u32,

    /// Capture timestamp
    pub date_added: DateTime<Utc>,

    /// Submitter handle
    pub added_by: String,

    /// Codeforces profile URL of the submitter
    pub added_by_url: String,

    /// Like counter, starts at zero
    pub likes: u32,

    /// Dislike counter, starts at zero
    pub dislikes: u32,
}

impl ProblemRecord {
    /// Builds a record from an API problem entry
    pub(crate) fn from_api(
        problem: &ApiProblem,
        reference: &ProblemReference,
        submitter: &str,
    ) -> Self {
        Self {
            name: problem.name.clone(),
            tags: problem.tags.clone(),
            difficulty: problem.rating,
            url: reference.url.clone(),
            solved: 0,
            date_added: Utc::now(),
            added_by: submitter.to_string(),
            added_by_url: profile_url(submitter),
            likes: 0,
            dislikes: 0,
        }
    }

    /// Synthesizes a minimal record for a gym problem the API does not list
    ///
    /// The record gets a descriptive name, a lone `gym` tag, and no
    /// difficulty.
    pub(crate) fn gym_fallback(reference: &ProblemReference, submitter: &str) -> Self {
        Self {
            name: format!(
                "Problem {} from Gym Contest {}",
                reference.index, reference.contest_id
            ),
            tags: vec!["gym".to_string()],
            difficulty: None,
            url: reference.url.clone(),
            solved: 0,
            date_added: Utc::now(),
            added_by: submitter.to_string(),
            added_by_url: profile_url(submitter),
            likes: 0,
            dislikes: 0,
        }
    }
}

/// Normalizes an optional submitter handle
///
/// `None` and the empty string both fall back to [`DEFAULT_SUBMITTER`],
/// for the stored name and the profile URL alike.
pub(crate) fn normalize_handle(submitter: Option<&str>) -> &str {
    match submitter {
        Some(handle) if !handle.is_empty() => handle,
        _ => DEFAULT_SUBMITTER,
    }
}

/// Codeforces profile URL for a handle
pub(crate) fn profile_url(handle: &str) -> String {
    format!("https://codeforces.com/profile/{}", handle)
}
