//! URL handling module for cf-scout
//!
//! This module provides Codeforces problem URL recognition, canonical
//! reference construction, display formatting, and bulk extraction of
//! problem and contest URLs from free-form text.

mod extract;
mod format;
mod matcher;

// Re-export main functions
pub use extract::{extract_all_urls, extract_urls, ContestMatcher, ContestReference, ExtractedUrls};
pub use format::format_problem_url;
pub use matcher::extract_problem_info;

use serde::{Deserialize, Serialize};

/// The public URL shapes a Codeforces problem can be referred by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlKind {
    /// Contest path: `codeforces.com/contest/{id}/problem/{index}`
    Contest,
    /// Problemset path: `codeforces.com/problemset/problem/{id}/{index}`
    Problemset,
    /// Gym path: `codeforces.com/gym/{id}/problem/{index}`
    Gym,
}

impl UrlKind {
    /// Returns true if the kind belongs to the gym id namespace
    pub fn is_gym(&self) -> bool {
        matches!(self, Self::Gym)
    }
}

/// A recognized Codeforces problem reference
///
/// The `url` field is always canonical: regular problems use the contest
/// path even when recognized under the problemset alias, gym problems use
/// the gym path. `problem_id` is a stable lookup key built from the contest
/// id and index, prefixed with `G` for gym problems so the two id
/// namespaces never collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemReference {
    /// Contest or gym id, kept as text
    pub contest_id: String,

    /// Problem index within the contest (e.g. "A", "B2")
    pub index: String,

    /// Lookup key: contest id followed by index, `G`-prefixed for gym
    pub problem_id: String,

    /// Canonical problem URL
    pub url: String,
}

impl ProblemReference {
    /// Builds a canonical reference from a URL kind and its captured parts
    ///
    /// Problemset references collapse onto the contest path, so both public
    /// URLs of a regular problem produce the same reference.
    pub fn new(kind: UrlKind, contest_id: &str, index: &str) -> Self {
        let url = match kind {
            UrlKind::Gym => {
                format!("https://codeforces.com/gym/{}/problem/{}", contest_id, index)
            }
            UrlKind::Contest | UrlKind::Problemset => {
                format!(
                    "https://codeforces.com/contest/{}/problem/{}",
                    contest_id, index
                )
            }
        };

        let problem_id = if kind.is_gym() {
            format!("G{}{}", contest_id, index)
        } else {
            format!("{}{}", contest_id, index)
        };

        Self {
            contest_id: contest_id.to_string(),
            index: index.to_string(),
            problem_id,
            url,
        }
    }

    /// Returns true if this reference points into the gym namespace
    ///
    /// Derived from the URL path so hand-built references behave the same
    /// as matched ones.
    pub fn is_gym(&self) -> bool {
        self.url.contains("/gym/")
    }

    /// The problemset alias of this problem's URL
    ///
    /// Regular problems are reachable under two public URLs; this returns
    /// the problemset form. Gym problems have no alias.
    pub fn problemset_alias(&self) -> Option<String> {
        if self.is_gym() {
            return None;
        }

        Some(format!(
            "https://codeforces.com/problemset/problem/{}/{}",
            self.contest_id, self.index
        ))
    }
}
