//! Problem URL recognition
//!
//! Matching is deliberately tolerant: schemes and `www.` prefixes are
//! stripped up front, the `mirror.` subdomain is accepted, and patterns are
//! unanchored at the tail so query strings and fragments do not break
//! recognition.

use crate::url::{ProblemReference, UrlKind};
use regex::Regex;
use std::sync::OnceLock;

static SCHEME_PREFIX: OnceLock<Regex> = OnceLock::new();
static PROBLEM_PATTERNS: OnceLock<Vec<(UrlKind, Regex)>> = OnceLock::new();

fn scheme_prefix() -> &'static Regex {
    SCHEME_PREFIX.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?").expect("compile scheme prefix pattern")
    })
}

/// Ordered pattern table; first match wins, so the contest path takes
/// precedence over problemset, which takes precedence over gym.
fn problem_patterns() -> &'static [(UrlKind, Regex)] {
    PROBLEM_PATTERNS.get_or_init(|| {
        vec![
            (
                UrlKind::Contest,
                Regex::new(r"(?:mirror\.)?codeforces\.com/contest/(\d+)/problem/([A-Z\d]+)")
                    .expect("compile contest pattern"),
            ),
            (
                UrlKind::Problemset,
                Regex::new(r"(?:mirror\.)?codeforces\.com/problemset/problem/(\d+)/([A-Z\d]+)")
                    .expect("compile problemset pattern"),
            ),
            (
                UrlKind::Gym,
                Regex::new(r"(?:mirror\.)?codeforces\.com/gym/(\d+)/problem/([A-Z\d]+)")
                    .expect("compile gym pattern"),
            ),
        ]
    })
}

/// Extracts problem information from a Codeforces URL
///
/// Recognizes the contest, problemset, and gym problem URL shapes, with or
/// without a scheme or `www.` prefix, including the `mirror.codeforces.com`
/// host. Surrounding whitespace is trimmed before matching.
///
/// # Arguments
///
/// * `problem_url` - The URL (or URL-like token) to recognize
///
/// # Returns
///
/// A canonical [`ProblemReference`] if the URL matches one of the known
/// shapes, `None` otherwise
///
/// # Examples
///
/// ```
/// use cf_scout::url::extract_problem_info;
///
/// let info = extract_problem_info("https://codeforces.com/contest/1822/problem/B").unwrap();
/// assert_eq!(info.contest_id, "1822");
/// assert_eq!(info.index, "B");
/// assert_eq!(info.problem_id, "1822B");
///
/// assert!(extract_problem_info("https://atcoder.jp/contests/abc300").is_none());
/// ```
pub fn extract_problem_info(problem_url: &str) -> Option<ProblemReference> {
    let trimmed = problem_url.trim();
    let clean = scheme_prefix().replace(trimmed, "");

    for (kind, pattern) in problem_patterns() {
        if let Some(captures) = pattern.captures(&clean) {
            if let (Some(contest_id), Some(index)) = (captures.get(1), captures.get(2)) {
                return Some(ProblemReference::new(
                    *kind,
                    contest_id.as_str(),
                    index.as_str(),
                ));
            }
        }
    }

    None
}
