//! Display formatting for problem URLs

use regex::Regex;
use std::sync::OnceLock;

static GYM_DISPLAY: OnceLock<Regex> = OnceLock::new();
static CONTEST_DISPLAY: OnceLock<Regex> = OnceLock::new();

fn gym_display() -> &'static Regex {
    GYM_DISPLAY.get_or_init(|| {
        Regex::new(r"^https?://(?:www\.)?codeforces\.com/gym/(\d+)/(?:problem/)?([A-Z\d]+).*$")
            .expect("compile gym display pattern")
    })
}

fn contest_display() -> &'static Regex {
    CONTEST_DISPLAY.get_or_init(|| {
        Regex::new(
            r"^https?://(?:www\.)?codeforces\.com/(?:contest|problemset/problem)/(\d+)/(?:problem/)?([A-Z\d]+).*$",
        )
        .expect("compile contest display pattern")
    })
}

/// Produces a short human-readable label for a Codeforces problem URL
///
/// Contest and problemset URLs condense to `CF {id}{index}`, gym URLs to
/// `GYM {id}{index}`. A URL that matches neither display pattern passes
/// through unchanged. When a problem name is given it is appended as
/// ` - {name}`, whether or not the URL condensed.
///
/// # Arguments
///
/// * `url` - The problem URL to condense
/// * `name` - Optional problem name to append
///
/// # Examples
///
/// ```
/// use cf_scout::url::format_problem_url;
///
/// let label = format_problem_url("https://codeforces.com/contest/1/problem/A", Some("Theatre Square"));
/// assert_eq!(label, "CF 1A - Theatre Square");
///
/// let label = format_problem_url("https://codeforces.com/gym/104053/problem/A", None);
/// assert_eq!(label, "GYM 104053A");
/// ```
pub fn format_problem_url(url: &str, name: Option<&str>) -> String {
    let short = if url.contains("/gym/") {
        gym_display().replace(url, "GYM ${1}${2}")
    } else {
        contest_display().replace(url, "CF ${1}${2}")
    };

    match name {
        Some(name) => format!("{} - {}", short, name),
        None => short.into_owned(),
    }
}
