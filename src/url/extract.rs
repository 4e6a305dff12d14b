//! Bulk URL extraction from free-form text
//!
//! Input is split on whitespace and handled token by token, so a pasted
//! block of links with blank lines and `#`-prefixed scratch notes comes
//! out as clean canonical URL lists.

use crate::url::matcher::extract_problem_info;

/// A recognized contest reference produced by a [`ContestMatcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestReference {
    /// Contest or gym id, kept as text
    pub contest_id: String,

    /// Canonical contest URL
    pub url: String,
}

/// Recognizer for bare contest URLs
///
/// Contest recognition lives with the host application; the extractor only
/// consumes the canonical URL of whatever the matcher recognizes.
pub trait ContestMatcher {
    /// Attempts to recognize a contest URL in a single token
    fn match_contest(&self, token: &str) -> Option<ContestReference>;
}

/// Problem and contest URLs recognized in a block of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedUrls {
    /// Canonical problem URLs, in input order
    pub problem_urls: Vec<String>,

    /// Canonical contest URLs, in input order
    pub contest_urls: Vec<String>,
}

/// Extracts Codeforces problem and contest URLs from text
///
/// Each whitespace-separated token is tried against the problem matcher
/// first, then against the given contest matcher; tokens that match
/// neither are dropped. Tokens starting with `#` are treated as comments
/// and skipped. Duplicates are preserved.
///
/// # Arguments
///
/// * `text` - Free-form text, typically pasted lines of links
/// * `contest_matcher` - Recognizer consulted for tokens that are not
///   problem URLs
///
/// # Examples
///
/// ```
/// use cf_scout::url::{extract_urls, ContestMatcher, ContestReference};
///
/// struct NoContests;
///
/// impl ContestMatcher for NoContests {
///     fn match_contest(&self, _token: &str) -> Option<ContestReference> {
///         None
///     }
/// }
///
/// let text = "codeforces.com/contest/1/problem/A\n#scratch\nnot-a-url";
/// let extracted = extract_urls(text, &NoContests);
/// assert_eq!(
///     extracted.problem_urls,
///     vec!["https://codeforces.com/contest/1/problem/A"]
/// );
/// assert!(extracted.contest_urls.is_empty());
/// ```
pub fn extract_urls<M: ContestMatcher>(text: &str, contest_matcher: &M) -> ExtractedUrls {
    let mut problem_urls = Vec::new();
    let mut contest_urls = Vec::new();

    for token in text.split_whitespace() {
        // The comment marker glues to its token; splitting has already
        // happened, so it never suppresses anything beyond that token
        if token.starts_with('#') {
            continue;
        }

        if let Some(info) = extract_problem_info(token) {
            problem_urls.push(info.url);
            continue;
        }

        if let Some(contest) = contest_matcher.match_contest(token) {
            contest_urls.push(contest.url);
        }
    }

    ExtractedUrls {
        problem_urls,
        contest_urls,
    }
}

/// Extracts all recognized URLs as one flat list, problems first
pub fn extract_all_urls<M: ContestMatcher>(text: &str, contest_matcher: &M) -> Vec<String> {
    let extracted = extract_urls(text, contest_matcher);
    let mut urls = extracted.problem_urls;
    urls.extend(extracted.contest_urls);
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    /// Recognizes bare contest URLs of the form `codeforces.com/contest/{id}`
    struct StubContestMatcher {
        pattern: Regex,
    }

    impl StubContestMatcher {
        fn new() -> Self {
            Self {
                pattern: Regex::new(r"codeforces\.com/contest/(\d+)").unwrap(),
            }
        }
    }

    impl ContestMatcher for StubContestMatcher {
        fn match_contest(&self, token: &str) -> Option<ContestReference> {
            let captures = self.pattern.captures(token)?;
            let contest_id = captures.get(1)?.as_str().to_string();
            let url = format!("https://codeforces.com/contest/{}", contest_id);
            Some(ContestReference { contest_id, url })
        }
    }

    #[test]
    fn test_mixed_text_splits_into_buckets() {
        let text = "https://codeforces.com/contest/1822/problem/B\n\n\
                    codeforces.com/contest/1900\n\
                    #todo-later\n\
                    just some words";
        let extracted = extract_urls(text, &StubContestMatcher::new());

        assert_eq!(
            extracted.problem_urls,
            vec!["https://codeforces.com/contest/1822/problem/B"]
        );
        assert_eq!(
            extracted.contest_urls,
            vec!["https://codeforces.com/contest/1900"]
        );
    }

    #[test]
    fn test_problem_match_takes_precedence_over_contest() {
        // The stub would happily match a problem URL's contest prefix, but
        // the problem matcher consumes the token first
        let text = "codeforces.com/contest/1822/problem/B";
        let extracted = extract_urls(text, &StubContestMatcher::new());

        assert_eq!(extracted.problem_urls.len(), 1);
        assert!(extracted.contest_urls.is_empty());
    }

    #[test]
    fn test_comment_tokens_skipped() {
        let text = "#codeforces.com/contest/1/problem/A codeforces.com/contest/2/problem/A";
        let extracted = extract_urls(text, &StubContestMatcher::new());

        assert_eq!(
            extracted.problem_urls,
            vec!["https://codeforces.com/contest/2/problem/A"]
        );
    }

    #[test]
    fn test_comment_only_suppresses_its_own_token() {
        let text = "#note codeforces.com/contest/3/problem/C";
        let extracted = extract_urls(text, &StubContestMatcher::new());

        assert_eq!(extracted.problem_urls.len(), 1);
    }

    #[test]
    fn test_unrecognized_tokens_dropped() {
        let text = "hello world https://atcoder.jp/contests/abc300";
        let extracted = extract_urls(text, &StubContestMatcher::new());

        assert!(extracted.problem_urls.is_empty());
        assert!(extracted.contest_urls.is_empty());
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let text = "codeforces.com/contest/1/problem/A\n\
                    codeforces.com/contest/2/problem/B\n\
                    codeforces.com/contest/1/problem/A";
        let extracted = extract_urls(text, &StubContestMatcher::new());

        assert_eq!(
            extracted.problem_urls,
            vec![
                "https://codeforces.com/contest/1/problem/A",
                "https://codeforces.com/contest/2/problem/B",
                "https://codeforces.com/contest/1/problem/A",
            ]
        );
    }

    #[test]
    fn test_problemset_urls_come_out_canonical() {
        let text = "www.codeforces.com/problemset/problem/118/A";
        let extracted = extract_urls(text, &StubContestMatcher::new());

        assert_eq!(
            extracted.problem_urls,
            vec!["https://codeforces.com/contest/118/problem/A"]
        );
    }

    #[test]
    fn test_empty_and_whitespace_only_text() {
        let matcher = StubContestMatcher::new();
        assert_eq!(extract_urls("", &matcher), ExtractedUrls::default());
        assert_eq!(extract_urls("  \n\t  ", &matcher), ExtractedUrls::default());
    }

    #[test]
    fn test_extract_all_orders_problems_before_contests() {
        let text = "codeforces.com/contest/1900\n\
                    codeforces.com/gym/104053/problem/A";
        let urls = extract_all_urls(text, &StubContestMatcher::new());

        assert_eq!(
            urls,
            vec![
                "https://codeforces.com/gym/104053/problem/A",
                "https://codeforces.com/contest/1900",
            ]
        );
    }
}
