//! Codeforces API wire types
//!
//! Only the `contest.standings` method is consumed, and of its payload only
//! the problem list. Standings rows ride along regardless, so the request
//! asks for a single row to keep responses small.

use crate::url::ProblemReference;
use serde::Deserialize;

/// Envelope every Codeforces API response arrives in
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// `"OK"` on success; anything else is a rejection
    pub status: String,

    /// Human-readable rejection reason, present on failures
    pub comment: Option<String>,

    /// Payload, present when `status` is `"OK"`
    pub result: Option<StandingsResult>,
}

/// Payload of a `contest.standings` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResult {
    /// Problems of the contest, in index order
    pub problems: Vec<ApiProblem>,
}

/// A problem entry as the API reports it
///
/// Matching against a reference is by `index` alone; the other fields feed
/// the assembled record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProblem {
    /// Contest id, absent in some listings
    pub contest_id: Option<i64>,

    /// Problem index within the contest
    pub index: String,

    /// Problem name
    pub name: String,

    /// Tag list, absent for some gym problems
    #[serde(default)]
    pub tags: Vec<String>,

    /// Difficulty rating, absent for unrated problems
    pub rating: Option<u32>,
}

/// Builds the `contest.standings` request URL for a reference
///
/// Only the first standings row is requested. Gym contests need the
/// `gym=true` flag so the id resolves in the gym namespace.
pub fn standings_url(base_url: &str, reference: &ProblemReference) -> String {
    let mut url = format!(
        "{}/contest.standings?contestId={}&from=1&count=1",
        base_url.trim_end_matches('/'),
        reference.contest_id
    );

    if reference.is_gym() {
        url.push_str("&gym=true");
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::UrlKind;

    #[test]
    fn test_standings_url_for_contest() {
        let reference = ProblemReference::new(UrlKind::Contest, "1822", "B");
        assert_eq!(
            standings_url("https://codeforces.com/api", &reference),
            "https://codeforces.com/api/contest.standings?contestId=1822&from=1&count=1"
        );
    }

    #[test]
    fn test_standings_url_for_gym_adds_flag() {
        let reference = ProblemReference::new(UrlKind::Gym, "104053", "A");
        assert_eq!(
            standings_url("https://codeforces.com/api", &reference),
            "https://codeforces.com/api/contest.standings?contestId=104053&from=1&count=1&gym=true"
        );
    }

    #[test]
    fn test_standings_url_trims_trailing_slash() {
        let reference = ProblemReference::new(UrlKind::Contest, "1", "A");
        assert_eq!(
            standings_url("http://127.0.0.1:8080/", &reference),
            "http://127.0.0.1:8080/contest.standings?contestId=1&from=1&count=1"
        );
    }

    #[test]
    fn test_decode_ok_envelope() {
        let body = r#"{
            "status": "OK",
            "result": {
                "contest": {"id": 1822, "name": "Codeforces Round 867 (Div. 3)"},
                "problems": [
                    {
                        "contestId": 1822,
                        "index": "A",
                        "name": "TubeTube Feed",
                        "type": "PROGRAMMING",
                        "tags": ["brute force", "implementation"],
                        "rating": 800
                    }
                ],
                "rows": []
            }
        }"#;

        let decoded: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.status, "OK");
        assert!(decoded.comment.is_none());

        let result = decoded.result.unwrap();
        assert_eq!(result.problems.len(), 1);
        assert_eq!(result.problems[0].index, "A");
        assert_eq!(result.problems[0].name, "TubeTube Feed");
        assert_eq!(result.problems[0].rating, Some(800));
    }

    #[test]
    fn test_decode_failed_envelope() {
        let body = r#"{
            "status": "FAILED",
            "comment": "contestId: Contest with id 999999 not found"
        }"#;

        let decoded: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.status, "FAILED");
        assert!(decoded.result.is_none());
        assert_eq!(
            decoded.comment.as_deref(),
            Some("contestId: Contest with id 999999 not found")
        );
    }

    #[test]
    fn test_decode_problem_with_sparse_fields() {
        let body = r#"{"index": "B", "name": "Karina and Array"}"#;

        let problem: ApiProblem = serde_json::from_str(body).unwrap();
        assert_eq!(problem.contest_id, None);
        assert!(problem.tags.is_empty());
        assert_eq!(problem.rating, None);
    }
}
