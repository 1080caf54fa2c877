//! Guidance pipeline types — failure records and event payloads.
//!
//! Everything here crosses the webview boundary as camelCase JSON.

use serde::{Deserialize, Serialize};

/// Rate-limit telemetry from a rejected response. Each header is optional;
/// absent headers stay `None` rather than defaulting to an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitInfo {
    pub limit: Option<String>,
    pub remaining: Option<String>,
    pub reset: Option<String>,
}

impl RateLimitInfo {
    /// Extract the `X-Ratelimit-*` trio from a response header map.
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        fn header_value(headers: &reqwest::header::HeaderMap, name: &str) -> Option<String> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
        }
        Self {
            limit: header_value(headers, "x-ratelimit-limit"),
            remaining: header_value(headers, "x-ratelimit-remaining"),
            reset: header_value(headers, "x-ratelimit-reset"),
        }
    }
}

/// Structured record for a request the endpoint rejected (status outside
/// the success range). Mixes the HTTP metadata with the user-facing message
/// so the frontend can branch without exception matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceFailure {
    pub status: u16,
    pub body: String,
    pub headers: RateLimitInfo,
    pub message: String,
}

impl GuidanceFailure {
    pub fn new(status: u16, body: String, headers: RateLimitInfo) -> Self {
        Self {
            message: format!("Request failed with status code {status}"),
            status,
            body,
            headers,
        }
    }
}

/// Payload of the `guidance-chunk` event: the newly decoded fragment plus
/// the full accumulated text, so listeners never have to re-join chunks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceChunk {
    pub delta: String,
    pub text: String,
}

/// Snapshot of the accumulator and loading flag, for windows that attach
/// after a generation has started.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceSnapshot {
    pub text: String,
    pub loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    #[test]
    fn extracts_present_headers_and_leaves_absent_ones_unset() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));

        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.remaining.as_deref(), Some("0"));
        assert_eq!(info.limit, None);
        assert_eq!(info.reset, None);
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Ratelimit-Limit", HeaderValue::from_static("10"));
        headers.insert("X-Ratelimit-Reset", HeaderValue::from_static("86400"));

        let info = RateLimitInfo::from_headers(&headers);
        assert_eq!(info.limit.as_deref(), Some("10"));
        assert_eq!(info.reset.as_deref(), Some("86400"));
    }

    #[test]
    fn failure_message_names_the_status_code() {
        let failure = GuidanceFailure::new(429, "slow down".to_string(), RateLimitInfo::default());
        assert_eq!(failure.message, "Request failed with status code 429");
        assert_eq!(failure.status, 429);
        assert_eq!(failure.body, "slow down");
    }

    #[test]
    fn failure_serializes_camel_case() {
        let failure = GuidanceFailure::new(500, String::new(), RateLimitInfo::default());
        let json = serde_json::to_value(&failure).unwrap();
        assert!(json.get("status").is_some());
        assert!(json.get("headers").is_some());
        assert!(json["headers"].get("remaining").is_some());
    }
}
