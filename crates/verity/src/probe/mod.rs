//! Bounded network probes.
//!
//! Two catalog operations reach out over the network: `isUrlReachable` and
//! `isCountry`. Both are bounded (fixed timeout, capped redirects) and both
//! classify every failure into one of three categories rather than
//! propagating transport errors:
//!
//! - **server-side** - the server answered with a 5xx status
//! - **network** - no response at all (timeout, connection refused)
//! - **request** - the request could not even be constructed (bad URL)
//!
//! A classified failure is a value, not an `Err`: batch processing and HTTP
//! handlers serialize it into the response and move on.

mod country;
mod url;

pub use country::CountryLookup;
pub use url::UrlProbe;

use serde::Serialize;

/// Failure category for a probe that did not produce a usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureCategory {
    #[serde(rename = "server-side")]
    ServerSide,
    #[serde(rename = "network")]
    Network,
    #[serde(rename = "request")]
    RequestSetup,
}

/// A classified probe failure, serialized as
/// `{"type", "responseCode", "statusText", "message"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeFailure {
    #[serde(rename = "type")]
    pub category: FailureCategory,
    pub response_code: u16,
    pub status_text: String,
    pub message: String,
}

impl ProbeFailure {
    /// The server responded, but with a 5xx status.
    pub fn server_side(code: u16, status_text: impl Into<String>) -> Self {
        Self {
            category: FailureCategory::ServerSide,
            response_code: code,
            status_text: status_text.into(),
            message: "The server responded with some error".to_string(),
        }
    }

    /// The request was sent but no response came back.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            category: FailureCategory::Network,
            response_code: 503,
            status_text: "No response received".to_string(),
            message: message.into(),
        }
    }

    /// The request could not be set up at all.
    pub fn request_setup(message: impl Into<String>) -> Self {
        Self {
            category: FailureCategory::RequestSetup,
            response_code: 400,
            status_text: "Request setting error".to_string(),
            message: message.into(),
        }
    }
}

/// Outcome of a URL reachability probe: either the observed status line or a
/// classified failure. Serializes as `{"responseCode", "statusText"}` in the
/// reachable case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProbeReport {
    #[serde(rename_all = "camelCase")]
    Reachable {
        response_code: u16,
        status_text: String,
    },
    Failed(ProbeFailure),
}

/// Map a reqwest transport error onto the failure taxonomy.
pub(crate) fn classify_transport_error(err: &reqwest::Error) -> ProbeFailure {
    if err.is_timeout() || err.is_connect() || err.is_redirect() {
        ProbeFailure::network(
            "The request was made, but no response was received from the server.",
        )
    } else if err.is_builder() || err.is_request() {
        ProbeFailure::request_setup(err.to_string())
    } else {
        ProbeFailure::network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reachable_report_shape() {
        let report = ProbeReport::Reachable {
            response_code: 200,
            status_text: "OK".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"responseCode": 200, "statusText": "OK"})
        );
    }

    #[test]
    fn test_failure_shapes() {
        let failure = ProbeFailure::network(
            "The request was made, but no response was received from the server.",
        );
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["type"], "network");
        assert_eq!(value["responseCode"], 503);
        assert_eq!(value["statusText"], "No response received");

        let failure = ProbeFailure::server_side(502, "Bad Gateway");
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["type"], "server-side");
        assert_eq!(value["responseCode"], 502);

        let failure = ProbeFailure::request_setup("relative URL without a base");
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["type"], "request");
        assert_eq!(value["responseCode"], 400);
    }
}
