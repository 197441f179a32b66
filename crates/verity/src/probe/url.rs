//! URL reachability probe.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::error::{Result, VerityError};

use super::{classify_transport_error, ProbeFailure, ProbeReport};

/// Probe timeout. A probe resolves to a classified failure rather than hang
/// past this.
const TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum redirects to follow before classifying as unreachable.
const MAX_REDIRECTS: usize = 5;

/// Performs bounded GET probes against caller-supplied URLs.
pub struct UrlProbe {
    client: Client,
}

impl UrlProbe {
    /// Create a probe with the default timeout and redirect cap.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| VerityError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Probe `url` and report what happened.
    ///
    /// Any status below 500 counts as reachable and is reported as-is;
    /// 5xx statuses, transport failures, and malformed URLs come back as
    /// classified failures. This never returns an `Err`.
    pub fn check(&self, url: &str) -> ProbeReport {
        match self.client.get(url).send() {
            Ok(response) => {
                let status = response.status();
                let status_text = status.canonical_reason().unwrap_or("").to_string();
                if status.as_u16() < 500 {
                    ProbeReport::Reachable {
                        response_code: status.as_u16(),
                        status_text,
                    }
                } else {
                    ProbeReport::Failed(ProbeFailure::server_side(status.as_u16(), status_text))
                }
            }
            Err(err) => ProbeReport::Failed(classify_transport_error(&err)),
        }
    }
}
