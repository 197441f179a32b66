//! Country-name lookup against an external service.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, VerityError};

use super::{classify_transport_error, ProbeFailure};

/// Default lookup endpoint. The service answers 404 for names it does not
/// recognize; an in-body `error` flag covers the rest.
const DEFAULT_URL: &str = "https://countriesnow.space/api/v0.1/countries/currency";

const TIMEOUT: Duration = Duration::from_secs(5);

/// Body shape of the lookup reply; only the error flag matters.
#[derive(Debug, Deserialize)]
struct LookupReply {
    #[serde(default)]
    error: bool,
}

/// Validates country names by delegating to an external lookup service.
pub struct CountryLookup {
    client: Client,
    url: String,
}

impl CountryLookup {
    /// Create a lookup client against the default service.
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_URL)
    }

    /// Create a lookup client against a custom endpoint (used by tests).
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| VerityError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Check whether `name` is a recognized country.
    ///
    /// A 404 from the service means "not a country" and resolves to
    /// `Ok(false)`; genuine service failures come back as classified
    /// [`ProbeFailure`]s.
    pub fn lookup(&self, name: &str) -> std::result::Result<bool, ProbeFailure> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "country": name }))
            .send()
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("").to_string();
            return Err(ProbeFailure::server_side(status.as_u16(), status_text));
        }

        let reply: LookupReply = response.json().map_err(|_| {
            ProbeFailure::server_side(status.as_u16(), "Malformed response body")
        })?;
        Ok(!reply.error)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use crate::probe::FailureCategory;

    /// Answer exactly one request on a loopback port with a canned response,
    /// then shut down. Returns the URL to point the lookup client at.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_lookup_construction() {
        assert!(CountryLookup::new().is_ok());
        assert!(CountryLookup::with_url("http://localhost:1/lookup").is_ok());
    }

    #[test]
    fn test_reply_error_flag_defaults_false() {
        let reply: LookupReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.error);
        let reply: LookupReply = serde_json::from_str(r#"{"error": true}"#).unwrap();
        assert!(reply.error);
    }

    #[test]
    fn test_404_means_not_a_country() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found",
            r#"{"error": true, "msg": "country not found"}"#,
        );
        let lookup = CountryLookup::with_url(url).unwrap();
        assert_eq!(lookup.lookup("Narnia"), Ok(false));
    }

    #[test]
    fn test_success_inverts_the_error_flag() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"error": false, "data": {}}"#);
        let lookup = CountryLookup::with_url(url).unwrap();
        assert_eq!(lookup.lookup("Canada"), Ok(true));

        let url = serve_once("HTTP/1.1 200 OK", r#"{"error": true}"#);
        let lookup = CountryLookup::with_url(url).unwrap();
        assert_eq!(lookup.lookup("Atlantis"), Ok(false));
    }

    #[test]
    fn test_5xx_classifies_as_server_side() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "");
        let lookup = CountryLookup::with_url(url).unwrap();
        let failure = lookup.lookup("Canada").unwrap_err();
        assert_eq!(failure.category, FailureCategory::ServerSide);
        assert_eq!(failure.response_code, 500);
    }
}
