// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam between this crate's mapping layer and whatever performs the HTTP round-trips.
//!
//! Everything network-shaped hides behind the [`Transport`] trait: connection pooling, TLS,
//! Basic or OAuth-signed authentication, retries. An implementation takes a URL and a
//! [`ParamList`] and hands back a fully materialized [`RawResponse`]; nothing in this crate
//! reads a socket or inspects a status line.

use serde_json::Value;

use crate::common::{Headers, ParamList};
use crate::error;
use crate::service::RateLimitStatus;

/// A fully materialized HTTP response: the headers and the complete body text.
#[derive(Debug)]
pub struct RawResponse {
    /// The response headers.
    pub headers: Headers,
    /// The response body, decoded to text.
    pub body: String,
}

impl RawResponse {
    /// The body as text.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON.
    pub fn as_json(&self) -> Result<Value, error::Error> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Look up a header by name. Header names compare case-insensitively; values that aren't
    /// valid text read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Read the rate-limit counters from this response's headers, if it carried them.
    pub fn rate_limit_status(&self) -> Option<RateLimitStatus> {
        RateLimitStatus::from_headers(&self.headers)
    }
}

/// An HTTP collaborator that can perform API round-trips.
///
/// The trait is object-safe so a client can hold `Box<dyn Transport>` and swap implementations
/// freely; tests substitute a canned-response fake the same way.
pub trait Transport {
    /// Perform a GET request against the given URL, appending the given parameters to the
    /// query string.
    fn get(&self, url: &str, params: &ParamList) -> Result<RawResponse, error::Error>;

    /// Perform a POST request against the given URL, sending the given parameters as an
    /// `application/x-www-form-urlencoded` body.
    fn post(&self, url: &str, params: &ParamList) -> Result<RawResponse, error::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("X-RateLimit-Limit", HeaderValue::from_static("150"));

        let resp = RawResponse {
            headers,
            body: "{}".to_string(),
        };

        assert_eq!(resp.header("x-ratelimit-limit"), Some("150"));
        assert_eq!(resp.header("X-RATELIMIT-LIMIT"), Some("150"));
        assert_eq!(resp.header("X-RateLimit-Remaining"), None);
    }

    #[test]
    fn body_parses_as_json() {
        let resp = RawResponse {
            headers: Headers::new(),
            body: r#"{"ok": true}"#.to_string(),
        };

        assert_eq!(resp.as_json().unwrap()["ok"], true);
        assert_eq!(resp.as_str(), r#"{"ok": true}"#);
    }
}
