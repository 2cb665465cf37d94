// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A composite error type for errors that can occur while interacting with Twitter.

use std::error::Error as StdError;

/// A convenient alias to a Result containing this module's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A set of errors that can occur when parsing a Twitter response or talking to the transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field was present in the response but could not be parsed as its expected type.
    ///
    /// The enclosed values are a description of the mismatch and, when available, an excerpt of
    /// the offending payload. Note that this is distinct from a field being absent: optional
    /// fields that are missing from the payload parse as `None` without error.
    #[error("Invalid response received: {0} ({1:?})")]
    InvalidResponse(&'static str, Option<String>),
    /// A required field was absent or JSON-null in the response.
    #[error("Value missing from response: {0}")]
    MissingValue(&'static str),
    /// The response carried an error message from Twitter itself, in the v1
    /// `{"request": ..., "error": ...}` envelope.
    #[error("Error message from Twitter: {0}")]
    TwitterError(String),
    /// The response body was not valid JSON.
    #[error("Error parsing response JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An error passed through from the transport implementation.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}
