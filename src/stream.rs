// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The message types delivered over a streaming connection.
//!
//! The streaming API interleaves statuses with control notices on the same wire, one JSON
//! document per line, with blank lines as keep-alives. [`StreamMessage`] is the dispatch over
//! everything a line can hold. Connection handling itself belongs to the transport; this module
//! only maps the lines.

use serde_json::Value;

use crate::common::*;
use crate::error::{self, Error::InvalidResponse};
use crate::status::Status;

/// A single message from a streaming connection.
#[derive(Debug)]
pub enum StreamMessage {
    /// A blank keep-alive line, sent to hold the connection open during quiet periods.
    Ping,
    /// A new status.
    Status(Box<Status>),
    /// A notice that a status was deleted and should be discarded from any local storage.
    Delete {
        /// ID of the deleted status.
        status_id: u64,
        /// ID of the user who deleted it.
        user_id: u64,
    },
    /// A notice that the stream was throttled: `track` statuses matching the connection's
    /// filter were withheld since the connection opened.
    Limit {
        /// Running count of withheld statuses.
        track: u64,
    },
    /// A message this crate doesn't recognize, passed along raw rather than dropped. The
    /// streaming API grows new notice types without versioning.
    Unknown(Value),
}

impl FromJson for StreamMessage {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if let Some(del) = input.get("delete") {
            let status = del.get("status").ok_or_else(|| {
                InvalidResponse("delete notice without a status", Some(input.to_string()))
            })?;

            Ok(StreamMessage::Delete {
                status_id: field(status, "id")?,
                user_id: field(status, "user_id")?,
            })
        } else if let Some(limit) = input.get("limit") {
            Ok(StreamMessage::Limit {
                track: field(limit, "track")?,
            })
        } else if input.get("text").is_some() && input.get("id").is_some() {
            Ok(StreamMessage::Status(Box::new(Status::from_json(input)?)))
        } else {
            Ok(StreamMessage::Unknown(input.clone()))
        }
    }

    fn from_str(input: &str) -> Result<Self, error::Error> {
        if input.trim().is_empty() {
            Ok(StreamMessage::Ping)
        } else {
            let json = serde_json::from_str(input)?;
            StreamMessage::from_json(&json)
        }
    }
}
