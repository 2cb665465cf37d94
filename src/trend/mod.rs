// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for working with trending topics.
//!
//! The trends endpoints all report the same row shape (a [`Trend`]) but disagree on the
//! envelope. The flat form carries a single `trends` array next to `as_of`; the bucketed form
//! used by current/daily/weekly keys several arrays by the timestamp of the bucket they were
//! observed in. [`parse_bucketed`] flattens the latter into a time-ordered `Vec<Trends>`.

use serde_json::Value;

use chrono::{DateTime, Utc};

use crate::common::dates::{parse_as_of, parse_epoch_seconds, parse_trend_date};
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};

/// A single trending topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Trend {
    /// The name of this topic, as it trended.
    pub name: String,
    /// A link to search results for this topic, when the endpoint provides one.
    pub url: Option<String>,
    /// The query that yields the topic in search, when the endpoint provides one.
    pub query: Option<String>,
}

/// A group of trending topics observed at a single point in time.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Trends {
    /// When the server assembled this report.
    pub as_of: DateTime<Utc>,
    /// When this group of topics was observed trending. Equal to `as_of` for endpoints that
    /// only report a single group.
    pub trend_at: DateTime<Utc>,
    /// The topics themselves, in the order the server ranked them.
    pub trends: Vec<Trend>,
}

impl FromJson for Trend {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "Trend received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, name);

        Ok(Trend {
            name: field(input, "name")?,
            url: field(input, "url")?,
            query: field(input, "query")?,
        })
    }
}

/// Read the `as_of` stamp, which is an epoch number, an epoch string, or a textual date
/// depending on the endpoint.
fn as_of_field(input: &Value) -> Result<DateTime<Utc>, error::Error> {
    field_present!(input, as_of);

    match input.get("as_of") {
        Some(Value::String(text)) => parse_as_of(text),
        Some(Value::Number(_)) => {
            let epoch: i64 = field(input, "as_of")?;
            parse_epoch_seconds(&epoch.to_string())
        }
        _ => Err(InvalidResponse(
            "unexpected as_of format",
            Some(input.to_string()),
        )),
    }
}

impl FromJson for Trends {
    /// Parses the flat envelope, where `trends` is a single array. The observation time of a
    /// flat report is the report time itself.
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "Trends received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, trends);

        let as_of = as_of_field(input)?;

        Ok(Trends {
            as_of,
            trend_at: as_of,
            trends: field(input, "trends")?,
        })
    }
}

/// Parse the bucketed envelope used by the current/daily/weekly endpoints, where `trends` is
/// an object keyed by bucket timestamp.
///
/// Each key parses according to its granularity (hourly, daily or weekly buckets carry
/// different precision), and the groups come back sorted by observation time, oldest first.
/// JSON objects carry no order, so the sort is what makes the result deterministic.
pub fn parse_bucketed(input: &Value) -> Result<Vec<Trends>, error::Error> {
    field_present!(input, trends);

    let as_of = as_of_field(input)?;
    let buckets = input
        .get("trends")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            InvalidResponse("expected an object of trend buckets", Some(input.to_string()))
        })?;

    let mut groups = Vec::with_capacity(buckets.len());
    for (stamp, list) in buckets {
        groups.push(Trends {
            as_of,
            trend_at: parse_trend_date(stamp)?,
            trends: Vec::<Trend>::from_json(list)?,
        });
    }

    groups.sort_by_key(|group| group.trend_at);

    Ok(groups)
}
