// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsers for the several timestamp encodings the v1 API hands out.
//!
//! Different endpoints format their dates differently, and a couple of them switch encodings
//! depending on context (trends' `as_of` is sometimes an epoch-seconds string, sometimes a
//! full RFC-822-style date). Each call site knows which shape it expects and asks for that
//! parser specifically; nothing in here guesses across formats. All results are normalized to
//! `DateTime<Utc>`, and all parsing is locale-invariant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{self, Error::InvalidResponse};

///The format used for `created_at` on users, statuses, lists and saved searches, and for the
///rate-limit `reset_time` field: "Wed Nov 25 06:29:45 +0000 2009". chrono's `%d` accepts the
///rate-limit endpoint's single-digit days as well.
pub const CREATED_AT: &str = "%a %b %d %H:%M:%S %z %Y";

///The format used by the legacy search endpoint and by non-numeric trends `as_of` values:
///"Mon, 23 Nov 2009 21:35:43 +0000".
pub const SEARCH_DATE: &str = "%a, %d %b %Y %H:%M:%S %z";

///Parse a timestamp in the given format into a UTC instant.
pub fn parse_date(input: &str, format: &'static str) -> Result<DateTime<Utc>, error::Error> {
    DateTime::parse_from_str(input.trim(), format)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| InvalidResponse("unexpected date format", Some(input.to_string())))
}

///Parse a pure-digit epoch-seconds string into a UTC instant.
pub fn parse_epoch_seconds(input: &str) -> Result<DateTime<Utc>, error::Error> {
    let seconds: i64 = input
        .trim()
        .parse()
        .map_err(|_| InvalidResponse("expected epoch seconds", Some(input.to_string())))?;

    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| InvalidResponse("epoch seconds out of range", Some(input.to_string())))
}

///Parse a trend bucket timestamp. The precision of the bucket key encodes its granularity, so
///the sub-parser is picked purely from the key's length: 19 characters is an hourly bucket
///("2009-11-01 12:00:00"), 16 is daily ("2009-11-01 12:00"), 10 is weekly ("2009-11-01"). The
///keys carry no zone; Twitter serves them as UTC.
pub fn parse_trend_date(input: &str) -> Result<DateTime<Utc>, error::Error> {
    let naive = match input.len() {
        19 => NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"),
        16 => NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M"),
        10 => NaiveDate::parse_from_str(input, "%Y-%m-%d").map(|d| d.and_hms(0, 0, 0)),
        _ => {
            return Err(InvalidResponse(
                "unexpected trend date format",
                Some(input.to_string()),
            ))
        }
    }
    .map_err(|_| InvalidResponse("unexpected trend date format", Some(input.to_string())))?;

    Ok(Utc.from_utc_datetime(&naive))
}

///Parse a trends `as_of` timestamp, which is an epoch-seconds string when purely numeric and a
///[`SEARCH_DATE`]-formatted date otherwise.
pub fn parse_as_of(input: &str) -> Result<DateTime<Utc>, error::Error> {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        parse_epoch_seconds(input)
    } else {
        parse_date(input, SEARCH_DATE)
    }
}
