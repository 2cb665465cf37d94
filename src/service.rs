// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Methods to inquire about the Twitter service itself.
//!
//! The lone type here is `RateLimitStatus`, the server-reported quota counters for the current
//! authentication context. It can be built two ways: from the JSON body of the
//! `account/rate_limit_status` endpoint, or opportunistically from the `X-RateLimit-*` headers
//! that ride along with most responses.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::common::dates::{parse_date, CREATED_AT};
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};

///The rate-limit counters reported by Twitter for the current authentication context.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RateLimitStatus {
    ///The number of requests allowed in the current hourly window.
    pub hourly_limit: i32,
    ///The number of requests left in the current hourly window.
    pub remaining_hits: i32,
    ///The number of seconds until the window resets.
    ///
    ///When built from response headers this is computed against the local clock, so treat it as
    ///an estimate rather than an exact countdown.
    pub reset_time_in_seconds: i32,
    ///The UTC instant at which the window resets.
    pub reset_time: DateTime<Utc>,
}

impl FromJson for RateLimitStatus {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "RateLimitStatus received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, hourly_limit);
        field_present!(input, remaining_hits);
        field_present!(input, reset_time_in_seconds);
        field_present!(input, reset_time);

        let reset_str: String = field(input, "reset_time")?;

        Ok(RateLimitStatus {
            hourly_limit: field(input, "hourly_limit")?,
            remaining_hits: field(input, "remaining_hits")?,
            reset_time_in_seconds: field(input, "reset_time_in_seconds")?,
            reset_time: parse_date(&reset_str, CREATED_AT)?,
        })
    }
}

impl RateLimitStatus {
    ///Read rate-limit counters out of the `X-RateLimit-*` response headers.
    ///
    ///Not every response carries these headers, so a missing (or unreadable) header means "no
    ///rate limit information available" rather than an error. The reset header is an
    ///epoch-seconds value; the seconds-until-reset field is derived from it and the current
    ///clock, since the headers don't carry it directly.
    pub fn from_headers(headers: &Headers) -> Option<RateLimitStatus> {
        let header_int = |name: &str| -> Option<i64> {
            headers.get(name)?.to_str().ok()?.trim().parse().ok()
        };

        let hourly_limit = header_int("X-RateLimit-Limit")?;
        let remaining_hits = header_int("X-RateLimit-Remaining")?;
        let reset_epoch = header_int("X-RateLimit-Reset")?;

        let reset_time = Utc.timestamp_opt(reset_epoch, 0).single()?;
        let reset_time_in_seconds = (reset_epoch - Utc::now().timestamp()) as i32;

        Some(RateLimitStatus {
            hourly_limit: hourly_limit as i32,
            remaining_hits: remaining_hits as i32,
            reset_time_in_seconds,
            reset_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;

    fn rate_headers(limit: &str, remaining: &str, reset: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert("X-RateLimit-Limit", HeaderValue::from_str(limit).unwrap());
        headers.insert(
            "X-RateLimit-Remaining",
            HeaderValue::from_str(remaining).unwrap(),
        );
        headers.insert("X-RateLimit-Reset", HeaderValue::from_str(reset).unwrap());
        headers
    }

    #[test]
    fn from_headers_computes_seconds_until_reset() {
        let reset = Utc::now().timestamp() + 60;
        let status =
            RateLimitStatus::from_headers(&rate_headers("150", "148", &reset.to_string()))
                .unwrap();

        assert_eq!(status.hourly_limit, 150);
        assert_eq!(status.remaining_hits, 148);
        assert_eq!(status.reset_time.timestamp(), reset);
        assert!((59..=61).contains(&status.reset_time_in_seconds));
    }

    #[test]
    fn missing_header_yields_none() {
        let mut headers = rate_headers("150", "148", "1259723400");
        headers.remove("X-RateLimit-Remaining");

        assert!(RateLimitStatus::from_headers(&headers).is_none());
        assert!(RateLimitStatus::from_headers(&Headers::new()).is_none());
    }

    #[test]
    fn from_json_body() {
        let status = RateLimitStatus::from_str(
            r#"{
                "hourly_limit": 150,
                "remaining_hits": 74,
                "reset_time_in_seconds": 1259702445,
                "reset_time": "Wed Nov 25 06:29:45 +0000 2009"
            }"#,
        )
        .unwrap();

        assert_eq!(status.hourly_limit, 150);
        assert_eq!(status.remaining_hits, 74);
        assert_eq!(status.reset_time_in_seconds, 1259702445);
        assert_eq!(status.reset_time.timestamp(), 1259130585);
    }

    #[test]
    fn missing_body_field_is_an_error() {
        let result = RateLimitStatus::from_str(r#"{"hourly_limit": 150}"#);
        assert!(matches!(
            result,
            Err(crate::error::Error::MissingValue("remaining_hits"))
        ));
    }
}
