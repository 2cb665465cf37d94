// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for pulling status (tweet) information from Twitter.
//!
//! The central type is [`Status`]. A status embeds its author as an optional
//! [`TwitterUser`][crate::user::TwitterUser], and a retweet embeds the original status whole
//! under `retweeted_status`, so the types in here are mutually recursive with the `user`
//! module's. Reply metadata is grouped under [`InReplyTo`], which only exists when the status
//! actually is a reply.

use serde_json::Value;

use chrono::{DateTime, Utc};

use crate::common::dates::{parse_date, CREATED_AT};
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};
use crate::user::TwitterUser;

/// Represents a single status update ("tweet").
///
/// Equality and hashing consider the ID alone, so a retweet and its original never compare
/// equal, and a status compares equal to itself regardless of which endpoint produced it. Use
/// [`Status::deep_eq`] to compare every field.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Status {
    /// Unique identifier for this status.
    pub id: u64,
    /// The text of the status.
    pub text: String,
    /// The utility used to post the status, as an HTML anchor or the literal `web`.
    ///
    /// The anchor markup is passed along exactly as the API hands it out.
    pub source: String,
    /// Indicates whether the text was truncated by the server.
    pub truncated: bool,
    /// Indicates whether the authenticated user has favorited this status.
    pub favorited: bool,
    /// The UTC timestamp from when the status was posted.
    pub created_at: DateTime<Utc>,
    /// The coordinates attached to the status, if geotagged.
    pub geo: Option<GeoLocation>,
    /// Metadata about the status this one replies to, if it is a reply.
    pub in_reply_to: Option<InReplyTo>,
    /// The user who posted this status. Absent in contexts where the author is implied, like a
    /// status embedded in its author's profile.
    pub user: Option<Box<TwitterUser>>,
    /// The original status, when this one is a retweet.
    pub retweeted_status: Option<Box<Status>>,
}

/// Reply metadata attached to a status.
///
/// The wire format marks "not a reply" with `-1` sentinels rather than omitting the fields.
/// That convention stops at the mapping layer: a `Status` either has this struct or it doesn't.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct InReplyTo {
    /// The ID of the status being replied to.
    pub status_id: u64,
    /// The ID of the user being replied to, when reported.
    pub user_id: Option<u64>,
    /// The screen name of the user being replied to, when reported.
    pub screen_name: Option<String>,
}

/// A latitude/longitude pair attached to a geotagged status.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GeoLocation {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl FromJson for GeoLocation {
    /// Coordinates arrive in one of two shapes depending on the endpoint: a two-element JSON
    /// array, or the bracketed string `"[lat,long]"`. Both parse here; anything else is a
    /// malformed response.
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        // geotagged statuses wrap the pair in {"type": "Point", "coordinates": [...]}
        let input = input.get("coordinates").unwrap_or(input);

        match input {
            Value::Array(_) => {
                let pair = Vec::<f64>::from_json(input)?;
                match *pair.as_slice() {
                    [latitude, longitude] => Ok(GeoLocation {
                        latitude,
                        longitude,
                    }),
                    _ => Err(InvalidResponse(
                        "expected exactly two coordinates",
                        Some(input.to_string()),
                    )),
                }
            }
            Value::String(text) => {
                let inner = text
                    .trim()
                    .strip_prefix('[')
                    .and_then(|t| t.strip_suffix(']'))
                    .ok_or_else(|| {
                        InvalidResponse("expected bracketed coordinates", Some(text.clone()))
                    })?;

                let mut parts = inner.splitn(2, ',');
                let parse = |part: Option<&str>| -> Result<f64, error::Error> {
                    part.and_then(|p| p.trim().parse().ok()).ok_or_else(|| {
                        InvalidResponse("malformed coordinate pair", Some(text.clone()))
                    })
                };

                Ok(GeoLocation {
                    latitude: parse(parts.next())?,
                    longitude: parse(parts.next())?,
                })
            }
            _ => Err(InvalidResponse(
                "GeoLocation received json that wasn't coordinates",
                Some(input.to_string()),
            )),
        }
    }
}

impl FromJson for InReplyTo {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        // only reached when the caller already checked the status id sentinel
        field_present!(input, in_reply_to_status_id);

        // the user id carries its own -1 sentinel
        let user_id = match field::<Option<i64>>(input, "in_reply_to_user_id")? {
            Some(id) if id >= 0 => Some(id as u64),
            _ => None,
        };

        Ok(InReplyTo {
            status_id: field(input, "in_reply_to_status_id")?,
            user_id,
            screen_name: field(input, "in_reply_to_screen_name")?,
        })
    }
}

impl FromJson for Status {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "Status received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, text);
        field_present!(input, created_at);

        let created_str: String = field(input, "created_at")?;

        // a status is a reply iff the reply id is present and non-negative
        let in_reply_to = match field::<Option<i64>>(input, "in_reply_to_status_id")? {
            Some(id) if id >= 0 => Some(InReplyTo::from_json(input)?),
            _ => None,
        };

        Ok(Status {
            id: field(input, "id")?,
            text: field(input, "text")?,
            source: field::<Option<String>>(input, "source")?.unwrap_or_default(),
            truncated: field::<Option<bool>>(input, "truncated")?.unwrap_or(false),
            favorited: field::<Option<bool>>(input, "favorited")?.unwrap_or(false),
            created_at: parse_date(&created_str, CREATED_AT)?,
            geo: field(input, "geo")?,
            in_reply_to,
            user: field(input, "user")?,
            retweeted_status: field(input, "retweeted_status")?,
        })
    }
}

impl PartialEq for Status {
    /// Statuses are equal when they have the same ID. Use [`Status::deep_eq`] for a full
    /// structural comparison.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Status {}

impl std::hash::Hash for Status {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Status {
    /// Whether this status is a retweet of another.
    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// Whether this status is a reply to another.
    pub fn is_reply(&self) -> bool {
        self.in_reply_to.is_some()
    }

    /// Compare every field of two statuses, including any embedded user and retweeted status.
    pub fn deep_eq(&self, other: &Status) -> bool {
        let user_eq = match (&self.user, &other.user) {
            (Some(a), Some(b)) => a.deep_eq(b),
            (None, None) => true,
            _ => false,
        };
        let retweet_eq = match (&self.retweeted_status, &other.retweeted_status) {
            (Some(a), Some(b)) => a.deep_eq(b),
            (None, None) => true,
            _ => false,
        };

        self.id == other.id
            && self.text == other.text
            && self.source == other.source
            && self.truncated == other.truncated
            && self.favorited == other.favorited
            && self.created_at == other.created_at
            && self.geo == other.geo
            && self.in_reply_to == other.in_reply_to
            && user_eq
            && retweet_eq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_status() {
        let status = Status::from_str(
            r#"{
                "id": 6000554383,
                "text": "test",
                "source": "<a href=\"http://www.tweetdeck.com/\" rel=\"nofollow\">tweetdeck</a>",
                "truncated": false,
                "favorited": "false",
                "created_at": "Wed Nov 25 06:29:45 +0000 2009",
                "in_reply_to_status_id": -1,
                "in_reply_to_user_id": -1,
                "geo": null
            }"#,
        )
        .unwrap();

        assert_eq!(status.id, 6000554383);
        assert_eq!(status.text, "test");
        assert!(status.source.contains("tweetdeck"));
        assert!(!status.favorited);
        assert!(status.in_reply_to.is_none());
        assert!(!status.is_reply());
        assert!(!status.is_retweet());
        assert!(status.geo.is_none());
        assert!(status.user.is_none());
    }

    #[test]
    fn reply_sentinel() {
        let reply = Status::from_str(
            r#"{
                "id": 6000554384,
                "text": "@songbird2 hi",
                "created_at": "Wed Nov 25 06:30:45 +0000 2009",
                "in_reply_to_status_id": "6000554383",
                "in_reply_to_user_id": 6377362,
                "in_reply_to_screen_name": "songbird2"
            }"#,
        )
        .unwrap();

        let in_reply_to = reply.in_reply_to.expect("reply metadata");
        assert_eq!(in_reply_to.status_id, 6000554383);
        assert_eq!(in_reply_to.user_id, Some(6377362));
        assert_eq!(in_reply_to.screen_name.as_deref(), Some("songbird2"));
    }

    #[test]
    fn geo_string_form() {
        let geo = GeoLocation::from_str(r#""[37.78029, -122.39697]""#).unwrap();
        assert_eq!(geo.latitude, 37.78029);
        assert_eq!(geo.longitude, -122.39697);

        assert!(GeoLocation::from_str(r#""37.78029, -122.39697""#).is_err());
        assert!(GeoLocation::from_str(r#""[37.78029]""#).is_err());
        assert!(GeoLocation::from_str(r#""[north, west]""#).is_err());
    }

    #[test]
    fn geo_array_and_point_forms() {
        let geo = GeoLocation::from_str(r#"[37.78029, -122.39697]"#).unwrap();
        assert_eq!(geo.latitude, 37.78029);

        let point =
            GeoLocation::from_str(r#"{"type": "Point", "coordinates": [37.78029, -122.39697]}"#)
                .unwrap();
        assert_eq!(point, geo);

        assert!(GeoLocation::from_str(r#"[1.0, 2.0, 3.0]"#).is_err());
    }

    #[test]
    fn retweet_embeds_the_original() {
        let status = Status::from_str(
            r#"{
                "id": 6011111111,
                "text": "RT @songbird: test",
                "created_at": "Wed Nov 25 07:29:45 +0000 2009",
                "retweeted_status": {
                    "id": 6000554383,
                    "text": "test",
                    "created_at": "Wed Nov 25 06:29:45 +0000 2009"
                }
            }"#,
        )
        .unwrap();

        assert!(status.is_retweet());
        assert_eq!(status.retweeted_status.as_ref().unwrap().id, 6000554383);
    }

    #[test]
    fn identity_is_by_id() {
        let a = Status::from_str(
            r#"{"id": 1, "text": "one", "created_at": "Wed Nov 25 06:29:45 +0000 2009"}"#,
        )
        .unwrap();
        let mut b = a.clone();
        b.text = "edited".to_string();

        assert_eq!(a, b);
        assert!(!a.deep_eq(&b));
    }

    #[test]
    fn malformed_date_aborts_the_status() {
        let result = Status::from_str(r#"{"id": 1, "text": "x", "created_at": "tomorrow"}"#);
        assert!(matches!(
            result,
            Err(crate::error::Error::InvalidResponse(_, _))
        ));
    }
}
