// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for pulling user information from Twitter.
//!
//! ## Types
//!
//! - `UserID`: used as a generic input to many functions, this enum allows you to refer to a user
//!   by a numeric ID or by their screen name.
//! - `TwitterUser`/`UserProfile`: returned by many functions in this crate, these types
//!   (`TwitterUser` contains the other) describe the content of a user's account and the
//!   display settings of their profile page.
//! - `Relationship`/`RelationSource`/`RelationTarget`: returned by the friendship lookup,
//!   these types (`Relationship` contains the other two) show the ways two accounts relate to
//!   each other.

use serde_json::Value;

use chrono::{DateTime, Utc};

use crate::common::dates::{parse_date, CREATED_AT};
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};
use crate::status::Status;

/// Convenience enum to generalize between referring to an account by numeric ID or by screen
/// name.
///
/// Many API calls ask for a user either by screen name (e.g. `rustlang`) or by the numeric ID
/// assigned to the account (e.g. `165262228`). These calls are abstracted around this enum, and
/// can take any type that converts into it. This enum has `From` implementations for `u64`,
/// `&str` and `String`, so a function with a parameter of type `impl Into<UserID>` can be
/// called with any of those directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserID {
    /// Referring via the account's numeric ID.
    ID(u64),
    /// Referring via the account's screen name.
    ScreenName(String),
}

impl From<u64> for UserID {
    fn from(id: u64) -> UserID {
        UserID::ID(id)
    }
}

impl From<&str> for UserID {
    fn from(name: &str) -> UserID {
        UserID::ScreenName(name.to_string())
    }
}

impl From<&String> for UserID {
    fn from(name: &String) -> UserID {
        UserID::ScreenName(name.clone())
    }
}

impl From<String> for UserID {
    fn from(name: String) -> UserID {
        UserID::ScreenName(name)
    }
}

/// Represents a Twitter user.
///
/// Field-level documentation is mostly ripped wholesale from [Twitter's user
/// documentation][api-doc].
///
/// [api-doc]: https://dev.twitter.com/overview/api/users
///
/// The fields present in this struct can be divided up into a few areas: account information like
/// its ID, name and screen name, a set of statistics counters, and the profile styling grouped
/// under [`UserProfile`]. When a user is returned from a status-bearing endpoint, their most
/// recent status rides along in `status`.
///
/// Two `TwitterUser`s compare equal when they refer to the same account, i.e. equality and
/// hashing look at the ID alone. To compare every field, use [`TwitterUser::deep_eq`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct TwitterUser {
    /// Unique identifier for this user.
    pub id: u64,
    /// The user-defined name of the account. Not necessarily a person's name, and not unique.
    pub name: String,
    /// The screen name or handle identifying this user, without the preceding `@`.
    ///
    /// Screen names are unique per-user, but can be changed.
    pub screen_name: String,
    /// The user-defined location field of their profile. Free-form text, not necessarily a
    /// parseable or even real location.
    pub location: Option<String>,
    /// The user-defined string describing their account.
    pub description: Option<String>,
    /// A URL provided by the user in association with their profile.
    pub url: Option<String>,
    /// Indicates whether the user has protected their tweets from the public.
    pub protected: bool,
    /// The number of followers this account has.
    pub followers_count: i32,
    /// The number of users this account follows.
    pub friends_count: i32,
    /// The number of tweets this user has favorited.
    pub favourites_count: i32,
    /// The number of tweets (including retweets) posted by this user.
    pub statuses_count: i32,
    /// The UTC timestamp for when this account was created.
    pub created_at: DateTime<Utc>,
    /// The offset from GMT/UTC the user has selected for their account, in seconds, if set.
    pub utc_offset: Option<i32>,
    /// The name of the time zone the user has selected for their account, if set.
    pub time_zone: Option<String>,
    /// Indicates whether the user has enabled the possibility of geotagging their tweets.
    pub geo_enabled: bool,
    /// Indicates whether the account has been verified by Twitter.
    pub verified: bool,
    /// The colors and images the user selected for their profile page.
    pub profile: UserProfile,
    /// The user's most recent status, when the endpoint includes it. Boxed because `Status`
    /// embeds its author right back.
    pub status: Option<Box<Status>>,
}

/// The display styling of a user's profile page.
///
/// These fields always travel together on the wire, so they're grouped away from the account
/// information proper.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UserProfile {
    /// A URL pointing to the user's avatar image.
    pub image_url: String,
    /// A URL pointing to the background image chosen for the profile page, if any.
    pub background_image_url: Option<String>,
    /// Indicates whether the background image is tiled when displayed.
    pub background_tile: bool,
    /// The background color chosen for the profile page, as a hex string without the `#`.
    pub background_color: String,
    /// The color of text in the profile page.
    pub text_color: String,
    /// The color of links in the profile page.
    pub link_color: String,
    /// The fill color of the profile sidebar.
    pub sidebar_fill_color: String,
    /// The border color of the profile sidebar.
    pub sidebar_border_color: String,
}

impl FromJson for UserProfile {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        field_present!(input, profile_image_url);

        Ok(UserProfile {
            image_url: field(input, "profile_image_url")?,
            background_image_url: field(input, "profile_background_image_url")?,
            // the tile flag is one of the spots where the API quotes its booleans
            background_tile: field::<Option<bool>>(input, "profile_background_tile")?
                .unwrap_or(false),
            background_color: field(input, "profile_background_color")?,
            text_color: field(input, "profile_text_color")?,
            link_color: field(input, "profile_link_color")?,
            sidebar_fill_color: field(input, "profile_sidebar_fill_color")?,
            sidebar_border_color: field(input, "profile_sidebar_border_color")?,
        })
    }
}

impl FromJson for TwitterUser {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "TwitterUser received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, name);
        field_present!(input, screen_name);
        field_present!(input, created_at);

        let created_str: String = field(input, "created_at")?;

        Ok(TwitterUser {
            id: field(input, "id")?,
            name: field(input, "name")?,
            screen_name: field(input, "screen_name")?,
            location: field(input, "location")?,
            description: field(input, "description")?,
            url: field(input, "url")?,
            protected: field::<Option<bool>>(input, "protected")?.unwrap_or(false),
            followers_count: field::<Option<i32>>(input, "followers_count")?.unwrap_or(0),
            friends_count: field::<Option<i32>>(input, "friends_count")?.unwrap_or(0),
            favourites_count: field::<Option<i32>>(input, "favourites_count")?.unwrap_or(0),
            statuses_count: field::<Option<i32>>(input, "statuses_count")?.unwrap_or(0),
            created_at: parse_date(&created_str, CREATED_AT)?,
            utc_offset: field(input, "utc_offset")?,
            time_zone: field(input, "time_zone")?,
            geo_enabled: field::<Option<bool>>(input, "geo_enabled")?.unwrap_or(false),
            verified: field::<Option<bool>>(input, "verified")?.unwrap_or(false),
            profile: UserProfile::from_json(input)?,
            status: field(input, "status")?,
        })
    }
}

impl PartialEq for TwitterUser {
    /// Users are equal when they are the same account, regardless of any profile churn in
    /// between. Use [`TwitterUser::deep_eq`] for a full structural comparison.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TwitterUser {}

impl std::hash::Hash for TwitterUser {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl TwitterUser {
    /// Compare every field of two users, including any embedded status.
    pub fn deep_eq(&self, other: &TwitterUser) -> bool {
        let status_eq = match (&self.status, &other.status) {
            (Some(a), Some(b)) => a.deep_eq(b),
            (None, None) => true,
            _ => false,
        };

        self.id == other.id
            && self.name == other.name
            && self.screen_name == other.screen_name
            && self.location == other.location
            && self.description == other.description
            && self.url == other.url
            && self.protected == other.protected
            && self.followers_count == other.followers_count
            && self.friends_count == other.friends_count
            && self.favourites_count == other.favourites_count
            && self.statuses_count == other.statuses_count
            && self.created_at == other.created_at
            && self.utc_offset == other.utc_offset
            && self.time_zone == other.time_zone
            && self.geo_enabled == other.geo_enabled
            && self.verified == other.verified
            && self.profile == other.profile
            && status_eq
    }
}

/// Represents the relationship between the authenticated user and another user.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Relationship {
    /// The "source" side of the relationship, i.e. the user whose perspective the booleans are
    /// reported from.
    pub source: RelationSource,
    /// The "target" side of the relationship.
    pub target: RelationTarget,
}

/// The source side of a relationship lookup, carrying the perspective booleans.
///
/// These four flags are reported by the server exactly as they appear on the wire. The target
/// perspective can be read off the same flags (the target follows the source iff the source is
/// followed by the target), so no derived fields are added here.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RelationSource {
    /// Numeric ID of the source user.
    pub id: u64,
    /// Screen name of the source user.
    pub screen_name: String,
    /// Whether the source user is blocking the target, if the server disclosed it.
    pub blocking: Option<bool>,
    /// Whether the source user follows the target.
    pub following: bool,
    /// Whether the source user is followed by the target.
    pub followed_by: bool,
    /// Whether the source user has device notifications enabled for the target, if disclosed.
    pub notifications_enabled: Option<bool>,
}

/// The target side of a relationship lookup.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RelationTarget {
    /// Numeric ID of the target user.
    pub id: u64,
    /// Screen name of the target user.
    pub screen_name: String,
    /// Whether the target user follows the source.
    pub following: bool,
    /// Whether the target user is followed by the source.
    pub followed_by: bool,
}

impl FromJson for Relationship {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        // friendships/show nests everything under a "relationship" key
        let rel = input.get("relationship").unwrap_or(input);

        field_present!(rel, source);
        field_present!(rel, target);

        Ok(Relationship {
            source: field(rel, "source")?,
            target: field(rel, "target")?,
        })
    }
}

impl FromJson for RelationSource {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "RelationSource received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, screen_name);

        Ok(RelationSource {
            id: field(input, "id")?,
            screen_name: field(input, "screen_name")?,
            blocking: field(input, "blocking")?,
            following: field::<Option<bool>>(input, "following")?.unwrap_or(false),
            followed_by: field::<Option<bool>>(input, "followed_by")?.unwrap_or(false),
            notifications_enabled: field(input, "notifications_enabled")?,
        })
    }
}

impl FromJson for RelationTarget {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "RelationTarget received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, screen_name);

        Ok(RelationTarget {
            id: field(input, "id")?,
            screen_name: field(input, "screen_name")?,
            following: field::<Option<bool>>(input, "following")?.unwrap_or(false),
            followed_by: field::<Option<bool>>(input, "followed_by")?.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_USER: &str = r#"{
        "id": 6358482,
        "name": "songbird",
        "screen_name": "songbird",
        "location": "location:Tokyo",
        "description": null,
        "url": null,
        "protected": false,
        "followers_count": 11,
        "friends_count": 3,
        "favourites_count": 1,
        "statuses_count": 1639,
        "created_at": "Sat May 26 21:15:51 +0000 2007",
        "utc_offset": -32400,
        "time_zone": "Alaska",
        "geo_enabled": true,
        "verified": false,
        "profile_image_url": "http://a3.twimg.com/profile_images/1184543043/avatar_normal.gif",
        "profile_background_image_url": "http://s.twimg.com/a/1283564528/images/themes/theme1/bg.png",
        "profile_background_tile": "false",
        "profile_background_color": "9ae4e8",
        "profile_text_color": "000000",
        "profile_link_color": "0000ff",
        "profile_sidebar_fill_color": "e0ff92",
        "profile_sidebar_border_color": "87bc44",
        "status": {
            "id": 6000554383,
            "text": "test",
            "source": "web",
            "truncated": false,
            "favorited": false,
            "created_at": "Wed Nov 25 06:29:45 +0000 2009",
            "in_reply_to_status_id": -1,
            "in_reply_to_user_id": -1,
            "geo": null
        }
    }"#;

    #[test]
    fn parse_user() {
        let user = TwitterUser::from_str(SAMPLE_USER).unwrap();

        assert_eq!(user.id, 6358482);
        assert_eq!(user.screen_name, "songbird");
        assert_eq!(user.location.as_deref(), Some("location:Tokyo"));
        assert_eq!(user.description, None);
        assert_eq!(user.url, None);
        assert!(!user.protected);
        assert_eq!(user.followers_count, 11);
        assert_eq!(user.statuses_count, 1639);
        assert_eq!(user.utc_offset, Some(-32400));
        assert_eq!(user.time_zone.as_deref(), Some("Alaska"));
        assert!(user.geo_enabled);

        // quoted boolean on the tile flag
        assert!(!user.profile.background_tile);
        assert_eq!(user.profile.background_color, "9ae4e8");

        let status = user.status.as_ref().expect("embedded status");
        assert_eq!(status.id, 6000554383);
        assert_eq!(status.text, "test");
        assert!(status.in_reply_to.is_none());
    }

    #[test]
    fn user_without_status() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_USER).unwrap();
        value.as_object_mut().unwrap().remove("status");

        let user = TwitterUser::from_json(&value).unwrap();
        assert!(user.status.is_none());
    }

    #[test]
    fn missing_required_field() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_USER).unwrap();
        value.as_object_mut().unwrap().remove("screen_name");

        assert!(matches!(
            TwitterUser::from_json(&value),
            Err(crate::error::Error::MissingValue("screen_name"))
        ));
    }

    #[test]
    fn identity_is_by_id() {
        let a = TwitterUser::from_str(SAMPLE_USER).unwrap();
        let mut b = a.clone();
        b.name = "someone else entirely".to_string();

        assert_eq!(a, b);
        assert!(!a.deep_eq(&b));
        assert!(a.deep_eq(&a.clone()));
    }

    #[test]
    fn parse_relationship() {
        let rel = Relationship::from_str(
            r#"{
                "relationship": {
                    "source": {
                        "id": 6358482,
                        "screen_name": "songbird",
                        "blocking": false,
                        "following": true,
                        "followed_by": false,
                        "notifications_enabled": null
                    },
                    "target": {
                        "id": 6377362,
                        "screen_name": "songbird2",
                        "following": false,
                        "followed_by": true
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(rel.source.screen_name, "songbird");
        assert_eq!(rel.source.blocking, Some(false));
        assert!(rel.source.following);
        assert!(!rel.source.followed_by);
        assert_eq!(rel.source.notifications_enabled, None);
        assert_eq!(rel.target.id, 6377362);
        assert!(rel.target.followed_by);
    }
}
