// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for working with the legacy search endpoint.
//!
//! Search lives on its own host and predates the rest of the v1 API, so its rows are not
//! [`Status`][crate::status::Status] values: the fields are flatter, the author is a bare
//! id/screen-name pair, and `created_at` uses a different date format. The rows are wrapped in
//! an envelope ([`SearchResult`]) that carries the paging metadata needed to continue or
//! refresh the search.

use serde_json::Value;

use chrono::{DateTime, Utc};

use crate::common::dates::{parse_date, SEARCH_DATE};
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};

/// A single row from a search result.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Tweet {
    /// Numeric ID of the matched status.
    pub id: u64,
    /// The text of the matched status.
    pub text: String,
    /// Screen name of the author.
    pub from_user: String,
    /// The search service's internal ID for the author.
    ///
    /// This is not the author's account ID; the legacy search backend keeps its own numbering.
    pub from_user_id: u64,
    /// Screen name of the user the status replies to, if it is a reply.
    pub to_user: Option<String>,
    /// The search service's internal ID for the replied-to user, if any.
    pub to_user_id: Option<u64>,
    /// ISO 639-1 code for the language the status appears to be in, when detected.
    pub iso_language_code: Option<String>,
    /// The utility used to post the status. Search HTML-escapes this, and the escaping is
    /// passed along untouched.
    pub source: String,
    /// A URL pointing to the author's avatar image.
    pub profile_image_url: String,
    /// The UTC timestamp from when the status was posted.
    pub created_at: DateTime<Utc>,
}

/// The envelope around a page of search results.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchResult {
    /// The narrowest status ID the search covered.
    pub since_id: u64,
    /// The widest status ID the search covered. Feed this back as `since_id` to poll for newer
    /// matches.
    pub max_id: u64,
    /// Pre-built query string that re-runs this search for newer results, when provided.
    pub refresh_url: Option<String>,
    /// The number of results requested per page.
    pub results_per_page: i32,
    /// A warning from the search service, e.g. about adjusted paging.
    pub warning: Option<String>,
    /// How long the search took on the server, in seconds.
    pub completed_in: f64,
    /// Which page of results this envelope holds.
    pub page: i32,
    /// The query that was run, percent-encoded.
    pub query: String,
    /// The matched rows, in the order the server returned them.
    pub results: Vec<Tweet>,
}

impl FromJson for Tweet {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "search Tweet received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, text);
        field_present!(input, from_user);
        field_present!(input, created_at);

        let created_str: String = field(input, "created_at")?;

        Ok(Tweet {
            id: field(input, "id")?,
            text: field(input, "text")?,
            from_user: field(input, "from_user")?,
            from_user_id: field(input, "from_user_id")?,
            to_user: field(input, "to_user")?,
            to_user_id: field(input, "to_user_id")?,
            iso_language_code: field(input, "iso_language_code")?,
            source: field::<Option<String>>(input, "source")?.unwrap_or_default(),
            profile_image_url: field::<Option<String>>(input, "profile_image_url")?
                .unwrap_or_default(),
            created_at: parse_date(&created_str, SEARCH_DATE)?,
        })
    }
}

impl FromJson for SearchResult {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "SearchResult received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, results);
        field_present!(input, query);

        Ok(SearchResult {
            since_id: field::<Option<u64>>(input, "since_id")?.unwrap_or(0),
            max_id: field::<Option<u64>>(input, "max_id")?.unwrap_or(0),
            refresh_url: field(input, "refresh_url")?,
            results_per_page: field::<Option<i32>>(input, "results_per_page")?.unwrap_or(0),
            warning: field(input, "warning")?,
            completed_in: field::<Option<f64>>(input, "completed_in")?.unwrap_or(0.0),
            page: field::<Option<i32>>(input, "page")?.unwrap_or(1),
            query: field(input, "query")?,
            results: field(input, "results")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SEARCH: &str = r#"{
        "since_id": 0,
        "max_id": 6022438653,
        "refresh_url": "?since_id=6022438653&q=tweetdeck",
        "results_per_page": 15,
        "completed_in": 0.031,
        "page": 1,
        "query": "rustlang",
        "results": [
            {
                "id": 6022438653,
                "text": "working on the parser",
                "from_user": "songbird",
                "from_user_id": 1620730,
                "to_user": null,
                "to_user_id": null,
                "iso_language_code": "en",
                "source": "&lt;a href=&quot;http://www.tweetdeck.com/&quot;&gt;TweetDeck&lt;/a&gt;",
                "profile_image_url": "http://a3.twimg.com/profile_images/avatar_normal.gif",
                "created_at": "Mon, 23 Nov 2009 21:35:43 +0000"
            },
            {
                "id": 6022438654,
                "text": "@songbird nice",
                "from_user": "songbird2",
                "from_user_id": 1620731,
                "to_user": "songbird",
                "to_user_id": 1620730,
                "iso_language_code": "en",
                "source": "web",
                "profile_image_url": "http://a3.twimg.com/profile_images/avatar2_normal.gif",
                "created_at": "Mon, 23 Nov 2009 21:36:01 +0000"
            }
        ]
    }"#;

    #[test]
    fn parse_search_result() {
        let result = SearchResult::from_str(SAMPLE_SEARCH).unwrap();

        assert_eq!(result.max_id, 6022438653);
        assert_eq!(result.results_per_page, 15);
        assert_eq!(result.completed_in, 0.031);
        assert_eq!(result.query, "rustlang");
        assert_eq!(result.warning, None);
        assert_eq!(result.results.len(), 2);

        let row = &result.results[0];
        assert_eq!(row.from_user, "songbird");
        assert_eq!(row.to_user, None);
        assert_eq!(row.iso_language_code.as_deref(), Some("en"));
        // the HTML escaping in source comes through untouched
        assert!(row.source.contains("&lt;a href"));

        let reply = &result.results[1];
        assert_eq!(reply.to_user.as_deref(), Some("songbird"));
        assert_eq!(reply.to_user_id, Some(1620730));
    }

    #[test]
    fn empty_results() {
        let result = SearchResult::from_str(
            r#"{"query": "nothing", "results": [], "completed_in": 0.01}"#,
        )
        .unwrap();

        assert!(result.results.is_empty());
    }

    #[test]
    fn malformed_row_fails_the_page() {
        let json = SAMPLE_SEARCH.replace(
            r#""created_at": "Mon, 23 Nov 2009 21:36:01 +0000""#,
            r#""created_at": "Wed Nov 25 06:29:45 +0000 2009""#,
        );

        assert!(matches!(
            SearchResult::from_str(&json),
            Err(crate::error::Error::InvalidResponse(_, _))
        ));
    }
}
