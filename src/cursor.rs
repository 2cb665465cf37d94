// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Types to navigate cursored collections.
//!
//! Some calls to Twitter provide a "cursored" list of results, where a page of results comes
//! with a pair of cursor ids: one to pass back to load the page before it, one for the page
//! after. A cursor id of zero means there is no page in that direction. The [`Cursor`] trait
//! generalizes over the envelopes these endpoints use, and [`CursorIter`] walks the pages
//! behind a plain `Iterator` so callers don't juggle the ids by hand.

use serde_json::Value;

use crate::client::Twitter;
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};
use crate::list;
use crate::service::RateLimitStatus;
use crate::user::TwitterUser;

/// Trait to generalize over paginated views of API results.
///
/// Implementors read their page payload from the key their endpoint uses (`users`, `lists`,
/// `ids`), next to the shared `previous_cursor`/`next_cursor` pair.
pub trait Cursor {
    /// What type is being returned by the API call?
    type Item;

    /// The cursor id that loads the page before this one.
    fn previous_cursor_id(&self) -> i64;

    /// The cursor id that loads the page after this one.
    fn next_cursor_id(&self) -> i64;

    /// Consume the cursor and return the contained results.
    fn into_inner(self) -> Vec<Self::Item>;

    /// Whether a page exists after this one.
    fn has_next(&self) -> bool {
        self.next_cursor_id() != 0
    }

    /// Whether a page exists before this one.
    fn has_previous(&self) -> bool {
        self.previous_cursor_id() != 0
    }
}

/// Represents a single-page view into a list of users.
#[derive(Debug, Clone)]
pub struct UserCursor {
    /// Numeric reference to the previous page of results.
    pub previous_cursor: i64,
    /// Numeric reference to the next page of results.
    pub next_cursor: i64,
    /// The list of users in this page of results.
    pub users: Vec<TwitterUser>,
}

/// Represents a single-page view into a list of lists.
#[derive(Debug, Clone)]
pub struct ListCursor {
    /// Numeric reference to the previous page of results.
    pub previous_cursor: i64,
    /// Numeric reference to the next page of results.
    pub next_cursor: i64,
    /// The lists in this page of results.
    pub lists: Vec<list::List>,
}

/// Represents a single-page view into a list of user IDs.
#[derive(Debug, Clone)]
pub struct IDCursor {
    /// Numeric reference to the previous page of results.
    pub previous_cursor: i64,
    /// Numeric reference to the next page of results.
    pub next_cursor: i64,
    /// The list of user IDs in this page of results.
    pub ids: Vec<u64>,
}

macro_rules! cursor_impls {
    ($cursor:ty, $payload:ident, $item:ty) => {
        impl FromJson for $cursor {
            fn from_json(input: &Value) -> Result<Self, error::Error> {
                if !input.is_object() {
                    return Err(InvalidResponse(
                        concat!(stringify!($cursor), " received json that wasn't an object"),
                        Some(input.to_string()),
                    ));
                }

                field_present!(input, previous_cursor);
                field_present!(input, next_cursor);
                field_present!(input, $payload);

                Ok(Self {
                    previous_cursor: field(input, "previous_cursor")?,
                    next_cursor: field(input, "next_cursor")?,
                    $payload: field(input, stringify!($payload))?,
                })
            }
        }

        impl Cursor for $cursor {
            type Item = $item;

            fn previous_cursor_id(&self) -> i64 {
                self.previous_cursor
            }

            fn next_cursor_id(&self) -> i64 {
                self.next_cursor
            }

            fn into_inner(self) -> Vec<Self::Item> {
                self.$payload
            }
        }
    };
}

cursor_impls!(UserCursor, users, TwitterUser);
cursor_impls!(ListCursor, lists, list::List);
cursor_impls!(IDCursor, ids, u64);

/// Iterator over a cursored collection, loading pages on demand.
///
/// Starts at the magic cursor `-1` (the first page) and keeps requesting pages until the
/// server reports a next cursor of zero. Each item carries the rate-limit information of the
/// round-trip that fetched its page, and a failed page load is yielded as the error it
/// produced, ending the iteration.
pub struct CursorIter<'a, T>
where
    T: Cursor + FromJson,
{
    client: &'a Twitter,
    link: &'static str,
    params: ParamList,
    /// The cursor that will load the next page, or zero when the collection is exhausted.
    pub next_cursor: i64,
    /// The cursor to the page before the one currently being iterated.
    pub previous_cursor: i64,
    rate_limit_status: Option<RateLimitStatus>,
    page: Option<std::vec::IntoIter<T::Item>>,
    failed: bool,
}

impl<'a, T> CursorIter<'a, T>
where
    T: Cursor + FromJson,
{
    pub(crate) fn new(client: &'a Twitter, link: &'static str, params: ParamList) -> Self {
        CursorIter {
            client,
            link,
            params,
            next_cursor: -1,
            previous_cursor: -1,
            rate_limit_status: None,
            page: None,
            failed: false,
        }
    }

    fn load_next_page(&mut self) -> Result<(), error::Error> {
        let params = self
            .params
            .clone()
            .add_param("cursor", self.next_cursor.to_string());
        let resp: Response<T> = self.client.request(self.link, &params)?;

        self.rate_limit_status = resp.rate_limit_status.clone();
        self.previous_cursor = resp.previous_cursor_id();
        self.next_cursor = resp.next_cursor_id();
        self.page = Some(resp.response.into_inner().into_iter());

        Ok(())
    }
}

impl<'a, T> Iterator for CursorIter<'a, T>
where
    T: Cursor + FromJson,
{
    type Item = Result<Response<T::Item>, error::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(page) = &mut self.page {
                if let Some(item) = page.next() {
                    return Some(Ok(Response {
                        rate_limit_status: self.rate_limit_status.clone(),
                        response: item,
                    }));
                }
                if self.next_cursor == 0 {
                    return None;
                }
            }

            if let Err(err) = self.load_next_page() {
                self.failed = true;
                return Some(Err(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_cursor_tolerates_quoted_ids() {
        let cursor = IDCursor::from_str(
            r#"{
                "previous_cursor": 0,
                "next_cursor": 1333504313713126852,
                "ids": [6358482, "6377362", 14090452]
            }"#,
        )
        .unwrap();

        assert_eq!(cursor.ids, vec![6358482, 6377362, 14090452]);
        assert!(!cursor.has_previous());
        assert!(cursor.has_next());
        assert_eq!(cursor.next_cursor_id(), 1333504313713126852);
    }

    #[test]
    fn final_page_has_no_next() {
        let cursor = IDCursor::from_str(
            r#"{"previous_cursor": -13335043137, "next_cursor": 0, "ids": []}"#,
        )
        .unwrap();

        assert!(cursor.has_previous());
        assert!(!cursor.has_next());
        assert!(cursor.into_inner().is_empty());
    }

    #[test]
    fn list_cursor_payload_key() {
        let cursor = ListCursor::from_str(
            r#"{
                "previous_cursor": 0,
                "next_cursor": 0,
                "lists": [{
                    "id": 2031945,
                    "name": "API",
                    "full_name": "@songbird/api",
                    "slug": "api",
                    "mode": "public"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(cursor.lists.len(), 1);
        assert_eq!(cursor.lists[0].slug, "api");
    }

    #[test]
    fn missing_cursor_ids_are_an_error() {
        let result = UserCursor::from_str(r#"{"users": []}"#);
        assert!(matches!(
            result,
            Err(crate::error::Error::MissingValue("previous_cursor"))
        ));
    }
}
