// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The facade that ties endpoints, transport and mappers together.
//!
//! [`Twitter`] owns a boxed [`Transport`] and exposes one method per endpoint. Every method is
//! the same three steps: assemble a [`ParamList`], hand it to the transport, map the body. The
//! facade also checks each body for the v1 error envelope before mapping, and keeps a list of
//! rate-limit observers that get called whenever a response carries the `X-RateLimit-*`
//! headers.

use serde_json::Value;

use crate::common::*;
use crate::cursor::{CursorIter, IDCursor, ListCursor, UserCursor};
use crate::direct::DirectMessage;
use crate::error::{self, Error::TwitterError};
use crate::links;
use crate::saved_search::SavedSearch;
use crate::search::SearchResult;
use crate::service::RateLimitStatus;
use crate::status::Status;
use crate::transport::{RawResponse, Transport};
use crate::trend::{self, Trends};
use crate::user::{Relationship, TwitterUser, UserID};

/// A client for the Twitter v1 REST API.
///
/// The client is synchronous and stateless apart from its transport and observers; it can be
/// shared behind a reference from as many call sites as needed. Every method returns its
/// payload wrapped in a [`Response`] so the rate-limit counters of the round-trip are on hand.
pub struct Twitter {
    transport: Box<dyn Transport>,
    rate_limit_observers: Vec<Box<dyn Fn(&RateLimitStatus)>>,
}

impl Twitter {
    /// Create a client around the given transport.
    pub fn new(transport: Box<dyn Transport>) -> Twitter {
        Twitter {
            transport,
            rate_limit_observers: Vec::new(),
        }
    }

    /// Register an observer to be called with the parsed rate-limit counters after every
    /// round-trip whose response carried them.
    pub fn on_rate_limit_status(&mut self, observer: impl Fn(&RateLimitStatus) + 'static) {
        self.rate_limit_observers.push(Box::new(observer));
    }

    /// Run a GET round-trip and map the response body.
    pub(crate) fn request<T: FromJson>(
        &self,
        url: &str,
        params: &ParamList,
    ) -> Result<Response<T>, error::Error> {
        let raw = self.transport.get(url, params)?;
        self.finish(raw)
    }

    /// Run a POST round-trip and map the response body.
    pub(crate) fn request_post<T: FromJson>(
        &self,
        url: &str,
        params: &ParamList,
    ) -> Result<Response<T>, error::Error> {
        let raw = self.transport.post(url, params)?;
        self.finish(raw)
    }

    fn finish<T: FromJson>(&self, raw: RawResponse) -> Result<Response<T>, error::Error> {
        let rate_limit_status = raw.rate_limit_status();
        if let Some(status) = &rate_limit_status {
            for observer in &self.rate_limit_observers {
                observer(status);
            }
        }

        let json = raw.as_json()?;
        check_error_envelope(&json)?;

        Ok(Response {
            rate_limit_status,
            response: T::from_json(&json)?,
        })
    }

    // Timelines

    /// The most recent statuses from non-protected users, sampled by the server.
    pub fn public_timeline(&self) -> Result<ResponseList<Status>, error::Error> {
        self.request(links::statuses::PUBLIC_TIMELINE, &ParamList::new())
    }

    /// The most recent statuses posted by the authenticated user and those they follow.
    pub fn home_timeline(&self) -> Result<ResponseList<Status>, error::Error> {
        self.request(links::statuses::HOME_TIMELINE, &ParamList::new())
    }

    /// The most recent statuses posted by the given user.
    pub fn user_timeline(
        &self,
        user: impl Into<UserID>,
    ) -> Result<ResponseList<Status>, error::Error> {
        let params = ParamList::new().add_user_param(user.into());
        self.request(links::statuses::USER_TIMELINE, &params)
    }

    /// The most recent statuses mentioning the authenticated user.
    pub fn mentions(&self) -> Result<ResponseList<Status>, error::Error> {
        self.request(links::statuses::MENTIONS, &ParamList::new())
    }

    // Statuses

    /// Look up a single status by ID.
    pub fn show_status(&self, id: u64) -> Result<Response<Status>, error::Error> {
        let params = ParamList::new().add_param("id", id.to_string());
        self.request(links::statuses::SHOW, &params)
    }

    /// Post a new status from the authenticated user.
    pub fn update_status(&self, text: impl Into<String>) -> Result<Response<Status>, error::Error> {
        let params = ParamList::new().add_param("status", text.into());
        self.request_post(links::statuses::UPDATE, &params)
    }

    /// Delete a status posted by the authenticated user, returning it.
    pub fn destroy_status(&self, id: u64) -> Result<Response<Status>, error::Error> {
        let params = ParamList::new().add_param("id", id.to_string());
        self.request_post(links::statuses::DESTROY, &params)
    }

    /// Retweet the given status as the authenticated user.
    pub fn retweet_status(&self, id: u64) -> Result<Response<Status>, error::Error> {
        let url = format!("{}/{}.json", links::statuses::RETWEET_STEM, id);
        self.request_post(&url, &ParamList::new())
    }

    // Users and friendships

    /// Look up a single user by ID or screen name.
    pub fn show_user(
        &self,
        user: impl Into<UserID>,
    ) -> Result<Response<TwitterUser>, error::Error> {
        let params = ParamList::new().add_user_param(user.into());
        self.request(links::users::SHOW, &params)
    }

    /// The IDs of the users the given user follows, paged.
    pub fn friends_ids(&self, user: impl Into<UserID>) -> CursorIter<'_, IDCursor> {
        let params = ParamList::new().add_user_param(user.into());
        CursorIter::new(self, links::users::FRIENDS_IDS, params)
    }

    /// The IDs of the users following the given user, paged.
    pub fn followers_ids(&self, user: impl Into<UserID>) -> CursorIter<'_, IDCursor> {
        let params = ParamList::new().add_user_param(user.into());
        CursorIter::new(self, links::users::FOLLOWERS_IDS, params)
    }

    /// The full profiles of the users the given user follows, paged.
    pub fn friends_of(&self, user: impl Into<UserID>) -> CursorIter<'_, UserCursor> {
        let params = ParamList::new().add_user_param(user.into());
        CursorIter::new(self, links::users::FRIENDS, params)
    }

    /// The full profiles of the users following the given user, paged.
    pub fn followers_of(&self, user: impl Into<UserID>) -> CursorIter<'_, UserCursor> {
        let params = ParamList::new().add_user_param(user.into());
        CursorIter::new(self, links::users::FOLLOWERS, params)
    }

    /// How two users relate to one another.
    pub fn show_friendship(
        &self,
        source: impl Into<UserID>,
        target: impl Into<UserID>,
    ) -> Result<Response<Relationship>, error::Error> {
        let params = user_pair_params(source.into(), target.into());
        self.request(links::users::FRIENDSHIP_SHOW, &params)
    }

    // Direct messages

    /// The most recent direct messages sent to the authenticated user.
    pub fn direct_messages(&self) -> Result<ResponseList<DirectMessage>, error::Error> {
        self.request(links::direct::RECEIVED, &ParamList::new())
    }

    /// The most recent direct messages sent by the authenticated user.
    pub fn sent_direct_messages(&self) -> Result<ResponseList<DirectMessage>, error::Error> {
        self.request(links::direct::SENT, &ParamList::new())
    }

    /// Send a direct message to the given user.
    pub fn send_direct_message(
        &self,
        to: impl Into<UserID>,
        text: impl Into<String>,
    ) -> Result<Response<DirectMessage>, error::Error> {
        let params = ParamList::new()
            .add_user_param(to.into())
            .add_param("text", text.into());
        self.request_post(links::direct::NEW, &params)
    }

    // Lists

    /// The lists owned by the given user, paged.
    pub fn lists_of(&self, user: impl Into<UserID>) -> CursorIter<'_, ListCursor> {
        let params = ParamList::new().add_user_param(user.into());
        CursorIter::new(self, links::lists::OWNERSHIPS, params)
    }

    /// The lists the given user has been added to, paged.
    pub fn list_memberships(&self, user: impl Into<UserID>) -> CursorIter<'_, ListCursor> {
        let params = ParamList::new().add_user_param(user.into());
        CursorIter::new(self, links::lists::MEMBERSHIPS, params)
    }

    // Trends

    /// The top ten topics trending right now, in a single flat group.
    pub fn trends(&self) -> Result<Response<Trends>, error::Error> {
        self.request(links::trends::TRENDS, &ParamList::new())
    }

    /// The topics trending right now, in a single group.
    ///
    /// The server reports current trends in the same bucket-keyed shape as the daily and
    /// weekly reports, just with one bucket, so that lone group is unwrapped here.
    pub fn trends_current(&self) -> Result<Response<Trends>, error::Error> {
        let raw: Response<Value> = self.request(links::trends::CURRENT, &ParamList::new())?;
        let current = trend::parse_bucketed(&raw.response)?
            .pop()
            .ok_or(error::Error::InvalidResponse(
                "current trends response had no buckets",
                None,
            ))?;

        Ok(raw.map(|_| current))
    }

    /// The topics that trended over the past day, grouped by hour.
    pub fn trends_daily(&self) -> Result<Response<Vec<Trends>>, error::Error> {
        self.request_bucketed_trends(links::trends::DAILY)
    }

    /// The topics that trended over the past week, grouped by day.
    pub fn trends_weekly(&self) -> Result<Response<Vec<Trends>>, error::Error> {
        self.request_bucketed_trends(links::trends::WEEKLY)
    }

    fn request_bucketed_trends(
        &self,
        url: &'static str,
    ) -> Result<Response<Vec<Trends>>, error::Error> {
        let raw: Response<Value> = self.request(url, &ParamList::new())?;
        let groups = trend::parse_bucketed(&raw.response)?;

        Ok(raw.map(|_| groups))
    }

    // Search

    /// Run a search query.
    pub fn search(&self, query: impl Into<String>) -> Result<Response<SearchResult>, error::Error> {
        let params = ParamList::new().add_param("q", query.into());
        self.request(links::search::SEARCH, &params)
    }

    // Account

    /// The saved searches attached to the authenticated user's account.
    pub fn saved_searches(&self) -> Result<ResponseList<SavedSearch>, error::Error> {
        self.request(links::saved_searches::LIST, &ParamList::new())
    }

    /// The rate-limit counters for the current authentication context, as a body payload.
    pub fn rate_limit_status(&self) -> Result<Response<RateLimitStatus>, error::Error> {
        self.request(links::account::RATE_LIMIT_STATUS, &ParamList::new())
    }
}

/// Check the parsed body for the v1 error envelope before handing it to a mapper.
///
/// Errors from the server arrive with a 200-family body shaped like `{"request": "/1/...",
/// "error": "..."}`, so this has to be tested positively rather than relying on the mapper to
/// choke on it.
fn check_error_envelope(json: &Value) -> Result<(), error::Error> {
    if let Some(message) = json.get("error").and_then(Value::as_str) {
        return Err(TwitterError(message.to_string()));
    }

    Ok(())
}

fn user_pair_params(source: UserID, target: UserID) -> ParamList {
    let params = match source {
        UserID::ID(id) => ParamList::new().add_param("source_id", id.to_string()),
        UserID::ScreenName(name) => ParamList::new().add_param("source_screen_name", name),
    };

    match target {
        UserID::ID(id) => params.add_param("target_id", id.to_string()),
        UserID::ScreenName(name) => params.add_param("target_screen_name", name),
    }
}
