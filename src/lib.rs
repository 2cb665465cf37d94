// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A library for interacting with the legacy Twitter v1 REST API.
//!
//! The heart of this crate is its mapping layer: the v1 API serves JSON that predates any
//! consistency guarantees (quoted numbers, stringly-typed booleans, four different date
//! formats, `-1` standing in for "absent"), and the types in here absorb all of that so that
//! callers only ever see well-typed structs. Each domain area gets a module, and each entity
//! type implements the [`FromJson`] conversion from raw JSON.
//!
//! Actually moving bytes is delegated to a [`transport::Transport`] implementation supplied by
//! the caller; this crate does not speak HTTP, sign OAuth requests, or retry anything. With a
//! transport in hand, [`client::Twitter`] exposes the bound endpoints:
//!
//! ```no_run
//! use bluebird::client::Twitter;
//! # fn some_transport() -> Box<dyn bluebird::transport::Transport> { unimplemented!() }
//!
//! # fn main() -> Result<(), bluebird::error::Error> {
//! let client = Twitter::new(some_transport());
//!
//! let user = client.show_user("rustlang")?;
//! println!("{} ({} followers)", user.screen_name, user.followers_count);
//!
//! for tweet in client.user_timeline("rustlang")?.response {
//!     println!("<@{:?}> {}", tweet.user.as_ref().map(|u| &u.screen_name), tweet.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every call returns its payload in a [`Response`], which carries the rate-limit counters the
//! server attached to that round-trip and derefs to the payload itself.

#[macro_use]
mod common;

pub mod client;
pub mod cursor;
pub mod direct;
pub mod error;
mod links;
pub mod list;
pub mod saved_search;
pub mod search;
pub mod service;
pub mod status;
pub mod stream;
pub mod transport;
pub mod trend;
pub mod user;

pub use crate::common::{FromJson, Headers, ParamList, Response, ResponseList};
