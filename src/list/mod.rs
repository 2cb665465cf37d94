// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for working with lists.

use std::fmt;

use serde_json::Value;

use crate::common::*;
use crate::error::{self, Error::InvalidResponse};
use crate::user::TwitterUser;

/// Represents a Twitter list.
///
/// As with the other entities, equality and hashing look at the ID alone.
#[derive(Debug, Clone, serde::Serialize)]
pub struct List {
    /// Numeric ID for this list.
    pub id: u64,
    /// The short name of the list, as chosen by its owner.
    pub name: String,
    /// The full name of the list, preceded by `@owner/`, that serves as its unique handle.
    pub full_name: String,
    /// The URL-safe version of the list's name, used in its URI.
    pub slug: String,
    /// The description of the list, as entered by its owner.
    pub description: Option<String>,
    /// The number of users subscribed to this list.
    pub subscriber_count: i32,
    /// The number of users included in this list.
    pub member_count: i32,
    /// The relative URI for this list, e.g. `/songbird/test-list`.
    pub uri: String,
    /// Whether the list is visible to everyone or only its owner.
    pub mode: ListMode,
    /// The user who owns the list, when the endpoint embeds them.
    pub user: Option<Box<TwitterUser>>,
}

/// The visibility of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Anyone can view or subscribe to the list.
    Public,
    /// Only the owner can view the list.
    Private,
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMode::Public => write!(f, "public"),
            ListMode::Private => write!(f, "private"),
        }
    }
}

impl FromJson for ListMode {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        match input.as_str() {
            Some("public") => Ok(ListMode::Public),
            Some("private") => Ok(ListMode::Private),
            _ => Err(InvalidResponse(
                "unexpected list mode",
                Some(input.to_string()),
            )),
        }
    }
}

impl FromJson for List {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "List received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, name);
        field_present!(input, full_name);
        field_present!(input, slug);
        field_present!(input, mode);

        Ok(List {
            id: field(input, "id")?,
            name: field(input, "name")?,
            full_name: field(input, "full_name")?,
            slug: field(input, "slug")?,
            description: field(input, "description")?,
            subscriber_count: field::<Option<i32>>(input, "subscriber_count")?.unwrap_or(0),
            member_count: field::<Option<i32>>(input, "member_count")?.unwrap_or(0),
            uri: field::<Option<String>>(input, "uri")?.unwrap_or_default(),
            mode: field(input, "mode")?,
            user: field(input, "user")?,
        })
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for List {}

impl std::hash::Hash for List {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
