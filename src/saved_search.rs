// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A type for the saved searches attached to an account.

use serde_json::Value;

use chrono::{DateTime, Utc};

use crate::common::dates::{parse_date, CREATED_AT};
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};

/// A search query saved to the authenticated user's account.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SavedSearch {
    /// Numeric ID for this saved search.
    pub id: u64,
    /// The query text that is run when this search is used.
    pub query: String,
    /// The display name for this search. The server sets it to the query text on creation.
    pub name: String,
    /// The position of this search among the account's saved searches, when reported.
    pub position: Option<i32>,
    /// The UTC timestamp from when the search was saved.
    pub created_at: DateTime<Utc>,
}

impl FromJson for SavedSearch {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "SavedSearch received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, query);
        field_present!(input, name);
        field_present!(input, created_at);

        let created_str: String = field(input, "created_at")?;

        Ok(SavedSearch {
            id: field(input, "id")?,
            query: field(input, "query")?,
            name: field(input, "name")?,
            position: field(input, "position")?,
            created_at: parse_date(&created_str, CREATED_AT)?,
        })
    }
}

impl PartialEq for SavedSearch {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SavedSearch {}

impl std::hash::Hash for SavedSearch {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_saved_search() {
        let search = SavedSearch::from_str(
            r##"{
                "id": 3164144,
                "query": "#rustlang :)",
                "name": "#rustlang :)",
                "position": null,
                "created_at": "Tue Nov 24 14:13:38 +0000 2009"
            }"##,
        )
        .unwrap();

        assert_eq!(search.id, 3164144);
        assert_eq!(search.query, "#rustlang :)");
        assert_eq!(search.name, search.query);
        assert_eq!(search.position, None);
    }

    #[test]
    fn saved_search_list() {
        let searches: Vec<SavedSearch> = FromJson::from_str(
            r#"[
                {"id": 1, "query": "a", "name": "a", "created_at": "Tue Nov 24 14:13:38 +0000 2009"},
                {"id": 2, "query": "b", "name": "b", "position": 1, "created_at": "Tue Nov 24 14:13:39 +0000 2009"}
            ]"#,
        )
        .unwrap();

        assert_eq!(searches.len(), 2);
        assert_eq!(searches[1].position, Some(1));
    }
}
