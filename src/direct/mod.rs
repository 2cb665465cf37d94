// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Structs and methods for working with direct messages.

use serde_json::Value;

use chrono::{DateTime, Utc};

use crate::common::dates::{parse_date, CREATED_AT};
use crate::common::*;
use crate::error::{self, Error::InvalidResponse};
use crate::user::TwitterUser;

/// Represents a single direct message.
///
/// The v1 payload carries both sides of the conversation twice: once as bare id/screen-name
/// pairs and once as fully embedded user objects. Both are kept, since the flat fields are
/// usable without touching the heavier embedded profiles.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DirectMessage {
    /// Numeric ID for this DM.
    pub id: u64,
    /// The text of the DM.
    pub text: String,
    /// Numeric ID of the user who sent the DM.
    pub sender_id: u64,
    /// Screen name of the user who sent the DM.
    pub sender_screen_name: String,
    /// Numeric ID of the user who received the DM.
    pub recipient_id: u64,
    /// Screen name of the user who received the DM.
    pub recipient_screen_name: String,
    /// The UTC timestamp from when the DM was sent.
    pub created_at: DateTime<Utc>,
    /// The full profile of the sending user.
    pub sender: Box<TwitterUser>,
    /// The full profile of the receiving user.
    pub recipient: Box<TwitterUser>,
}

impl FromJson for DirectMessage {
    fn from_json(input: &Value) -> Result<Self, error::Error> {
        if !input.is_object() {
            return Err(InvalidResponse(
                "DirectMessage received json that wasn't an object",
                Some(input.to_string()),
            ));
        }

        field_present!(input, id);
        field_present!(input, text);
        field_present!(input, created_at);
        field_present!(input, sender);
        field_present!(input, recipient);

        let created_str: String = field(input, "created_at")?;

        Ok(DirectMessage {
            id: field(input, "id")?,
            text: field(input, "text")?,
            sender_id: field(input, "sender_id")?,
            sender_screen_name: field(input, "sender_screen_name")?,
            recipient_id: field(input, "recipient_id")?,
            recipient_screen_name: field(input, "recipient_screen_name")?,
            created_at: parse_date(&created_str, CREATED_AT)?,
            sender: field(input, "sender")?,
            recipient: field(input, "recipient")?,
        })
    }
}

impl PartialEq for DirectMessage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DirectMessage {}

impl std::hash::Hash for DirectMessage {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DM: &str = r#"{
        "id": 246,
        "text": "test message",
        "sender_id": 6358482,
        "sender_screen_name": "songbird",
        "recipient_id": 6377362,
        "recipient_screen_name": "songbird2",
        "created_at": "Mon Nov 23 21:35:43 +0000 2009",
        "sender": {
            "id": 6358482,
            "name": "songbird",
            "screen_name": "songbird",
            "created_at": "Sat May 26 21:15:51 +0000 2007",
            "profile_image_url": "http://a3.twimg.com/profile_images/avatar_normal.gif",
            "profile_background_color": "9ae4e8",
            "profile_text_color": "000000",
            "profile_link_color": "0000ff",
            "profile_sidebar_fill_color": "e0ff92",
            "profile_sidebar_border_color": "87bc44"
        },
        "recipient": {
            "id": 6377362,
            "name": "songbird2",
            "screen_name": "songbird2",
            "created_at": "Sat May 26 21:15:51 +0000 2007",
            "profile_image_url": "http://a3.twimg.com/profile_images/avatar2_normal.gif",
            "profile_background_color": "9ae4e8",
            "profile_text_color": "000000",
            "profile_link_color": "0000ff",
            "profile_sidebar_fill_color": "e0ff92",
            "profile_sidebar_border_color": "87bc44"
        }
    }"#;

    #[test]
    fn parse_direct_message() {
        let dm = DirectMessage::from_str(SAMPLE_DM).unwrap();

        assert_eq!(dm.id, 246);
        assert_eq!(dm.text, "test message");
        assert_eq!(dm.sender_id, 6358482);
        assert_eq!(dm.recipient_screen_name, "songbird2");
        assert_eq!(dm.sender.id, dm.sender_id);
        assert_eq!(dm.recipient.screen_name, dm.recipient_screen_name);
    }

    #[test]
    fn embedded_users_are_required() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_DM).unwrap();
        value.as_object_mut().unwrap().remove("recipient");

        assert!(matches!(
            DirectMessage::from_json(&value),
            Err(crate::error::Error::MissingValue("recipient"))
        ));
    }
}
