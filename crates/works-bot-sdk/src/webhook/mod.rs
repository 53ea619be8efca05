//! Inbound webhook callback parsing.
//!
//! The bot platform delivers events as HTTP POSTs with a JSON body carrying a
//! `type` discriminator and, for messages, a nested `content.type`
//! discriminator. Parsing here is pure: no I/O, no validation beyond the
//! shape itself. Routing to application logic lives in [`handler`].
//!
//! # Examples
//!
//! ```
//! use works_bot_sdk::webhook::{parse_callback, CallbackContent, CallbackEvent};
//!
//! let body = br#"{
//!     "type": "message",
//!     "issuedTime": "2024-05-01T00:00:00.000Z",
//!     "source": {"userId": "u1", "domainId": 1},
//!     "content": {"type": "text", "text": "hi"}
//! }"#;
//!
//! match parse_callback(body).unwrap() {
//!     CallbackEvent::Message(event) => match event.content {
//!         CallbackContent::Text { text, .. } => assert_eq!(text, "hi"),
//!         _ => panic!("expected text content"),
//!     },
//!     _ => panic!("expected message event"),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

pub mod handler;

pub use handler::{CallbackDispatcher, CallbackHandler, HandlerError};

/// An inbound callback event, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CallbackEvent {
    /// A member sent the bot a message.
    Message(MessageEvent),
    /// The bot was invited into a multi-member talk room.
    Join(RoomEvent),
    /// The bot left a multi-member talk room.
    Leave(RoomEvent),
    /// A member joined a talk room the bot is in.
    Joined(RoomEvent),
    /// A member left a talk room the bot is in.
    Left(RoomEvent),
    /// A postback message (template button taps).
    Postback(PostbackEvent),
}

/// Sender information attached to every event.
///
/// Which fields are present depends on the event: messages always carry
/// `user_id`; room events always carry `channel_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,
}

/// A message event with its typed content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    pub source: EventSource,
    /// Creation time, `YYYY-MM-DDThh:mm:ss.SSSZ`.
    pub issued_time: String,
    pub content: CallbackContent,
}

/// A join/leave/joined/left room event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomEvent {
    pub source: EventSource,
    pub issued_time: String,
}

/// A postback event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackEvent {
    pub source: EventSource,
    pub issued_time: String,
    /// The `data` payload of the postback action that was tapped.
    pub data: String,
}

/// Content of an inbound message, discriminated by the nested `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum CallbackContent {
    /// Plain text, optionally carrying a postback payload from a template.
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        postback: Option<String>,
    },
    /// A location the member shared.
    Location {
        address: String,
        latitude: f64,
        longitude: f64,
    },
    /// A sticker.
    Sticker {
        package_id: String,
        sticker_id: String,
    },
    /// An image; the file ID can be resolved through attachment download.
    Image { file_id: String },
    /// A file; the file ID can be resolved through attachment download.
    File { file_id: String },
}

/// Parse an inbound webhook body into a typed event.
///
/// # Errors
///
/// Returns `ParseError` if the body is not valid JSON or the `type`
/// discriminators do not match a known event or content kind.
pub fn parse_callback(body: &[u8]) -> Result<CallbackEvent, ParseError> {
    serde_json::from_slice(body).map_err(ParseError::from)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
