//! Outgoing message payload builders.
//!
//! Pure data-shape constructors for the bot message schema: no network calls,
//! no validation beyond what the remote API enforces. Optional fields are
//! omitted from the serialized output when unset, so a minimal payload
//! carries exactly the fields the schema requires.
//!
//! Image and file messages exist in two modes — by URL or by uploaded file
//! ID — exposed as two explicitly named constructors rather than one
//! overloaded entry point.
//!
//! # Examples
//!
//! ```
//! use works_bot_sdk::content::MessagePayload;
//!
//! let payload = MessagePayload::text("hi");
//! let json = serde_json::to_value(&payload).unwrap();
//! assert_eq!(json, serde_json::json!({"content": {"type": "text", "text": "hi"}}));
//! ```

use serde::{Deserialize, Serialize};

pub mod action;
pub mod i18n;

pub use action::{Action, QuickReply, QuickReplyItem};
pub use i18n::{
    I18nContentText, I18nDisplayText, I18nImageResourceId, I18nImageUrl, I18nLabel, I18nLinkText,
    I18nText, Language,
};

/// A complete outgoing message: `{ "content": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub content: MessageContent,
}

/// The content object of an outgoing message, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum MessageContent {
    /// Plain text message.
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_texts: Option<Vec<I18nText>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },

    /// Image, either by URL pair or by uploaded file ID.
    Image {
        #[serde(skip_serializing_if = "Option::is_none")]
        preview_image_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        original_content_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        file_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },

    /// Text with an attached link.
    Link {
        content_text: String,
        link_text: String,
        link: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_content_texts: Option<Vec<I18nContentText>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_link_texts: Option<Vec<I18nLinkText>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },

    /// Sticker from the platform sticker list.
    Sticker {
        package_id: String,
        sticker_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },

    /// Text with a column of action buttons.
    ButtonTemplate {
        content_text: String,
        actions: Vec<Action>,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_content_texts: Option<Vec<I18nContentText>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },

    /// Cover plus element rows plus a button matrix.
    ListTemplate {
        elements: Vec<ListElement>,
        /// Buttons below the list; outer Vec is rows, inner Vec is columns.
        actions: Vec<Vec<Action>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cover_data: Option<CoverData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },

    /// File, either by URL or by uploaded file ID.
    File {
        #[serde(skip_serializing_if = "Option::is_none")]
        original_content_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        file_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },
}

impl MessagePayload {
    /// Text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: MessageContent::Text {
                text: text.into(),
                i18n_texts: None,
                quick_reply: None,
            },
        }
    }

    /// Text message with language variants.
    pub fn text_i18n(text: impl Into<String>, i18n_texts: Vec<I18nText>) -> Self {
        Self {
            content: MessageContent::Text {
                text: text.into(),
                i18n_texts: Some(i18n_texts),
                quick_reply: None,
            },
        }
    }

    /// Image by preview/original URL pair.
    pub fn image_url(
        preview_image_url: impl Into<String>,
        original_content_url: impl Into<String>,
    ) -> Self {
        Self {
            content: MessageContent::Image {
                preview_image_url: Some(preview_image_url.into()),
                original_content_url: Some(original_content_url.into()),
                file_id: None,
                quick_reply: None,
            },
        }
    }

    /// Image by uploaded file ID.
    pub fn image_file_id(file_id: impl Into<String>) -> Self {
        Self {
            content: MessageContent::Image {
                preview_image_url: None,
                original_content_url: None,
                file_id: Some(file_id.into()),
                quick_reply: None,
            },
        }
    }

    /// Link message.
    pub fn link(
        content_text: impl Into<String>,
        link_text: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            content: MessageContent::Link {
                content_text: content_text.into(),
                link_text: link_text.into(),
                link: link.into(),
                i18n_content_texts: None,
                i18n_link_texts: None,
                quick_reply: None,
            },
        }
    }

    /// Sticker message.
    pub fn sticker(package_id: impl Into<String>, sticker_id: impl Into<String>) -> Self {
        Self {
            content: MessageContent::Sticker {
                package_id: package_id.into(),
                sticker_id: sticker_id.into(),
                quick_reply: None,
            },
        }
    }

    /// Button template message.
    pub fn button_template(content_text: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            content: MessageContent::ButtonTemplate {
                content_text: content_text.into(),
                actions,
                i18n_content_texts: None,
                quick_reply: None,
            },
        }
    }

    /// List template message.
    pub fn list_template(elements: Vec<ListElement>, actions: Vec<Vec<Action>>) -> Self {
        Self {
            content: MessageContent::ListTemplate {
                elements,
                actions,
                cover_data: None,
                quick_reply: None,
            },
        }
    }

    /// List template message with cover data.
    pub fn list_template_with_cover(
        elements: Vec<ListElement>,
        actions: Vec<Vec<Action>>,
        cover_data: CoverData,
    ) -> Self {
        Self {
            content: MessageContent::ListTemplate {
                elements,
                actions,
                cover_data: Some(cover_data),
                quick_reply: None,
            },
        }
    }

    /// File message by URL.
    pub fn file_url(original_content_url: impl Into<String>) -> Self {
        Self {
            content: MessageContent::File {
                original_content_url: Some(original_content_url.into()),
                file_id: None,
                quick_reply: None,
            },
        }
    }

    /// File message by uploaded file ID.
    pub fn file_id(file_id: impl Into<String>) -> Self {
        Self {
            content: MessageContent::File {
                original_content_url: None,
                file_id: Some(file_id.into()),
                quick_reply: None,
            },
        }
    }

    /// Attach a quick reply to the message.
    pub fn with_quick_reply(mut self, reply: QuickReply) -> Self {
        let slot = match &mut self.content {
            MessageContent::Text { quick_reply, .. }
            | MessageContent::Image { quick_reply, .. }
            | MessageContent::Link { quick_reply, .. }
            | MessageContent::Sticker { quick_reply, .. }
            | MessageContent::ButtonTemplate { quick_reply, .. }
            | MessageContent::ListTemplate { quick_reply, .. }
            | MessageContent::File { quick_reply, .. } => quick_reply,
        };
        *slot = Some(reply);
        self
    }
}

/// Cover of a list template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl CoverData {
    /// Cover with a background image URL.
    pub fn image_url(background_image_url: impl Into<String>) -> Self {
        Self {
            background_image_url: Some(background_image_url.into()),
            ..Self::default()
        }
    }

    /// Cover with a background file ID.
    pub fn file_id(background_file_id: impl Into<String>) -> Self {
        Self {
            background_file_id: Some(background_file_id.into()),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// One row of a list template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListElement {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl ListElement {
    /// Element with no thumbnail.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            original_content_url: None,
            file_id: None,
            action: None,
        }
    }

    /// Element with a thumbnail by URL.
    pub fn with_image_url(title: impl Into<String>, original_content_url: impl Into<String>) -> Self {
        Self {
            original_content_url: Some(original_content_url.into()),
            ..Self::new(title)
        }
    }

    /// Element with a thumbnail by uploaded file ID.
    pub fn with_file_id(title: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            file_id: Some(file_id.into()),
            ..Self::new(title)
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the tap action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

/// Mention markup for a specific member, `<m userId="...">`.
pub fn mention(user_id: &str) -> String {
    format!("<m userId=\"{user_id}\">")
}

/// Mention markup for every member of the room, `<m userId="all">`.
pub fn mention_all() -> String {
    mention("all")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
