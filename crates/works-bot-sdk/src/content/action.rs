//! Action objects and quick replies.
//!
//! Actions are attached to template buttons, list elements, and quick reply
//! items. The `type` discriminator and camelCase field names follow the
//! remote schema.

use serde::{Deserialize, Serialize};

use crate::content::i18n::{I18nDisplayText, I18nImageResourceId, I18nImageUrl, I18nLabel, I18nText};

/// An action object, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Send a postback payload to the bot when tapped.
    Postback {
        data: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        display_text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_labels: Option<Vec<I18nLabel>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_display_texts: Option<Vec<I18nDisplayText>>,
    },

    /// Send a message into the room when tapped.
    Message {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        postback: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_labels: Option<Vec<I18nLabel>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_texts: Option<Vec<I18nText>>,
    },

    /// Open a URI when tapped.
    Uri {
        uri: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_labels: Option<Vec<I18nLabel>>,
    },

    /// Open the camera.
    Camera {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_labels: Option<Vec<I18nLabel>>,
    },

    /// Open the camera roll.
    CameraRoll {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_labels: Option<Vec<I18nLabel>>,
    },

    /// Ask the member for a location.
    Location {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        i18n_labels: Option<Vec<I18nLabel>>,
    },
}

impl Action {
    /// Postback action.
    pub fn postback(data: impl Into<String>) -> Self {
        Self::Postback {
            data: data.into(),
            label: None,
            display_text: None,
            i18n_labels: None,
            i18n_display_texts: None,
        }
    }

    /// Postback action with a button label.
    pub fn postback_labeled(data: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Postback {
            data: data.into(),
            label: Some(label.into()),
            display_text: None,
            i18n_labels: None,
            i18n_display_texts: None,
        }
    }

    /// Message action.
    pub fn message(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Message {
            label: Some(label.into()),
            text: Some(text.into()),
            postback: None,
            i18n_labels: None,
            i18n_texts: None,
        }
    }

    /// URI action.
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri {
            uri: uri.into(),
            label: None,
            i18n_labels: None,
        }
    }

    /// URI action with a button label.
    pub fn uri_labeled(uri: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Uri {
            uri: uri.into(),
            label: Some(label.into()),
            i18n_labels: None,
        }
    }

    /// Camera action.
    pub fn camera(label: impl Into<String>) -> Self {
        Self::Camera {
            label: label.into(),
            i18n_labels: None,
        }
    }

    /// Camera roll action.
    pub fn camera_roll(label: impl Into<String>) -> Self {
        Self::CameraRoll {
            label: label.into(),
            i18n_labels: None,
        }
    }

    /// Location action.
    pub fn location(label: impl Into<String>) -> Self {
        Self::Location {
            label: label.into(),
            i18n_labels: None,
        }
    }
}

/// Quick reply attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickReply {
    pub items: Vec<QuickReplyItem>,
}

impl QuickReply {
    /// Quick reply from its items.
    pub fn new(items: Vec<QuickReplyItem>) -> Self {
        Self { items }
    }
}

/// One quick reply button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReplyItem {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_image_url: Option<Vec<I18nImageUrl>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_image_resource_ids: Option<Vec<I18nImageResourceId>>,
}

impl QuickReplyItem {
    /// Quick reply button with no icon.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            image_url: None,
            image_resource_id: None,
            i18n_image_url: None,
            i18n_image_resource_ids: None,
        }
    }

    /// Set the icon by URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the icon by uploaded resource ID.
    pub fn with_image_resource_id(mut self, image_resource_id: impl Into<String>) -> Self {
        self.image_resource_id = Some(image_resource_id.into());
        self
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
