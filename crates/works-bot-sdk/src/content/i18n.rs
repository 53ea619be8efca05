//! Language variants for message content.
//!
//! Most outgoing fields accept a list of language-keyed overrides shown to
//! members whose client runs in that language.

use serde::{Deserialize, Serialize};

/// Supported client languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja_JP")]
    JaJp,
    #[serde(rename = "ko_KR")]
    KoKr,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "zh_TW")]
    ZhTw,
    #[serde(rename = "en_US")]
    EnUs,
}

/// Language variant of a message text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nText {
    pub language: Language,
    pub text: String,
}

impl I18nText {
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
        }
    }
}

/// Language variant of a content text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nContentText {
    pub language: Language,
    pub content_text: String,
}

impl I18nContentText {
    pub fn new(language: Language, content_text: impl Into<String>) -> Self {
        Self {
            language,
            content_text: content_text.into(),
        }
    }
}

/// Language variant of a link text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nLinkText {
    pub language: Language,
    pub link_text: String,
}

impl I18nLinkText {
    pub fn new(language: Language, link_text: impl Into<String>) -> Self {
        Self {
            language,
            link_text: link_text.into(),
        }
    }
}

/// Language variant of a button label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nLabel {
    pub language: Language,
    pub label: String,
}

impl I18nLabel {
    pub fn new(language: Language, label: impl Into<String>) -> Self {
        Self {
            language,
            label: label.into(),
        }
    }
}

/// Language variant of a postback display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nDisplayText {
    pub language: Language,
    pub display_text: String,
}

impl I18nDisplayText {
    pub fn new(language: Language, display_text: impl Into<String>) -> Self {
        Self {
            language,
            display_text: display_text.into(),
        }
    }
}

/// Language variant of a quick reply icon URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nImageUrl {
    pub language: Language,
    pub thumbnail_image_url: String,
}

impl I18nImageUrl {
    pub fn new(language: Language, thumbnail_image_url: impl Into<String>) -> Self {
        Self {
            language,
            thumbnail_image_url: thumbnail_image_url.into(),
        }
    }
}

/// Language variant of a quick reply icon resource ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nImageResourceId {
    pub language: Language,
    pub image_resource_id: String,
}

impl I18nImageResourceId {
    pub fn new(language: Language, image_resource_id: impl Into<String>) -> Self {
        Self {
            language,
            image_resource_id: image_resource_id.into(),
        }
    }
}
