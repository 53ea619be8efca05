//! Tests for action objects and quick replies.

use super::*;

use crate::content::i18n::Language;
use serde_json::json;

fn to_json(action: &Action) -> serde_json::Value {
    serde_json::to_value(action).unwrap()
}

mod action_serialization_tests {
    use super::*;

    #[test]
    fn test_postback_minimal() {
        assert_eq!(
            to_json(&Action::postback("pick:1")),
            json!({"type": "postback", "data": "pick:1"})
        );
    }

    #[test]
    fn test_postback_with_label() {
        assert_eq!(
            to_json(&Action::postback_labeled("pick:1", "Pick")),
            json!({"type": "postback", "data": "pick:1", "label": "Pick"})
        );
    }

    #[test]
    fn test_message_action() {
        assert_eq!(
            to_json(&Action::message("Yes", "yes please")),
            json!({"type": "message", "label": "Yes", "text": "yes please"})
        );
    }

    #[test]
    fn test_uri_action() {
        assert_eq!(
            to_json(&Action::uri("https://example.com")),
            json!({"type": "uri", "uri": "https://example.com"})
        );
    }

    #[test]
    fn test_camera_roll_uses_camel_case_discriminator() {
        assert_eq!(
            to_json(&Action::camera_roll("Pick a photo")),
            json!({"type": "cameraRoll", "label": "Pick a photo"})
        );
    }

    #[test]
    fn test_camera_and_location_actions() {
        assert_eq!(
            to_json(&Action::camera("Camera")),
            json!({"type": "camera", "label": "Camera"})
        );
        assert_eq!(
            to_json(&Action::location("Where?")),
            json!({"type": "location", "label": "Where?"})
        );
    }

    #[test]
    fn test_action_with_i18n_labels() {
        let action = Action::Uri {
            uri: "https://example.com".to_string(),
            label: Some("Open".to_string()),
            i18n_labels: Some(vec![I18nLabel::new(Language::KoKr, "열기")]),
        };
        assert_eq!(
            to_json(&action),
            json!({
                "type": "uri",
                "uri": "https://example.com",
                "label": "Open",
                "i18nLabels": [{"language": "ko_KR", "label": "열기"}]
            })
        );
    }

    #[test]
    fn test_action_roundtrips() {
        let action = Action::postback_labeled("d", "L");
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}

mod quick_reply_tests {
    use super::*;

    #[test]
    fn test_item_without_icon_serializes_action_only() {
        let item = QuickReplyItem::new(Action::message("Yes", "yes"));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"action": {"type": "message", "label": "Yes", "text": "yes"}})
        );
    }

    #[test]
    fn test_item_with_image_url() {
        let item = QuickReplyItem::new(Action::postback("p")).with_image_url("https://i.example/x.png");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageUrl"], "https://i.example/x.png");
        assert!(json.get("imageResourceId").is_none());
    }

    #[test]
    fn test_item_with_image_resource_id() {
        let item = QuickReplyItem::new(Action::postback("p")).with_image_resource_id("res1");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["imageResourceId"], "res1");
    }

    #[test]
    fn test_quick_reply_wraps_items() {
        let reply = QuickReply::new(vec![
            QuickReplyItem::new(Action::message("A", "a")),
            QuickReplyItem::new(Action::message("B", "b")),
        ]);
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }
}
