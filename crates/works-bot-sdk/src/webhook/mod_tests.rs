//! Tests for webhook callback parsing.

use super::*;

mod message_event_tests {
    use super::*;

    #[test]
    fn test_parse_text_message() {
        let body = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1", "domainId": 12345},
            "content": {"type": "text", "text": "hello"}
        }"#;

        let event = parse_callback(body).unwrap();
        match event {
            CallbackEvent::Message(message) => {
                assert_eq!(message.source.user_id.as_deref(), Some("u1"));
                assert_eq!(message.source.domain_id, Some(12345));
                assert_eq!(message.issued_time, "2024-05-01T09:30:00.000Z");
                assert_eq!(
                    message.content,
                    CallbackContent::Text {
                        text: "hello".to_string(),
                        postback: None,
                    }
                );
            }
            other => panic!("expected message event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_text_message_with_postback_payload() {
        let body = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1"},
            "content": {"type": "text", "text": "Pick", "postback": "pick:1"}
        }"#;

        match parse_callback(body).unwrap() {
            CallbackEvent::Message(message) => {
                assert_eq!(
                    message.content,
                    CallbackContent::Text {
                        text: "Pick".to_string(),
                        postback: Some("pick:1".to_string()),
                    }
                );
            }
            other => panic!("expected message event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_location_message() {
        let body = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1"},
            "content": {
                "type": "location",
                "address": "1 Example St",
                "latitude": 35.6,
                "longitude": 139.7
            }
        }"#;

        match parse_callback(body).unwrap() {
            CallbackEvent::Message(message) => match message.content {
                CallbackContent::Location {
                    address,
                    latitude,
                    longitude,
                } => {
                    assert_eq!(address, "1 Example St");
                    assert!((latitude - 35.6).abs() < f64::EPSILON);
                    assert!((longitude - 139.7).abs() < f64::EPSILON);
                }
                other => panic!("expected location content, got {other:?}"),
            },
            other => panic!("expected message event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sticker_message() {
        let body = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1"},
            "content": {"type": "sticker", "packageId": "1", "stickerId": "3"}
        }"#;

        match parse_callback(body).unwrap() {
            CallbackEvent::Message(message) => {
                assert_eq!(
                    message.content,
                    CallbackContent::Sticker {
                        package_id: "1".to_string(),
                        sticker_id: "3".to_string(),
                    }
                );
            }
            other => panic!("expected message event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_image_and_file_messages_carry_file_id() {
        let image = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1"},
            "content": {"type": "image", "fileId": "f1"}
        }"#;
        let file = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1"},
            "content": {"type": "file", "fileId": "f2"}
        }"#;

        match parse_callback(image).unwrap() {
            CallbackEvent::Message(m) => {
                assert_eq!(m.content, CallbackContent::Image { file_id: "f1".to_string() });
            }
            other => panic!("expected message event, got {other:?}"),
        }
        match parse_callback(file).unwrap() {
            CallbackEvent::Message(m) => {
                assert_eq!(m.content, CallbackContent::File { file_id: "f2".to_string() });
            }
            other => panic!("expected message event, got {other:?}"),
        }
    }
}

mod room_event_tests {
    use super::*;

    #[test]
    fn test_parse_join_event() {
        let body = br#"{
            "type": "join",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"channelId": "c1"}
        }"#;

        match parse_callback(body).unwrap() {
            CallbackEvent::Join(event) => {
                assert_eq!(event.source.channel_id.as_deref(), Some("c1"));
                assert_eq!(event.source.user_id, None);
            }
            other => panic!("expected join event, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_member_joined_and_left_events() {
        let joined = br#"{
            "type": "joined",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"channelId": "c1", "userId": "u2"}
        }"#;
        let left = br#"{
            "type": "left",
            "issuedTime": "2024-05-01T09:31:00.000Z",
            "source": {"channelId": "c1", "userId": "u2"}
        }"#;

        assert!(matches!(
            parse_callback(joined).unwrap(),
            CallbackEvent::Joined(_)
        ));
        assert!(matches!(parse_callback(left).unwrap(), CallbackEvent::Left(_)));
    }

    #[test]
    fn test_parse_leave_event() {
        let body = br#"{
            "type": "leave",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"channelId": "c1"}
        }"#;
        assert!(matches!(
            parse_callback(body).unwrap(),
            CallbackEvent::Leave(_)
        ));
    }
}

mod postback_event_tests {
    use super::*;

    #[test]
    fn test_parse_postback_event() {
        let body = br#"{
            "type": "postback",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1"},
            "data": "pick:1"
        }"#;

        match parse_callback(body).unwrap() {
            CallbackEvent::Postback(event) => {
                assert_eq!(event.data, "pick:1");
                assert_eq!(event.source.user_id.as_deref(), Some("u1"));
            }
            other => panic!("expected postback event, got {other:?}"),
        }
    }
}

mod failure_tests {
    use super::*;

    #[test]
    fn test_invalid_json_fails() {
        assert!(matches!(
            parse_callback(b"{broken"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_event_type_fails() {
        let body = br#"{"type": "typing", "issuedTime": "2024-05-01T09:30:00.000Z"}"#;
        assert!(parse_callback(body).is_err());
    }

    #[test]
    fn test_unknown_content_type_fails() {
        let body = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "source": {"userId": "u1"},
            "content": {"type": "video", "fileId": "f1"}
        }"#;
        assert!(parse_callback(body).is_err());
    }

    #[test]
    fn test_missing_source_fails_for_messages() {
        let body = br#"{
            "type": "message",
            "issuedTime": "2024-05-01T09:30:00.000Z",
            "content": {"type": "text", "text": "hi"}
        }"#;
        assert!(parse_callback(body).is_err());
    }
}
