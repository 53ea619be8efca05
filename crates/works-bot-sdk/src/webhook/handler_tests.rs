//! Tests for callback dispatch.

use super::*;

use std::sync::Mutex;

/// Records which hook fired, in order, across dispatches.
struct RecordingHandler {
    seen: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    fn new(seen: Arc<Mutex<Vec<String>>>) -> Self {
        Self { seen }
    }

    fn record(&self, what: &str) {
        self.seen.lock().unwrap().push(what.to_string());
    }
}

#[async_trait::async_trait]
impl CallbackHandler for RecordingHandler {
    async fn on_message(&self, _event: &MessageEvent) -> Result<(), HandlerError> {
        self.record("message");
        Ok(())
    }

    async fn on_join(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        self.record("join");
        Ok(())
    }

    async fn on_leave(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        self.record("leave");
        Ok(())
    }

    async fn on_joined(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        self.record("joined");
        Ok(())
    }

    async fn on_left(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        self.record("left");
        Ok(())
    }

    async fn on_postback(&self, _event: &PostbackEvent) -> Result<(), HandlerError> {
        self.record("postback");
        Ok(())
    }
}

struct FailingHandler;

#[async_trait::async_trait]
impl CallbackHandler for FailingHandler {
    async fn on_message(&self, _event: &MessageEvent) -> Result<(), HandlerError> {
        Err("handler exploded".into())
    }
}

struct SilentHandler;

#[async_trait::async_trait]
impl CallbackHandler for SilentHandler {}

fn message_body() -> &'static [u8] {
    br#"{
        "type": "message",
        "issuedTime": "2024-05-01T09:30:00.000Z",
        "source": {"userId": "u1"},
        "content": {"type": "text", "text": "hi"}
    }"#
}

mod dispatch_tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_routes_message_to_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = CallbackDispatcher::new();
        dispatcher.add_handler(Arc::new(RecordingHandler::new(seen.clone())));

        let event = dispatcher.dispatch(message_body()).await.unwrap();
        assert!(matches!(event, CallbackEvent::Message(_)));
        assert_eq!(*seen.lock().unwrap(), vec!["message".to_string()]);
    }

    #[tokio::test]
    async fn test_dispatch_routes_each_event_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = CallbackDispatcher::new();
        dispatcher.add_handler(Arc::new(RecordingHandler::new(seen.clone())));

        let bodies: Vec<&[u8]> = vec![
            br#"{"type":"join","issuedTime":"t","source":{"channelId":"c1"}}"#,
            br#"{"type":"leave","issuedTime":"t","source":{"channelId":"c1"}}"#,
            br#"{"type":"joined","issuedTime":"t","source":{"channelId":"c1","userId":"u2"}}"#,
            br#"{"type":"left","issuedTime":"t","source":{"channelId":"c1","userId":"u2"}}"#,
            br#"{"type":"postback","issuedTime":"t","source":{"userId":"u1"},"data":"d"}"#,
        ];
        for body in bodies {
            dispatcher.dispatch(body).await.unwrap();
        }

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "join".to_string(),
                "leave".to_string(),
                "joined".to_string(),
                "left".to_string(),
                "postback".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_failing_handler_does_not_stop_later_handlers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = CallbackDispatcher::new();
        dispatcher.add_handler(Arc::new(FailingHandler));
        dispatcher.add_handler(Arc::new(RecordingHandler::new(seen.clone())));

        let result = dispatcher.dispatch(message_body()).await;
        assert!(result.is_ok());
        assert_eq!(*seen.lock().unwrap(), vec!["message".to_string()]);
    }

    #[tokio::test]
    async fn test_default_hooks_are_no_ops() {
        let mut dispatcher = CallbackDispatcher::new();
        dispatcher.add_handler(Arc::new(SilentHandler));
        assert!(dispatcher.dispatch(message_body()).await.is_ok());
    }

    #[tokio::test]
    async fn test_unparseable_body_fails_dispatch() {
        let dispatcher = CallbackDispatcher::new();
        let result = dispatcher.dispatch(b"{broken").await;
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_handler_count_tracks_registrations() {
        let mut dispatcher = CallbackDispatcher::new();
        assert_eq!(dispatcher.handler_count(), 0);
        dispatcher.add_handler(Arc::new(SilentHandler));
        dispatcher.add_handler(Arc::new(SilentHandler));
        assert_eq!(dispatcher.handler_count(), 2);
    }
}
