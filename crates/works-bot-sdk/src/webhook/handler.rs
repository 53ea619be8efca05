//! Callback routing to application handlers.
//!
//! [`CallbackDispatcher`] parses an inbound body once and routes the typed
//! event to every registered [`CallbackHandler`] in registration order. A
//! failing handler is logged and does not stop the remaining handlers; a
//! body that does not parse fails the dispatch itself.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use works_bot_sdk::webhook::{CallbackDispatcher, CallbackHandler, HandlerError, MessageEvent};
//!
//! struct EchoHandler;
//!
//! #[async_trait]
//! impl CallbackHandler for EchoHandler {
//!     async fn on_message(&self, event: &MessageEvent) -> Result<(), HandlerError> {
//!         println!("message from {:?}", event.source.user_id);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example(body: &[u8]) -> Result<(), works_bot_sdk::ParseError> {
//! let mut dispatcher = CallbackDispatcher::new();
//! dispatcher.add_handler(Arc::new(EchoHandler));
//! dispatcher.dispatch(body).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::webhook::{parse_callback, CallbackEvent, MessageEvent, PostbackEvent, RoomEvent};
use crate::error::ParseError;

/// Error type returned by application handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Application-provided callback processing logic.
///
/// Every method has a no-op default, so a handler only implements the events
/// it cares about.
#[async_trait::async_trait]
pub trait CallbackHandler: Send + Sync {
    /// A member sent the bot a message.
    async fn on_message(&self, _event: &MessageEvent) -> Result<(), HandlerError> {
        Ok(())
    }

    /// The bot was invited into a talk room.
    async fn on_join(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        Ok(())
    }

    /// The bot left a talk room.
    async fn on_leave(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        Ok(())
    }

    /// A member joined a talk room the bot is in.
    async fn on_joined(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        Ok(())
    }

    /// A member left a talk room the bot is in.
    async fn on_left(&self, _event: &RoomEvent) -> Result<(), HandlerError> {
        Ok(())
    }

    /// A template button posted back to the bot.
    async fn on_postback(&self, _event: &PostbackEvent) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// Parses inbound callback bodies and routes them to registered handlers.
#[derive(Default)]
pub struct CallbackDispatcher {
    handlers: Vec<Arc<dyn CallbackHandler>>,
}

impl CallbackDispatcher {
    /// Create a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers run in registration order.
    pub fn add_handler(&mut self, handler: Arc<dyn CallbackHandler>) {
        self.handlers.push(handler);
    }

    /// The number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Parse the body and route the event to every registered handler.
    ///
    /// Handler failures are logged and skipped; the parsed event is returned
    /// so the caller can act on it as well.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is not a known callback shape.
    pub async fn dispatch(&self, body: &[u8]) -> Result<CallbackEvent, ParseError> {
        let event = parse_callback(body)?;

        for handler in &self.handlers {
            let result = match &event {
                CallbackEvent::Message(e) => handler.on_message(e).await,
                CallbackEvent::Join(e) => handler.on_join(e).await,
                CallbackEvent::Leave(e) => handler.on_leave(e).await,
                CallbackEvent::Joined(e) => handler.on_joined(e).await,
                CallbackEvent::Left(e) => handler.on_left(e).await,
                CallbackEvent::Postback(e) => handler.on_postback(e).await,
            };
            if let Err(error) = result {
                tracing::warn!(%error, "callback handler failed");
            }
        }

        Ok(event)
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
