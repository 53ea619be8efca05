//! # LINE WORKS Bot SDK
//!
//! Typed client library for the LINE WORKS bot messaging API:
//! service-account authentication with a self-signed RS256 JWT, message
//! payload construction, message dispatch, attachment upload/download, and
//! webhook callback parsing.
//!
//! This SDK provides:
//! - OAuth2 service-account and refresh-token grants ([`auth`])
//! - Pure message payload builders ([`content`])
//! - Message dispatch to users and channels ([`client`])
//! - Attachment upload slots, multipart upload, and download resolution
//! - Typed webhook callback parsing and handler dispatch ([`webhook`])
//!
//! There are no retries, no token caching, and no delivery guarantees: every
//! operation performs at most one HTTP request and either fully succeeds or
//! fails with a typed error.
//!
//! # Examples
//!
//! ## Requesting a token and sending a message
//!
//! ```no_run
//! use std::sync::Arc;
//! use works_bot_sdk::auth::TokenClient;
//! use works_bot_sdk::client::{BotClient, BotId, UserId};
//! use works_bot_sdk::config;
//! use works_bot_sdk::content::MessagePayload;
//! use works_bot_sdk::transport::ReqwestTransport;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = config::load_default_app("lineworks.config.json")?;
//! let transport = Arc::new(ReqwestTransport::new()?);
//!
//! let token = TokenClient::new(transport.clone())
//!     .request_access_token(&app)
//!     .await?;
//!
//! let client = BotClient::new()?;
//! client
//!     .send_to_user(
//!         &UserId::new("user@example"),
//!         &MessagePayload::text("hello"),
//!         &BotId::new("1234567"),
//!         &token.access_token,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing a callback
//!
//! ```
//! use works_bot_sdk::webhook::{parse_callback, CallbackEvent};
//!
//! let body = br#"{"type":"join","issuedTime":"2024-05-01T00:00:00.000Z",
//!                 "source":{"channelId":"c1"}}"#;
//! assert!(matches!(parse_callback(body), Ok(CallbackEvent::Join(_))));
//! ```

// Public modules
pub mod auth;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod transport;
pub mod webhook;

// Re-export commonly used types at crate root for convenience
pub use error::{
    ApiError, AuthError, ConfigError, CryptoError, HttpError, ParseError, ValidationError,
};

pub use auth::{
    AccessToken, AssertionSigner, AuthConfig, JwtClaims, PrivateKey, Rs256Signer, SignedAssertion,
    TokenClient,
};
pub use client::{BotClient, BotId, ChannelId, ClientConfig, FileId, FileInfo, UserId};
pub use config::{load_default_app, AppConfig, ConfigDocument};
pub use content::{Action, MessageContent, MessagePayload, QuickReply, QuickReplyItem};
pub use transport::{FetchRequest, FetchResponse, ReqwestTransport, Transport};
pub use webhook::{
    parse_callback, CallbackContent, CallbackDispatcher, CallbackEvent, CallbackHandler,
};
