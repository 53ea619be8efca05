//! OAuth2 token exchange for the service-account grant.
//!
//! Two stateless operations against the fixed token endpoint:
//! - trade a signed JWT assertion for an access/refresh token pair
//! - refresh an access token with a refresh token
//!
//! Every call produces network I/O; there is no caching, no retry, and no
//! token persistence. Reuse and expiry tracking belong to the caller.

use std::sync::Arc;

use bytes::Bytes;

use crate::auth::{
    AccessToken, AssertionSigner, JwtClaims, PrivateKey, Rs256Signer, DEFAULT_ASSERTION_TTL,
};
use crate::config::AppConfig;
use crate::error::{AuthError, CryptoError, HttpError, ParseError};
use crate::transport::{FetchRequest, FetchResponse, Transport};

/// Fixed OAuth2 token endpoint.
pub const TOKEN_ENDPOINT: &str = "https://auth.worksmobile.com/oauth2/v2.0/token";

/// Default scope requested for bot operations.
pub const DEFAULT_SCOPE: &str = "bot";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const REFRESH_TOKEN_GRANT: &str = "refresh_token";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Configuration for token exchange behavior.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token endpoint URL (overridable for tests).
    pub token_endpoint: String,

    /// Assertion lifetime in seconds; `exp` is exactly `iat + ttl`.
    pub assertion_ttl: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_endpoint: TOKEN_ENDPOINT.to_string(),
            assertion_ttl: DEFAULT_ASSERTION_TTL,
        }
    }
}

impl AuthConfig {
    /// Set the token endpoint URL.
    pub fn with_token_endpoint(mut self, url: impl Into<String>) -> Self {
        self.token_endpoint = url.into();
        self
    }

    /// Set the assertion lifetime in seconds.
    pub fn with_assertion_ttl(mut self, ttl_seconds: i64) -> Self {
        self.assertion_ttl = ttl_seconds;
        self
    }
}

/// Client for the OAuth2 token endpoint.
///
/// Stateless given an [`AppConfig`]: each call builds fresh claims, signs a
/// fresh assertion, and performs one HTTP request through the injected
/// [`Transport`].
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use works_bot_sdk::auth::TokenClient;
/// use works_bot_sdk::config::AppConfig;
/// use works_bot_sdk::transport::ReqwestTransport;
///
/// # async fn example(app: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
/// let transport = Arc::new(ReqwestTransport::new()?);
/// let tokens = TokenClient::new(transport);
/// let token = tokens.request_access_token(&app).await?;
/// println!("expires in {}s", token.expires_in);
/// # Ok(())
/// # }
/// ```
pub struct TokenClient {
    transport: Arc<dyn Transport>,
    config: AuthConfig,
}

impl TokenClient {
    /// Create a token client with default configuration.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, AuthConfig::default())
    }

    /// Create a token client with custom configuration.
    pub fn with_config(transport: Arc<dyn Transport>, config: AuthConfig) -> Self {
        Self { transport, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Request an access token with the default `"bot"` scope.
    pub async fn request_access_token(&self, app: &AppConfig) -> Result<AccessToken, AuthError> {
        self.request_access_token_with_scope(app, DEFAULT_SCOPE)
            .await
    }

    /// Request an access token for explicit scopes.
    ///
    /// Builds claims issued now, signs them with the app's private key, and
    /// POSTs the JWT-bearer grant form to the token endpoint.
    ///
    /// # Errors
    ///
    /// - `AuthError::Crypto` if the key is malformed or signing fails
    /// - `AuthError::Rejected` if the endpoint answers non-2xx
    /// - `AuthError::Parse` if the body is not a valid token response
    pub async fn request_access_token_with_scope(
        &self,
        app: &AppConfig,
        scope: &str,
    ) -> Result<AccessToken, AuthError> {
        let key = PrivateKey::from_pem(&app.private_key).map_err(|e| {
            AuthError::Crypto(CryptoError::InvalidKey {
                message: e.to_string(),
            })
        })?;
        let signer = Rs256Signer::new(key);
        let claims = JwtClaims::service_account(
            &app.client_id,
            &app.service_account,
            self.config.assertion_ttl,
        );
        let assertion = signer.sign(&claims).await?;

        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("assertion", assertion.as_str())
            .append_pair("grant_type", JWT_BEARER_GRANT)
            .append_pair("client_id", &app.client_id)
            .append_pair("client_secret", &app.client_secret)
            .append_pair("scope", scope)
            .finish();

        tracing::debug!(client_id = %app.client_id, scope, "requesting access token");
        let response = self.post_form(form).await?;
        Self::parse_token(&response)
    }

    /// Refresh an access token with a refresh token.
    ///
    /// The response carries no `refresh_token` field.
    ///
    /// # Errors
    ///
    /// - `AuthError::Rejected` if the endpoint answers non-2xx
    /// - `AuthError::Parse` if the body is not a valid token response
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
        app: &AppConfig,
    ) -> Result<AccessToken, AuthError> {
        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("refresh_token", refresh_token)
            .append_pair("grant_type", REFRESH_TOKEN_GRANT)
            .append_pair("client_id", &app.client_id)
            .append_pair("client_secret", &app.client_secret)
            .finish();

        tracing::debug!(client_id = %app.client_id, "refreshing access token");
        let response = self.post_form(form).await?;
        Self::parse_token(&response)
    }

    async fn post_form(&self, form: String) -> Result<FetchResponse, AuthError> {
        let request = FetchRequest::post(&self.config.token_endpoint)
            .content_type(FORM_CONTENT_TYPE)
            .body(Bytes::from(form));

        self.transport.fetch(request).await.map_err(|e| match e {
            HttpError::Status { status, body } => AuthError::Rejected { status, body },
            other => AuthError::Http(other),
        })
    }

    fn parse_token(response: &FetchResponse) -> Result<AccessToken, AuthError> {
        let token: AccessToken = response.json()?;
        if token.access_token.is_empty() {
            return Err(AuthError::Parse(ParseError::MissingField {
                field: "access_token".to_string(),
            }));
        }
        Ok(token)
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
