//! Service-account authentication types.
//!
//! This module provides the types involved in the LINE WORKS service-account
//! flow:
//! - [`JwtClaims`] — the claims set of the self-signed assertion
//! - [`SignedAssertion`] — a compact RS256 JWT, consumed immediately
//! - [`AccessToken`] — the token pair returned by the OAuth2 endpoint
//! - [`PrivateKey`] — PEM RSA key material for signing
//!
//! The signing implementation lives in [`jwt`], the token exchange in
//! [`token`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub mod jwt;
pub mod token;

pub use jwt::{AssertionSigner, Rs256Signer};
pub use token::{AuthConfig, TokenClient, DEFAULT_SCOPE, TOKEN_ENDPOINT};

/// Default assertion lifetime (one hour).
pub const DEFAULT_ASSERTION_TTL: i64 = 3600;

/// JWT claims for the service-account grant.
///
/// Created fresh for every token request and never persisted. The issuer is
/// the app client ID and the subject is the service account.
///
/// # Examples
///
/// ```
/// use works_bot_sdk::auth::JwtClaims;
///
/// let claims = JwtClaims::service_account("client-id", "sa@example", 3600);
/// assert_eq!(claims.exp, claims.iat + 3600);
/// assert!(claims.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Issuer (app client ID)
    pub iss: String,
    /// Subject (service account)
    pub sub: String,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, `iat + ttl`)
    pub exp: i64,
}

impl JwtClaims {
    /// Build claims for a service-account assertion issued now.
    ///
    /// # Arguments
    ///
    /// * `client_id` - App client ID (becomes `iss`)
    /// * `service_account` - Service account (becomes `sub`)
    /// * `ttl_seconds` - Assertion lifetime; `exp` is exactly `iat + ttl`
    pub fn service_account(client_id: &str, service_account: &str, ttl_seconds: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            iss: client_id.to_string(),
            sub: service_account.to_string(),
            iat,
            exp: iat + ttl_seconds,
        }
    }

    /// Validate the claims set before signing.
    ///
    /// Issuer and subject must be non-empty and the expiry must be after the
    /// issue time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.iss.is_empty() {
            return Err(ValidationError::Required {
                field: "iss".to_string(),
            });
        }
        if self.sub.is_empty() {
            return Err(ValidationError::Required {
                field: "sub".to_string(),
            });
        }
        if self.exp <= self.iat {
            return Err(ValidationError::OutOfRange {
                field: "exp".to_string(),
                message: "expiry must be after issue time".to_string(),
            });
        }
        Ok(())
    }
}

/// A signed compact JWT assertion (`header.payload.signature`).
///
/// Opaque to callers; handed to the token endpoint and discarded. The token
/// string is never exposed in Debug output.
///
/// # Examples
///
/// ```
/// use works_bot_sdk::auth::SignedAssertion;
/// use chrono::Utc;
///
/// let assertion = SignedAssertion::new("a.b.c".to_string(), Utc::now(), Utc::now());
/// assert_eq!(assertion.as_str().split('.').count(), 3);
/// ```
#[derive(Clone)]
pub struct SignedAssertion {
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SignedAssertion {
    /// Wrap a compact JWT string with its validity window.
    pub fn new(token: String, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            issued_at,
            expires_at,
        }
    }

    /// The compact serialization, for the `assertion` form field.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// When the assertion was issued.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// When the assertion expires.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check if the assertion is currently expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

// Security: Don't expose the assertion in debug output
impl std::fmt::Debug for SignedAssertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedAssertion")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .field("token", &"<REDACTED>")
            .finish()
    }
}

/// Access/refresh token pair from the OAuth2 endpoint.
///
/// The initial service-account grant carries a refresh token; a refresh
/// response does not. The SDK does not persist or cache tokens — reuse and
/// expiry tracking are the caller's responsibility.
///
/// The token strings are never exposed in Debug output.
#[derive(Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Present on the initial grant, absent on refresh responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token type, `"Bearer"`.
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    /// Granted scopes.
    pub scope: String,
}

impl AccessToken {
    /// Check if the token will expire within `margin` of its issue.
    ///
    /// The endpoint reports a relative lifetime only; callers tracking
    /// absolute expiry should record their own issue timestamp.
    pub fn expires_within(&self, margin: Duration) -> bool {
        Duration::seconds(self.expires_in) <= margin
    }
}

// Security: Redact tokens in debug output
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<REDACTED>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<REDACTED>"),
            )
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Private key for assertion signing.
///
/// Stores PEM key material. The key data is never exposed in Debug output.
#[derive(Clone)]
pub struct PrivateKey {
    key_data: Vec<u8>,
    algorithm: KeyAlgorithm,
}

impl PrivateKey {
    /// Create a private key from PEM-encoded text.
    ///
    /// Accepts PKCS#1 (`BEGIN RSA PRIVATE KEY`) and PKCS#8
    /// (`BEGIN PRIVATE KEY`) encodings; the key is parsed once up front so
    /// malformed material is rejected before any signing attempt.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the PEM is empty, missing markers, or not
    /// a parseable RSA key.
    pub fn from_pem(pem: &str) -> Result<Self, ValidationError> {
        use rsa::pkcs1::DecodeRsaPrivateKey;
        use rsa::pkcs8::DecodePrivateKey;
        use rsa::RsaPrivateKey;

        let pem = pem.trim();
        if pem.is_empty() {
            return Err(ValidationError::InvalidFormat {
                field: "private_key".to_string(),
                message: "PEM string cannot be empty".to_string(),
            });
        }
        if !pem.contains("-----BEGIN") || !pem.contains("-----END") {
            return Err(ValidationError::InvalidFormat {
                field: "private_key".to_string(),
                message: "Invalid PEM format: missing BEGIN/END markers".to_string(),
            });
        }

        RsaPrivateKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
            .map_err(|e| ValidationError::InvalidFormat {
                field: "private_key".to_string(),
                message: format!("Failed to parse RSA private key: {e}"),
            })?;

        Ok(Self {
            key_data: pem.as_bytes().to_vec(),
            algorithm: KeyAlgorithm::RS256,
        })
    }

    /// The PEM bytes.
    pub fn key_data(&self) -> &[u8] {
        &self.key_data
    }

    /// The signing algorithm.
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }
}

// Security: Don't expose key data in debug output
impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .field("key_data", &"<REDACTED>")
            .finish()
    }
}

/// Key algorithm for assertion signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    RS256,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
