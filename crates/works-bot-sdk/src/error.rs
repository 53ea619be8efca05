//! Error types for LINE WORKS Bot SDK operations.
//!
//! This module defines all error types used throughout the SDK, one enum per
//! concern. Nothing is retried or suppressed internally; every failure
//! propagates to the immediate caller.

use thiserror::Error;

/// Errors during JWT assertion signing.
///
/// These errors occur during cryptographic operations while building the
/// signed service-account assertion.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The private key is invalid or malformed.
    #[error("Invalid private key: {message}")]
    InvalidKey { message: String },

    /// The signing operation failed.
    #[error("Signing operation failed: {message}")]
    SigningFailed { message: String },

    /// The requested algorithm is not supported by the cryptographic provider.
    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    /// The claims set is not valid for signing.
    #[error("Invalid claims: {0}")]
    InvalidClaims(#[from] ValidationError),
}

/// Errors from the HTTP transport.
///
/// Any status outside the expected set raises `Status` immediately, carrying
/// the textual body for inspection. Callers must not assume the body is
/// JSON-decodable.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The remote endpoint answered with an unexpected status code.
    #[error("Unexpected HTTP status: {status}")]
    Status { status: u16, body: String },

    /// The request could not be performed (connection, TLS, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request could not be built (invalid header or URL).
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl HttpError {
    /// The status code carried by this error, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest { .. } => None,
        }
    }
}

/// Errors during the OAuth2 token exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint rejected the credentials or assertion.
    #[error("Token endpoint rejected the request: {status}")]
    Rejected { status: u16, body: String },

    /// Building or signing the JWT assertion failed.
    #[error("Assertion signing failed: {0}")]
    Crypto(#[from] CryptoError),

    /// The token endpoint could not be reached.
    #[error("Token endpoint unreachable: {0}")]
    Http(HttpError),

    /// The token response body was not the expected JSON shape.
    #[error("Invalid token response: {0}")]
    Parse(#[from] ParseError),
}

/// Errors while decoding a response body.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not valid JSON (or not the expected shape).
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// The body decoded, but a required field is missing or empty.
    #[error("Response missing required field: {field}")]
    MissingField { field: String },
}

/// Errors while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No app entry matches the configured default label.
    #[error("Unknown app label: {label:?}")]
    UnknownLabel { label: String },

    /// A configuration or key file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON.
    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input validation errors.
///
/// These errors occur when validating claims, keys, or other caller input
/// before any network or cryptographic operation is attempted.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    Required { field: String },

    /// A field has an invalid format.
    #[error("Invalid format for {field}: {message}")]
    InvalidFormat { field: String, message: String },

    /// A field value is out of the acceptable range.
    #[error("Value out of range for {field}: {message}")]
    OutOfRange { field: String, message: String },
}

/// Errors during bot API operations (messaging, attachments).
///
/// This is a composition of the transport and decoding failures those
/// operations can hit; it introduces no failure modes of its own beyond the
/// missing redirect header on download-URL resolution.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP call failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body was not the expected JSON shape.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The attachment endpoint answered without a `Location` header.
    #[error("Attachment response carried no Location header")]
    MissingLocation,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
