//! App configuration.
//!
//! Configuration is a JSON document listing one or more registered apps plus
//! the label of the default one:
//!
//! ```json
//! {
//!   "apps": [
//!     {
//!       "label": "production",
//!       "clientId": "...",
//!       "clientSecret": "...",
//!       "serviceAccount": "sa@example",
//!       "privateKeyFilename": "private.key"
//!     }
//!   ],
//!   "defaultAppLabel": "production"
//! }
//! ```
//!
//! The private key is delivered as a separate PEM file next to the document.
//! Configuration is constructed explicitly and passed into the components
//! that need it; nothing is memoized in process globals.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Resolved configuration for one app.
///
/// Immutable once constructed. The client secret and private key are never
/// exposed in Debug output.
#[derive(Clone)]
pub struct AppConfig {
    /// App client ID.
    pub client_id: String,
    /// App client secret.
    pub client_secret: String,
    /// Service account for the JWT subject.
    pub service_account: String,
    /// PEM-encoded RSA private key text.
    pub private_key: String,
    /// Caller-defined options carried through unchanged.
    pub user_option: Option<serde_json::Value>,
}

impl AppConfig {
    /// Construct a configuration directly.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        service_account: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            service_account: service_account.into(),
            private_key: private_key.into(),
            user_option: None,
        }
    }

    /// Attach caller-defined options.
    pub fn with_user_option(mut self, user_option: serde_json::Value) -> Self {
        self.user_option = Some(user_option);
        self
    }
}

// Security: Redact secrets in debug output
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<REDACTED>")
            .field("service_account", &self.service_account)
            .field("private_key", &"<REDACTED>")
            .field("user_option", &self.user_option)
            .finish()
    }
}

/// One app entry of the configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    pub label: String,
    pub client_id: String,
    pub client_secret: String,
    pub service_account: String,
    pub private_key_filename: String,
    #[serde(default)]
    pub user_option: Option<serde_json::Value>,
}

/// The parsed configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub apps: Vec<AppEntry>,
    pub default_app_label: String,
}

impl ConfigDocument {
    /// Parse the document from JSON text.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find the app entry with the given label.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownLabel` if no entry matches.
    pub fn app(&self, label: &str) -> Result<&AppEntry, ConfigError> {
        self.apps
            .iter()
            .find(|app| app.label == label)
            .ok_or_else(|| ConfigError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Find the entry named by `defaultAppLabel`.
    pub fn default_app(&self) -> Result<&AppEntry, ConfigError> {
        self.app(&self.default_app_label)
    }
}

/// Load the default app from a configuration file.
///
/// Reads the JSON document at `path`, selects the default-labelled entry, and
/// reads its private key from the named file in the same directory.
///
/// # Errors
///
/// - `ConfigError::Io` if the document or key file cannot be read
/// - `ConfigError::Json` if the document is not valid JSON
/// - `ConfigError::UnknownLabel` if no app matches the default label
///
/// # Examples
///
/// ```no_run
/// let app = works_bot_sdk::config::load_default_app("lineworks.config.json")?;
/// println!("app: {}", app.client_id);
/// # Ok::<(), works_bot_sdk::ConfigError>(())
/// ```
pub fn load_default_app(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let document = ConfigDocument::parse(&text)?;
    let entry = document.default_app()?;

    let key_path = match path.parent() {
        Some(dir) => dir.join(&entry.private_key_filename),
        None => Path::new(&entry.private_key_filename).to_path_buf(),
    };
    let private_key = std::fs::read_to_string(&key_path).map_err(|source| ConfigError::Io {
        path: key_path.display().to_string(),
        source,
    })?;

    tracing::debug!(label = %entry.label, client_id = %entry.client_id, "loaded app configuration");

    let mut app = AppConfig::new(
        entry.client_id.clone(),
        entry.client_secret.clone(),
        entry.service_account.clone(),
        private_key,
    );
    app.user_option = entry.user_option.clone();
    Ok(app)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
