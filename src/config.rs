//! Client configuration — API key, data-center location, debug flag.
//!
//! A [`ClientConfig`] is built once (from [`ClientOptions`], the environment,
//! or the client builder) and never mutated afterwards. A missing key is not
//! an error: a warning is logged and requests go out without credentials, so
//! Mailchimp rejects them with 401.

use std::fmt;

use serde::Deserialize;

use crate::network::{self, DEFAULT_LOCATION};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "MAILCHIMP_API_KEY";
/// Environment variable holding the data-center segment.
pub const ENV_LOCATION: &str = "MAILCHIMP_LOCATION";
/// Environment variable enabling debug output.
pub const ENV_DEBUG: &str = "MAILCHIMP_DEBUG";

/// `Content-Type` sent with request bodies.
///
/// The body is always JSON text. `FormUrlEncoded` is the default because
/// existing deployments of this client sent that header; `Json` sends the
/// header that matches the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyEncoding {
    #[default]
    FormUrlEncoded,
    Json,
}

impl BodyEncoding {
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyEncoding::FormUrlEncoded => "application/x-www-form-urlencoded",
            BodyEncoding::Json => "application/json",
        }
    }
}

/// Raw configuration object, e.g. loaded from a JSON/TOML file.
///
/// Every field is optional; defaults are applied by [`ClientConfig::from_options`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientOptions {
    pub key: Option<String>,
    pub location: Option<String>,
    pub debug: Option<bool>,
    pub base_url: Option<String>,
    pub body_encoding: Option<BodyEncoding>,
}

/// Immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: Option<String>,
    location: String,
    debug: bool,
    base_url: Option<String>,
    body_encoding: BodyEncoding,
}

impl ClientConfig {
    /// Apply defaults to a raw options object.
    pub fn from_options(options: ClientOptions) -> Self {
        if options.key.is_none() {
            tracing::warn!("Mailchimp API key is not set; requests will fail authentication");
        }

        Self {
            api_key: options.key,
            location: options
                .location
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            debug: options.debug.unwrap_or(false),
            base_url: options
                .base_url
                .map(|url| url.trim_end_matches('/').to_string()),
            body_encoding: options.body_encoding.unwrap_or_default(),
        }
    }

    /// Read `MAILCHIMP_API_KEY`, `MAILCHIMP_LOCATION` and `MAILCHIMP_DEBUG`.
    pub fn from_env() -> Self {
        let options = ClientOptions {
            key: non_empty_var(ENV_API_KEY),
            location: non_empty_var(ENV_LOCATION),
            debug: non_empty_var(ENV_DEBUG).map(|v| parse_flag(&v)),
            ..ClientOptions::default()
        };
        Self::from_options(options)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn body_encoding(&self) -> BodyEncoding {
        self.body_encoding
    }

    /// Base URL without the version prefix or a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => network::base_url_for(&self.location),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_options(ClientOptions::default())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("location", &self.location)
            .field("debug", &self.debug)
            .field("base_url", &self.base_url)
            .field("body_encoding", &self.body_encoding)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
