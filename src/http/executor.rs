//! Request/response executor — one network round trip per call.
//!
//! Builds the request (URL, Basic auth, body for POST/PATCH/PUT), sends it
//! through the injected [`Transport`], decodes the streamed body chunk by
//! chunk and parses the reassembled text as JSON once the stream ends.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use futures_util::StreamExt;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{SdkError, TransportError};
use crate::http::decoder::Utf8Decoder;
use crate::http::{ApiRequest, ByteStream, Method, Transport};
use crate::network::{API_VERSION_PREFIX, BASIC_AUTH_USER, USER_AGENT};

/// Executes requests against the Mailchimp API.
///
/// Cheap to clone; clones share the config and transport.
#[derive(Clone)]
pub struct Executor {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for an API-relative path, e.g. `/lists` → `…/3.0/lists`.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.config.base_url();
        if path.starts_with('/') {
            format!("{}{}{}", base, API_VERSION_PREFIX, path)
        } else {
            format!("{}{}/{}", base, API_VERSION_PREFIX, path)
        }
    }

    /// Build the request without sending it.
    ///
    /// The payload is only serialized when `method` carries a body; for GET
    /// and DELETE it is ignored.
    pub fn prepare<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: Method,
        payload: Option<&B>,
    ) -> Result<ApiRequest, SdkError> {
        let mut headers = vec![("User-Agent".to_string(), USER_AGENT.to_string())];

        if let Some(key) = self.config.api_key() {
            headers.push(("Authorization".to_string(), basic_auth(key)));
        }

        let body = match payload {
            Some(payload) if method.sends_body() => {
                let json = serde_json::to_string(payload).map_err(SdkError::Serialize)?;
                headers.push((
                    "Content-Type".to_string(),
                    self.config.body_encoding().content_type().to_string(),
                ));
                headers.push(("Content-Length".to_string(), json.len().to_string()));
                Some(json)
            }
            _ => None,
        };

        Ok(ApiRequest {
            method,
            url: self.url_for(path),
            headers,
            body,
        })
    }

    /// Send one request and return the parsed JSON body.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: Method,
        payload: Option<&B>,
    ) -> Result<Value, SdkError> {
        let request = self.prepare(path, method, payload)?;

        if self.config.debug() {
            tracing::info!(
                method = %request.method,
                url = %request.url,
                headers = ?redact(&request.headers),
                "Sending Mailchimp request"
            );
        }

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => return Err(self.transport_failure(e)),
        };

        if self.config.debug() {
            tracing::info!(
                status = response.status,
                headers = ?response.headers,
                "Mailchimp response received"
            );
        }

        let text = self.read_body(response.body).await?;
        parse_body(text)
    }

    async fn read_body(&self, mut body: ByteStream) -> Result<String, SdkError> {
        let mut decoder = Utf8Decoder::new();
        let mut fragments: Vec<String> = Vec::new();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| self.transport_failure(e))?;
            tracing::debug!(bytes = chunk.len(), "Received body chunk");
            fragments.push(decoder.write(&chunk));
        }
        fragments.push(decoder.end());

        Ok(fragments.concat())
    }

    fn transport_failure(&self, error: TransportError) -> SdkError {
        if self.config.debug() {
            tracing::error!(error = %error, "Mailchimp request failed");
        }
        SdkError::Transport(error)
    }
}

/// Parse a fully buffered body. Empty or whitespace-only bodies become `null`.
pub fn parse_body(text: String) -> Result<Value, SdkError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(source) => Err(SdkError::Parse { source, body: text }),
    }
}

fn basic_auth(key: &str) -> String {
    let credentials = format!("{}:{}", BASIC_AUTH_USER, key);
    format!("Basic {}", BASE64.encode(credentials))
}

fn redact(headers: &[(String, String)]) -> Vec<(&str, &str)> {
    headers
        .iter()
        .map(|(k, v)| {
            if k.eq_ignore_ascii_case("authorization") {
                (k.as_str(), "<redacted>")
            } else {
                (k.as_str(), v.as_str())
            }
        })
        .collect()
}
