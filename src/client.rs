//! High-level client — `MailchimpClient` with one method per HTTP verb.
//!
//! Each verb binds its method and forwards to the [`Executor`]; results and
//! errors come back unchanged.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::{BodyEncoding, ClientConfig, ClientOptions};
use crate::error::SdkError;
use crate::http::{Executor, Method, Transport};

/// The primary entry point for the SDK.
///
/// ```rust,ignore
/// let client = MailchimpClient::builder().key("…-us6").location("us6").build()?;
/// let lists = client.get("/lists").await?;
/// ```
#[derive(Clone)]
pub struct MailchimpClient {
    executor: Executor,
}

impl MailchimpClient {
    pub fn builder() -> MailchimpClientBuilder {
        MailchimpClientBuilder::default()
    }

    /// Client using the default reqwest transport.
    #[cfg(feature = "http")]
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        let transport = crate::http::ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Client using a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            executor: Executor::new(Arc::new(config), transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value, SdkError> {
        self.executor.execute(endpoint, Method::Get, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<Value, SdkError> {
        self.executor.execute(endpoint, Method::Post, Some(data)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<Value, SdkError> {
        self.executor.execute(endpoint, Method::Patch, Some(data)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<Value, SdkError> {
        self.executor.execute(endpoint, Method::Put, Some(data)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Value, SdkError> {
        self.executor.execute(endpoint, Method::Delete, None::<&()>).await
    }

    /// Generic form of the verb methods. `data` is ignored for GET and DELETE.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        method: Method,
        data: Option<&B>,
    ) -> Result<Value, SdkError> {
        self.executor.execute(endpoint, method, data).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MailchimpClientBuilder {
    options: ClientOptions,
    transport: Option<Arc<dyn Transport>>,
}

impl MailchimpClientBuilder {
    pub fn key(mut self, key: &str) -> Self {
        self.options.key = Some(key.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.options.location = Some(location.to_string());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.options.debug = Some(debug);
        self
    }

    /// Override `https://{location}.api.mailchimp.com`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.options.base_url = Some(url.to_string());
        self
    }

    pub fn body_encoding(mut self, encoding: BodyEncoding) -> Self {
        self.options.body_encoding = Some(encoding);
        self
    }

    /// Merge a deserialized options object. Fields it sets override earlier
    /// setters; fields it leaves unset keep their earlier values.
    pub fn options(mut self, options: ClientOptions) -> Self {
        let ClientOptions {
            key,
            location,
            debug,
            base_url,
            body_encoding,
        } = options;
        if key.is_some() {
            self.options.key = key;
        }
        if location.is_some() {
            self.options.location = location;
        }
        if debug.is_some() {
            self.options.debug = debug;
        }
        if base_url.is_some() {
            self.options.base_url = base_url;
        }
        if body_encoding.is_some() {
            self.options.body_encoding = body_encoding;
        }
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<MailchimpClient, SdkError> {
        let config = ClientConfig::from_options(self.options);
        match self.transport {
            Some(transport) => Ok(MailchimpClient::with_transport(config, transport)),
            None => Self::default_client(config),
        }
    }

    #[cfg(feature = "http")]
    fn default_client(config: ClientConfig) -> Result<MailchimpClient, SdkError> {
        MailchimpClient::new(config)
    }

    #[cfg(not(feature = "http"))]
    fn default_client(_config: ClientConfig) -> Result<MailchimpClient, SdkError> {
        Err(SdkError::Config(
            "no transport supplied and the `http` feature is disabled".to_string(),
        ))
    }
}
