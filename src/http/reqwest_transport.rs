//! Default [`Transport`] backed by `reqwest` with rustls.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::CONTENT_LENGTH;
use reqwest::Client;

use crate::error::TransportError;
use crate::http::{ApiRequest, StreamedResponse, Transport};

/// Sends each [`ApiRequest`] through a shared `reqwest::Client`.
///
/// No timeout is configured; wrap calls in `tokio::time::timeout` when a
/// deadline is needed. Idle connections are not pooled, so every call opens
/// its own connection.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().pool_max_idle_per_host(0).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy, custom TLS roots, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<StreamedResponse, TransportError> {
        let mut req = self.client.request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            // reqwest derives Content-Length from the body itself.
            if name.eq_ignore_ascii_case(CONTENT_LENGTH.as_str()) {
                continue;
            }
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = resp
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportError::from));

        Ok(StreamedResponse {
            status,
            headers,
            body: Box::pin(body),
        })
    }
}
