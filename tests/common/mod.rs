//! Scripted transport shared by the integration suites.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream;
use futures_util::StreamExt;

use mailchimp_v3::{ApiRequest, StreamedResponse, Transport, TransportError};

/// Records every request and answers with a fixed, chunked body.
pub struct RecordingTransport {
    chunks: Vec<Vec<u8>>,
    status: u16,
    fail_with: Option<String>,
    chunk_delay: Option<Duration>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn replying(chunks: &[&str]) -> Arc<Self> {
        Self::build(chunks.iter().map(|c| c.as_bytes().to_vec()).collect(), 200, None, None)
    }

    pub fn replying_with_status(status: u16, body: &str) -> Arc<Self> {
        Self::build(vec![body.as_bytes().to_vec()], status, None, None)
    }

    pub fn slow(chunks: &[&str], delay: Duration) -> Arc<Self> {
        Self::build(
            chunks.iter().map(|c| c.as_bytes().to_vec()).collect(),
            200,
            None,
            Some(delay),
        )
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Self::build(Vec::new(), 0, Some(reason.to_string()), None)
    }

    fn build(
        chunks: Vec<Vec<u8>>,
        status: u16,
        fail_with: Option<String>,
        chunk_delay: Option<Duration>,
    ) -> Arc<Self> {
        Arc::new(Self {
            chunks,
            status,
            fail_with,
            chunk_delay,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<StreamedResponse, TransportError> {
        self.seen.lock().unwrap().push(request);

        if let Some(reason) = &self.fail_with {
            return Err(TransportError::Connection(reason.clone()));
        }

        let delay = self.chunk_delay;
        let body = stream::iter(self.chunks.clone()).then(move |chunk| async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            Ok::<_, TransportError>(Bytes::from(chunk))
        });

        Ok(StreamedResponse {
            status: self.status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Box::pin(body),
        })
    }
}
