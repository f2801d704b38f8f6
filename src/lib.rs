//! # mailchimp-v3
//!
//! A thin Rust client for the Mailchimp Marketing API v3.
//!
//! ## Architecture
//!
//! 1. **Config** — `ClientConfig`: API key, data-center location, debug flag
//! 2. **HTTP** — `Executor` builds the request, sends it through a `Transport`,
//!    decodes the streamed body and parses it as JSON
//! 3. **Client** — `MailchimpClient` with `get`/`post`/`patch`/`put`/`delete`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mailchimp_v3::prelude::*;
//!
//! let client = MailchimpClient::builder()
//!     .key("0123456789abcdef-us6")
//!     .location("us6")
//!     .build()?;
//!
//! let lists = client.get("/lists").await?;
//! let member = client
//!     .post("/lists/abc123/members", &json!({"email_address": "a@b.co", "status": "subscribed"}))
//!     .await?;
//! ```

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

/// Client configuration.
pub mod config;

/// Request types, transport seam and executor.
pub mod http;

/// `MailchimpClient` — the primary entry point.
pub mod client;

pub use client::{MailchimpClient, MailchimpClientBuilder};
pub use config::{BodyEncoding, ClientConfig, ClientOptions};
pub use error::{SdkError, TransportError};
pub use http::{ApiRequest, Method, StreamedResponse, Transport};

pub mod prelude {
    pub use crate::client::{MailchimpClient, MailchimpClientBuilder};
    pub use crate::config::{BodyEncoding, ClientConfig, ClientOptions};
    pub use crate::error::{SdkError, TransportError};
    pub use crate::http::{ApiRequest, ByteStream, Executor, Method, StreamedResponse, Transport};
    pub use serde_json::{json, Value};

    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
}
