//! HTTP byte-stream fetching.
//!
//! The rest of the crate only sees the [`Fetcher`] capability: a GET that
//! yields a status, an optional content length and a chunked body. The
//! production implementation is backed by `reqwest`.

use async_trait::async_trait;
use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use kv_core::{Error, Result};
use reqwest::Client;
use std::io;
use std::time::Duration;
use tracing::debug;

/// A chunked response body.
pub type ByteStream = BoxStream<'static, io::Result<Vec<u8>>>;

/// Response to a GET request.
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body length, when the server announced one.
    pub content_length: Option<u64>,
    /// The body as a stream of chunks.
    pub body: ByteStream,
}

impl FetchResponse {
    /// Build a response from an in-memory body.
    pub fn from_bytes(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            content_length: Some(body.len() as u64),
            body: stream::iter(vec![Ok(body)]).boxed(),
        }
    }

    /// Only 200 counts as success for both the catalog and downloads.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Collect the whole body into memory.
    pub async fn bytes(mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.content_length.unwrap_or(0) as usize);
        while let Some(chunk) = self.body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf)
    }
}

impl std::fmt::Debug for FetchResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchResponse")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Capability to GET a URL as a byte stream.
///
/// Transport failures are returned as `io::Error`; callers attach the
/// stage and URL when converting them into [`Error::Network`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> io::Result<FetchResponse>;
}

/// `reqwest`-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with an overall request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("kubeversion/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config {
                message: "failed to create HTTP client".into(),
                path: None,
                source: Some(Box::new(e)),
                fixes: vec![],
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> io::Result<FetchResponse> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(io::Error::other)?;

        let status = response.status().as_u16();
        let content_length = response.content_length();
        debug!(status, ?content_length, "Response from {}", url);

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(io::Error::other))
            .boxed();

        Ok(FetchResponse {
            status,
            content_length,
            body,
        })
    }
}
