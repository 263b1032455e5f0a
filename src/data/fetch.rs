//! HTTP access to remote GeoJSON feeds

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::data::geojson::GeoJson;

/// Shared async HTTP client for feed downloads
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("failed to build reqwest async client")
});

/// Errors raised while fetching or decoding a feed
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid GeoJSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Transport seam for feed downloads
///
/// The assembly pipeline only sees this trait, so tests can script feed
/// responses without any network.
#[async_trait]
pub trait FeedFetch: Send + Sync {
    /// Downloads and decodes one GeoJSON document
    async fn fetch_feed(&self, url: &str) -> Result<GeoJson, FetchError>;
}

/// [`FeedFetch`] implementation over the shared `reqwest` client
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFeedClient;

impl HttpFeedClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FeedFetch for HttpFeedClient {
    async fn fetch_feed(&self, url: &str) -> Result<GeoJson, FetchError> {
        let response = HTTP_CLIENT.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
