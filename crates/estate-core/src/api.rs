//! Content API client.
//!
//! [`ContentApi`] is the transport seam: it performs GET and JSON POST
//! requests against the site API and hands back the raw status and body.
//! Status interpretation and decoding live in [`fetch_content`] and the
//! contact form, so they behave the same over any transport.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::resource::Content;

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`SiteError::Status`].
    pub fn error_for_status(self) -> SiteResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SiteError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Transport to the site API.
///
/// Implementations return `Err` only for transport failures; any response
/// that arrived, whatever its status, is returned as `Ok`.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// GET `{api_base}/{path}?website={slug}`
    async fn get(&self, path: &str) -> SiteResult<RawResponse>;

    /// POST a JSON body to `{api_base}/{path}?website={slug}`
    async fn post_json(&self, path: &str, body: &serde_json::Value) -> SiteResult<RawResponse>;
}

/// Fetch and decode one content resource.
pub async fn fetch_content<C: Content>(api: &dyn ContentApi) -> SiteResult<C> {
    let path = C::RESOURCE.path();
    let response = api.get(path).await?.error_for_status()?;
    let payload = serde_json::from_str(&response.body)?;
    Ok(payload)
}

/// [`ContentApi`] over HTTP using reqwest.
#[derive(Clone, Debug)]
pub struct HttpContentApi {
    client: Client,
    config: SiteConfig,
}

impl HttpContentApi {
    pub fn new(config: SiteConfig) -> SiteResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SiteError::Config(format!("failed to build HTTP client: {}", e)))?;

        tracing::info!(
            "Content API client for site '{}' at {}",
            config.site_slug,
            config.api_base
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    async fn read(response: reqwest::Response) -> SiteResult<RawResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn get(&self, path: &str) -> SiteResult<RawResponse> {
        let url = self.config.endpoint_url(path)?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> SiteResult<RawResponse> {
        let url = self.config.endpoint_url(path)?;
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        Self::read(response).await
    }
}
