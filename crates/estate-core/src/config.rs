//! Site configuration.
//!
//! The API origin and the site slug are supplied from outside (command line
//! or environment) and validated once at startup.

use std::time::Duration;

use reqwest::Url;

use crate::error::{SiteError, SiteResult};

/// Default request timeout for content and contact calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration consumed by the content API client and the sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// API origin, e.g. `https://api.example.com/api`
    pub api_base: String,
    /// Tenant identifier appended as `?website=<slug>` to every call
    pub site_slug: String,
    /// Phone number used by the floating call / WhatsApp buttons (digits, with country code)
    pub contact_phone: Option<String>,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl SiteConfig {
    /// Build and validate a config.
    ///
    /// A trailing `/` on `api_base` is dropped so paths join cleanly.
    pub fn new(api_base: impl Into<String>, site_slug: impl Into<String>) -> SiteResult<Self> {
        let api_base = api_base.into().trim().trim_end_matches('/').to_string();
        let site_slug = site_slug.into().trim().to_string();

        let parsed = Url::parse(&api_base)
            .map_err(|e| SiteError::Config(format!("invalid API base '{}': {}", api_base, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SiteError::Config(format!(
                "API base must be http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if site_slug.is_empty() {
            return Err(SiteError::Config("site slug must not be empty".to_string()));
        }

        Ok(Self {
            api_base,
            site_slug,
            contact_phone: None,
            request_timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Set the floating-button phone number. Non-digits are stripped.
    pub fn with_contact_phone(mut self, phone: impl AsRef<str>) -> Self {
        let digits: String = phone.as_ref().chars().filter(char::is_ascii_digit).collect();
        self.contact_phone = if digits.is_empty() { None } else { Some(digits) };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Full URL for a resource path: `{api_base}/{path}?website={slug}`.
    pub fn endpoint_url(&self, path: &str) -> SiteResult<Url> {
        let raw = format!("{}/{}", self.api_base, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|e| SiteError::Config(format!("invalid endpoint '{}': {}", raw, e)))?;
        url.query_pairs_mut().append_pair("website", &self.site_slug);
        Ok(url)
    }
}
