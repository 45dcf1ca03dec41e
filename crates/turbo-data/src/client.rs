//! Fetch client for outbound GET requests.

use crate::FetchError;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("turbo-storefront/", env!("CARGO_PKG_VERSION"));

/// Builder for [`FetchClient`].
#[derive(Debug, Clone)]
pub struct FetchClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    default_headers: HashMap<String, String>,
}

impl FetchClientBuilder {
    /// Set a whole-request timeout. Without one, a hung request never resolves.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FetchClient, FetchError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(self.base_url));
        }

        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(FetchClient {
            client: builder.build()?,
            base_url,
            default_headers: self.default_headers,
        })
    }
}

/// HTTP client bound to a backend base URL.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: Url,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Start building a client for `base_url`.
    pub fn builder(base_url: impl Into<String>) -> FetchClientBuilder {
        FetchClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: HashMap::new(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the base URL.
    ///
    /// Each segment is percent-encoded, so a category slug containing `/` or
    /// spaces cannot escape its path position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `segments` with `query` and parse the JSON body.
    ///
    /// Any non-2xx status is an error. There are no retries.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = self.endpoint(segments)?;
        let mut request = self.client.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        tracing::debug!(%url, "GET");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "backend returned error status");
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
