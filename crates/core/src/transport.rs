//! HTTP transport: one blocking GET per request.

use std::fmt;

use reqwest::blocking::Client;
use url::Url;

use crate::config::HttpConfig;
use crate::error::{ItunesError, Result};
use crate::result::{decode, QueryResult};

/// Performs a GET and returns the body as text.
///
/// Implementations collapse every transport failure (connect, read, non-2xx
/// status) into [`ItunesError::NetworkCommunication`].
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> Result<String>;
}

/// Blocking reqwest transport. Idle connections are not kept, so every
/// request opens a fresh connection that is closed once the body is read.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String> {
        tracing::trace!("GET {}", url);

        let response = self.client.get(url.as_str()).send()?;
        let status = response.status();
        tracing::debug!("response status: {}", status);

        if !status.is_success() {
            return Err(ItunesError::NetworkCommunication(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        let body = response.text()?;
        tracing::trace!("response body: {}", body);
        Ok(body)
    }
}

/// GET `url` through `transport` and decode the body.
pub fn fetch<T: Transport + ?Sized>(transport: &T, url: &Url) -> Result<QueryResult> {
    let body = transport.get(url)?;
    decode(&body)
}
