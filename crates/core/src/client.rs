//! A client that shares one configuration and transport across requests.

use std::fmt;
use std::sync::Arc;

use crate::config::{load_config, ClientConfig};
use crate::error::{ItunesError, Result};
use crate::lookup::{Chart, LookupRequest, PodcastGenre};
use crate::media::MediaKind;
use crate::params::Country;
use crate::result::QueryResult;
use crate::search::Search;
use crate::transport::{fetch, HttpTransport, Transport};

/// Entry point for searches, id lookups and chart feeds.
///
/// Cloning is cheap; clones share the configuration and the transport.
#[derive(Clone)]
pub struct ItunesClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl ItunesClient {
    /// A client using the config file at the default location, if present.
    pub fn new() -> Result<Self> {
        Self::from_config(load_config())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.http)?;
        Ok(Self::with_transport(config, transport))
    }

    /// A client that sends every request through `transport`.
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A search builder seeded with this client's defaults and transport.
    pub fn search<M: MediaKind>(&self) -> Search<M> {
        Search::with_config(Arc::clone(&self.config)).with_transport(Arc::clone(&self.transport))
    }

    /// Runs `request`. An id lookup that matches nothing fails with
    /// [`ItunesError::NoMatchFound`]; chart responses are returned as decoded.
    pub fn lookup(&self, request: &LookupRequest) -> Result<QueryResult> {
        let url = request.url(&self.config.endpoints)?;
        tracing::debug!(?request, %url, "Executing lookup");
        let result = fetch(self.transport.as_ref(), &url)?;

        if let LookupRequest::Id(id) = *request {
            let results = result.results().ok_or_else(|| {
                ItunesError::NetworkCommunication(format!(
                    "lookup response for id {} has no results array",
                    id
                ))
            })?;
            if results.is_empty() {
                tracing::debug!(id, "Lookup matched nothing");
                return Err(ItunesError::NoMatchFound { id });
            }
        }
        Ok(result)
    }

    pub fn lookup_by_id(&self, id: u64) -> Result<QueryResult> {
        self.lookup(&LookupRequest::Id(id))
    }

    /// Fetches a chart feed. `None` falls back to the configured country and
    /// chart limit.
    pub fn chart(&self, chart: Chart, country: Option<Country>, limit: Option<u32>) -> Result<QueryResult> {
        let defaults = &self.config.defaults;
        self.lookup(&LookupRequest::Chart {
            chart,
            country: country.unwrap_or(defaults.country),
            limit: limit.unwrap_or(defaults.chart_limit),
        })
    }

    pub fn top_podcasts(&self, country: Option<Country>, limit: Option<u32>) -> Result<QueryResult> {
        self.chart(Chart::TopPodcasts, country, limit)
    }

    pub fn top_songs(&self, country: Option<Country>, limit: Option<u32>) -> Result<QueryResult> {
        self.chart(Chart::TopSongs, country, limit)
    }

    pub fn top_free_books(&self, country: Option<Country>, limit: Option<u32>) -> Result<QueryResult> {
        self.chart(Chart::TopFreeBooks, country, limit)
    }

    pub fn top_paid_books(&self, country: Option<Country>, limit: Option<u32>) -> Result<QueryResult> {
        self.chart(Chart::TopPaidBooks, country, limit)
    }

    pub fn top_movies(&self, country: Option<Country>, limit: Option<u32>) -> Result<QueryResult> {
        self.chart(Chart::TopMovies, country, limit)
    }

    /// Podcasts in `genre`, ranked by the search endpoint.
    pub fn podcast_genre(&self, genre: PodcastGenre, limit: Option<u32>) -> Result<QueryResult> {
        self.lookup(&LookupRequest::PodcastGenre {
            genre,
            limit: limit.unwrap_or(self.config.defaults.chart_limit),
        })
    }
}

impl fmt::Debug for ItunesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItunesClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
