//! The search request builder, shared by every media type.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::config::ClientConfig;
use crate::endpoint;
use crate::error::{ItunesError, Result};
use crate::media::{Media, MediaKind, WireValue};
use crate::params::{explicit_flag, ApiVersion, Country, Language};
use crate::result::QueryResult;
use crate::transport::{fetch, HttpTransport, Transport};

/// A search against the iTunes Search API for media type `M`.
///
/// Setters consume and return the builder so calls can be chained;
/// [`Search::execute`] validates, assembles the URL and performs the request.
///
/// ```no_run
/// use itunes_search::PodcastSearch;
///
/// # fn example() -> itunes_search::Result<()> {
/// let response = PodcastSearch::new().with("radiolab").with_limit(5).execute()?;
/// println!("{} podcasts", response.results().map_or(0, |r| r.len()));
/// # Ok(())
/// # }
/// ```
pub struct Search<M: MediaKind> {
    term: Option<String>,
    country: Country,
    attribute: M::Attribute,
    entity: M::Entity,
    limit: u32,
    api_version: u32,
    allow_explicit: bool,
    language: Language,
    config: Arc<ClientConfig>,
    transport: Option<Arc<dyn Transport>>,
    search_url: Option<Url>,
}

impl<M: MediaKind> Search<M> {
    /// A search seeded from the built-in defaults.
    pub fn new() -> Self {
        Self::with_config(Arc::new(ClientConfig::default()))
    }

    /// A search seeded from `config`: endpoints, country, limit and language.
    pub fn with_config(config: Arc<ClientConfig>) -> Self {
        Self {
            term: None,
            country: config.defaults.country,
            attribute: M::Attribute::default(),
            entity: M::Entity::default(),
            limit: config.defaults.limit,
            api_version: ApiVersion::default().number(),
            allow_explicit: true,
            language: config.defaults.language,
            config,
            transport: None,
            search_url: None,
        }
    }

    /// Sets the term to search for. Required.
    pub fn with(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Maximum number of results to return.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Store to search in.
    pub fn in_country(mut self, country: Country) -> Self {
        self.country = country;
        self
    }

    /// Field the term is matched against.
    pub fn in_attribute(mut self, attribute: M::Attribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// Kind of record to return.
    pub fn and_return(mut self, entity: M::Entity) -> Self {
        self.entity = entity;
        self
    }

    /// API version, 1 or 2. Other numbers are accepted here and rejected by
    /// [`Search::validate`].
    pub fn with_api_version(mut self, version: impl Into<u32>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn allow_explicit(mut self, allow: bool) -> Self {
        self.allow_explicit = allow;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sends requests through `transport` instead of a fresh [`HttpTransport`].
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn media(&self) -> Media {
        M::MEDIA
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn attribute(&self) -> M::Attribute {
        self.attribute
    }

    pub fn entity(&self) -> M::Entity {
        self.entity
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn explicit_allowed(&self) -> bool {
        self.allow_explicit
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// URL of the last executed request, if any.
    pub fn search_url(&self) -> Option<&Url> {
        self.search_url.as_ref()
    }

    /// Checks the parameters that must be valid before a request is sent.
    pub fn validate(&self) -> Result<()> {
        match self.term.as_deref() {
            Some(term) if !term.is_empty() => {}
            _ => {
                return Err(ItunesError::MissingRequiredParameter(
                    "search execution failed: missing search term".to_string(),
                ))
            }
        }
        ApiVersion::from_number(self.api_version)?;
        Ok(())
    }

    /// Query parameters in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("term", self.term.clone().unwrap_or_default()),
            ("country", self.country.alpha2()),
            ("media", M::MEDIA.as_str().to_string()),
            ("entity", self.entity.wire_value().to_string()),
            ("attributeType", self.attribute.wire_value().to_string()),
            ("limit", self.limit.to_string()),
            ("lang", self.language.as_str().to_string()),
            ("version", self.api_version.to_string()),
            ("explicit", explicit_flag(self.allow_explicit).to_string()),
        ]
    }

    /// Validates and assembles the request URL without sending anything.
    pub fn build_url(&self) -> Result<Url> {
        self.validate()?;
        endpoint::assemble(&self.config.endpoints.search, &self.query_pairs())
    }

    /// Runs the search. The URL is recorded in [`Search::search_url`] before
    /// the request is sent.
    pub fn execute(&mut self) -> Result<QueryResult> {
        let url = self.build_url()?;
        self.search_url = Some(url.clone());
        tracing::debug!(media = %M::MEDIA, %url, "Executing search");

        let transport: Arc<dyn Transport> = match &self.transport {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(HttpTransport::new(&self.config.http)?),
        };
        fetch(transport.as_ref(), &url)
    }
}

impl<M: MediaKind> Default for Search<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MediaKind> fmt::Debug for Search<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("media", &M::MEDIA)
            .field("term", &self.term)
            .field("country", &self.country)
            .field("attribute", &self.attribute)
            .field("entity", &self.entity)
            .field("limit", &self.limit)
            .field("api_version", &self.api_version)
            .field("allow_explicit", &self.allow_explicit)
            .field("language", &self.language)
            .field("search_url", &self.search_url.as_ref().map(Url::as_str))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::*;
    use crate::test_support::CannedTransport;
    use pretty_assertions::assert_eq;

    fn missing_term<M: MediaKind>() -> bool {
        matches!(
            Search::<M>::new().execute(),
            Err(ItunesError::MissingRequiredParameter(_))
        )
    }

    #[test]
    fn test_execute_without_term_fails_for_every_media() {
        assert!(missing_term::<Podcasts>());
        assert!(missing_term::<Music>());
        assert!(missing_term::<Movies>());
        assert!(missing_term::<TvShows>());
        assert!(missing_term::<AudioBooks>());
        assert!(missing_term::<EBooks>());
        assert!(missing_term::<ShortFilms>());
        assert!(missing_term::<Software>());
        assert!(missing_term::<MusicVideos>());
        assert!(missing_term::<AllMedia>());
    }

    #[test]
    fn test_empty_term_is_missing() {
        let result = PodcastSearch::new().with("").execute();
        assert!(matches!(result, Err(ItunesError::MissingRequiredParameter(_))));
    }

    #[test]
    fn test_missing_term_checked_before_version() {
        let result = PodcastSearch::new().with_api_version(7u32).validate();
        assert!(matches!(result, Err(ItunesError::MissingRequiredParameter(_))));
    }

    #[test]
    fn test_out_of_range_versions_are_invalid() {
        for version in [0u32, 3, 42] {
            let transport = Arc::new(CannedTransport::new("{}"));
            let mut search = MovieSearch::new()
                .with("up")
                .with_api_version(version)
                .with_transport(transport.clone());
            let result = search.execute();
            assert!(matches!(result, Err(ItunesError::InvalidParameter(_))));
            assert!(transport.requests().is_empty(), "no request for version {}", version);
            assert!(search.search_url().is_none());
        }
    }

    #[test]
    fn test_versions_one_and_two_execute() {
        for version in [ApiVersion::One, ApiVersion::Two] {
            let transport = Arc::new(CannedTransport::new(r#"{"resultCount":0,"results":[]}"#));
            let result = MusicSearch::new()
                .with("jack johnson")
                .with_api_version(version)
                .with_transport(transport.clone())
                .execute();
            assert!(result.is_ok());
            let requests = transport.requests();
            let expected = format!("version={}", version.number());
            assert!(requests[0].query().unwrap().contains(&expected));
        }
    }

    #[test]
    fn test_default_query_pairs() {
        let search = PodcastSearch::new().with("radiolab");
        let pairs = search.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("term", "radiolab".to_string()),
                ("country", "US".to_string()),
                ("media", "podcast".to_string()),
                ("entity", "podcast".to_string()),
                ("attributeType", "".to_string()),
                ("limit", "50".to_string()),
                ("lang", "en_us".to_string()),
                ("version", "2".to_string()),
                ("explicit", "Yes".to_string()),
            ]
        );
    }

    #[test]
    fn test_radiolab_example_url() {
        let url = PodcastSearch::new().with("radiolab").with_limit(5).build_url().unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("term=radiolab"));
        assert!(query.contains("limit=5"));
        assert!(query.contains("media=podcast"));
        assert_eq!(url.path(), "/search");
        assert_eq!(url.host_str(), Some("itunes.apple.com"));
    }

    #[test]
    fn test_configured_parameters_reach_the_url() {
        let url = TvShowSearch::new()
            .with("the office")
            .in_country(Country::GB)
            .in_attribute(TvShowAttribute::Episode)
            .and_return(TvShowEntity::Episode)
            .with_language(Language::Japanese)
            .allow_explicit(false)
            .build_url()
            .unwrap();
        assert_eq!(
            url.query(),
            Some(
                "term=the+office&country=GB&media=tvShow&entity=tvEpisode\
                 &attributeType=tvEpisodeTerm&limit=50&lang=ja_jp&version=2&explicit=No"
            )
        );
    }

    #[test]
    fn test_call_order_does_not_matter() {
        let a = SoftwareSearch::new()
            .with("editor")
            .with_limit(5)
            .in_attribute(SoftwareAttribute::Developer);
        let b = SoftwareSearch::new()
            .in_attribute(SoftwareAttribute::Developer)
            .with_limit(5)
            .with("editor");
        assert_eq!(a.query_pairs(), b.query_pairs());
    }

    #[test]
    fn test_later_setter_wins() {
        let search = AudioBookSearch::new().with("dune").with("foundation").with_limit(3).with_limit(8);
        assert_eq!(search.term(), Some("foundation"));
        assert_eq!(search.limit(), 8);
    }

    #[test]
    fn test_execute_records_url_and_returns_document() {
        let transport = Arc::new(CannedTransport::new(
            r#"{"resultCount":1,"results":[{"kind":"podcast","collectionId":1,"collectionName":"Radiolab"}]}"#,
        ));
        let mut search = PodcastSearch::new()
            .with("radiolab")
            .with_limit(5)
            .with_transport(transport.clone());
        let result = search.execute().unwrap();

        assert_eq!(result.results().map(<[serde_json::Value]>::len), Some(1));
        assert_eq!(search.search_url(), Some(&transport.requests()[0]));
    }

    #[test]
    fn test_execute_propagates_network_failure() {
        let transport = Arc::new(CannedTransport::failing("connection refused"));
        let mut search = EBookSearch::new().with("dune").with_transport(transport);
        let result = search.execute();
        assert!(matches!(result, Err(ItunesError::NetworkCommunication(_))));
        assert!(search.search_url().is_some());
    }

    #[test]
    fn test_config_seeds_defaults_and_endpoint() {
        let mut config = ClientConfig::default();
        config.defaults.country = Country::NG;
        config.defaults.limit = 7;
        config.endpoints.search = "http://localhost:1234/search".to_string();
        let search = ShortFilmSearch::with_config(Arc::new(config)).with("paperman");

        assert_eq!(search.country(), Country::NG);
        assert_eq!(search.limit(), 7);
        let url = search.build_url().unwrap();
        assert!(url.as_str().starts_with("http://localhost:1234/search?term=paperman&country=NG"));
    }

    #[test]
    fn test_bad_endpoint_is_url_construction_failure() {
        let mut config = ClientConfig::default();
        config.endpoints.search = "not a url".to_string();
        let result = MusicVideoSearch::with_config(Arc::new(config)).with("x").build_url();
        assert!(matches!(result, Err(ItunesError::UrlConstruction(_))));
    }

    #[test]
    fn test_getters_reflect_setters() {
        let search = MediaSearch::new()
            .with("love")
            .in_attribute(MediaAttribute::Song)
            .and_return(MediaEntity::AllTrack)
            .with_api_version(ApiVersion::One);
        assert_eq!(search.media(), Media::All);
        assert_eq!(search.attribute(), MediaAttribute::Song);
        assert_eq!(search.entity(), MediaEntity::AllTrack);
        assert_eq!(search.api_version(), 1);
        assert!(search.explicit_allowed());
        assert_eq!(search.language(), Language::English);
    }

    #[test]
    fn test_debug_output_names_media() {
        let search = PodcastSearch::new().with("radiolab");
        let debug = format!("{:?}", search);
        assert!(debug.contains("Podcast"));
        assert!(debug.contains("radiolab"));
    }
}
