//! Lookup by id and curated chart requests.

use url::Url;

use crate::config::EndpointConfig;
use crate::endpoint;
use crate::error::Result;
use crate::params::Country;

/// Chart feeds served by the RSS endpoint.
///
/// The country goes into the feed path in lowercase (`us`), unlike search
/// queries which send it uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chart {
    TopPodcasts,
    TopSongs,
    TopFreeBooks,
    TopPaidBooks,
    TopMovies,
}

impl Chart {
    /// First path segment after the country.
    pub fn category(self) -> &'static str {
        match self {
            Chart::TopPodcasts => "podcasts",
            Chart::TopSongs => "itunes-music",
            Chart::TopFreeBooks | Chart::TopPaidBooks => "books",
            Chart::TopMovies => "movies",
        }
    }

    /// Feed name within the category.
    pub fn feed(self) -> &'static str {
        match self {
            Chart::TopPodcasts => "top-podcasts",
            Chart::TopSongs => "top-songs",
            Chart::TopFreeBooks => "top-free",
            Chart::TopPaidBooks => "top-paid",
            Chart::TopMovies => "top-movies",
        }
    }
}

/// Podcast genres with a dedicated chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodcastGenre {
    /// The root podcast category.
    All,
    Comedy,
    NewsAndPolitics,
    SocietyAndCulture,
}

impl PodcastGenre {
    pub fn id(self) -> u32 {
        match self {
            PodcastGenre::All => 26,
            PodcastGenre::Comedy => 1303,
            PodcastGenre::NewsAndPolitics => 1311,
            PodcastGenre::SocietyAndCulture => 1324,
        }
    }
}

/// A request that skips the search builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Any store item by its numeric id (track, collection or artist id).
    Id(u64),
    Chart {
        chart: Chart,
        country: Country,
        limit: u32,
    },
    /// Podcasts in a genre, ranked by the search endpoint.
    PodcastGenre { genre: PodcastGenre, limit: u32 },
}

impl LookupRequest {
    pub fn url(&self, endpoints: &EndpointConfig) -> Result<Url> {
        match *self {
            LookupRequest::Id(id) => endpoint::lookup_url(&endpoints.lookup, id),
            LookupRequest::Chart {
                chart,
                country,
                limit,
            } => endpoint::chart_url(&endpoints.charts, country, chart, limit),
            LookupRequest::PodcastGenre { genre, limit } => endpoint::assemble(
                &endpoints.search,
                &[
                    ("term", "podcast".to_string()),
                    ("limit", limit.to_string()),
                    ("genreId", genre.id().to_string()),
                ],
            ),
        }
    }
}
