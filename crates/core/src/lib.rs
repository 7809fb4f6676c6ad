//! Client for the iTunes Search and Lookup APIs.
//!
//! Searches are built per media type ([`PodcastSearch`], [`MusicSearch`], ...)
//! and executed with one blocking GET. [`ItunesClient`] adds id lookups and
//! the curated chart feeds on top of a shared configuration and transport.

pub mod media;

pub mod client;
pub mod config;
pub mod endpoint;
pub mod entities;
pub mod error;
pub mod lookup;
pub mod params;
pub mod result;
pub mod search;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::ItunesClient;
pub use config::ClientConfig;
pub use entities::{Genre, Podcast};
pub use error::{ConfigError, ItunesError, Result};
pub use lookup::{Chart, LookupRequest, PodcastGenre};
pub use media::*;
pub use params::{ApiVersion, Country, Language};
pub use result::QueryResult;
pub use search::Search;
pub use transport::{HttpTransport, Transport};
