//! Typed projections of result records.
//!
//! The client hands back raw JSON; these types are optional conveniences for
//! callers that want named fields instead.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A store genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// A podcast as returned by search and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    /// `collectionId`
    pub id: u64,
    /// `collectionName`
    pub name: String,
    pub artist_id: Option<u64>,
    pub artist_name: Option<String>,
    /// RSS feed of the show.
    pub feed_url: Option<String>,
    /// Number of episodes (`trackCount`).
    pub track_count: Option<u32>,
    pub genres: Vec<Genre>,
    /// Store page of the show.
    pub collection_view_url: Option<String>,
    /// Store page of the author.
    pub artist_view_url: Option<String>,
    pub artwork_url_30: Option<String>,
    pub artwork_url_60: Option<String>,
    pub artwork_url_100: Option<String>,
    pub artwork_url_600: Option<String>,
}

impl Podcast {
    /// Builds a podcast from one entry of a `results` array. Records that are
    /// not podcasts, or lack an id and name, are rejected.
    pub fn from_result(record: &Value) -> Result<Self, serde_json::Error> {
        let raw = RawPodcast::deserialize(record)?;
        if let Some(kind) = raw.kind.as_deref() {
            if kind != "podcast" {
                return Err(serde_json::Error::custom(format!(
                    "record kind is {:?}, not a podcast",
                    kind
                )));
            }
        }
        Ok(raw.into())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPodcast {
    kind: Option<String>,
    collection_id: u64,
    collection_name: String,
    artist_id: Option<u64>,
    artist_name: Option<String>,
    feed_url: Option<String>,
    track_count: Option<u32>,
    #[serde(default)]
    genre_ids: Vec<String>,
    #[serde(default)]
    genres: Vec<String>,
    collection_view_url: Option<String>,
    artist_view_url: Option<String>,
    artwork_url30: Option<String>,
    artwork_url60: Option<String>,
    artwork_url100: Option<String>,
    artwork_url600: Option<String>,
}

impl From<RawPodcast> for Podcast {
    fn from(raw: RawPodcast) -> Self {
        let genres = raw
            .genre_ids
            .iter()
            .zip(raw.genres)
            .filter_map(|(id, name)| match id.parse::<u32>() {
                Ok(id) => Some(Genre { id, name }),
                Err(e) => {
                    tracing::warn!(
                        podcast = %raw.collection_name,
                        raw_id = %id,
                        error = %e,
                        "Skipping genre with non-numeric id"
                    );
                    None
                }
            })
            .collect();

        Self {
            id: raw.collection_id,
            name: raw.collection_name,
            artist_id: raw.artist_id,
            artist_name: raw.artist_name,
            feed_url: raw.feed_url,
            track_count: raw.track_count,
            genres,
            collection_view_url: raw.collection_view_url,
            artist_view_url: raw.artist_view_url,
            artwork_url_30: raw.artwork_url30,
            artwork_url_60: raw.artwork_url60,
            artwork_url_100: raw.artwork_url100,
            artwork_url_600: raw.artwork_url600,
        }
    }
}
