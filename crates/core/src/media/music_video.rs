use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct MusicVideos;

impl MediaKind for MusicVideos {
    const MEDIA: Media = Media::MusicVideo;
    type Attribute = MusicVideoAttribute;
    type Entity = MusicVideoEntity;
}

pub type MusicVideoSearch = Search<MusicVideos>;

wire_enum! {
    pub enum MusicVideoAttribute {
        All => "",
        Genre => "genreIndex",
        Artist => "artistTerm",
        Album => "albumTerm",
        Rating => "ratingIndex",
        Song => "songTerm",
    }
    default All;
}

wire_enum! {
    pub enum MusicVideoEntity {
        Default => "",
        Artist => "musicArtist",
        MusicVideo => "musicVideo",
    }
    default Default;
}
