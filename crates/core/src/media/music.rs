use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct Music;

impl MediaKind for Music {
    const MEDIA: Media = Media::Music;
    type Attribute = MusicAttribute;
    type Entity = MusicEntity;
}

pub type MusicSearch = Search<Music>;

wire_enum! {
    pub enum MusicAttribute {
        All => "",
        Mix => "mixTerm",
        Genre => "genreIndex",
        Artist => "artistTerm",
        Composer => "composerTerm",
        Album => "albumTerm",
        Rating => "ratingIndex",
        Song => "songTerm",
    }
    default All;
}

wire_enum! {
    /// `Default` leaves the entity empty and the API returns tracks.
    pub enum MusicEntity {
        Default => "",
        Artist => "musicArtist",
        Track => "musicTrack",
        Album => "album",
        MusicVideo => "musicVideo",
        Mix => "mix",
        Song => "song",
    }
    default Default;
}
