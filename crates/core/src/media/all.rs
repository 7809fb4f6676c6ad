//! Searches across every media type (`media=all`).

use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct AllMedia;

impl MediaKind for AllMedia {
    const MEDIA: Media = Media::All;
    type Attribute = MediaAttribute;
    type Entity = MediaEntity;
}

pub type MediaSearch = Search<AllMedia>;

wire_enum! {
    /// Union of the attributes accepted by the individual media types.
    pub enum MediaAttribute {
        All => "",
        Mix => "mixTerm",
        Song => "songTerm",
        Show => "showTerm",
        Movie => "movieTerm",
        Album => "albumTerm",
        Title => "titleTerm",
        Genre => "genreIndex",
        Author => "authorTerm",
        Artist => "artistTerm",
        Actor => "actorTerm",
        Composer => "composerTerm",
        Keywords => "keywordsTerm",
        Director => "directorTerm",
        Producer => "producerTerm",
        RatingTerm => "ratingTerm",
        AllTrack => "allTrackTerm",
        TvSeason => "tvSeasonTerm",
        AllArtist => "allArtistTerm",
        TvEpisode => "tvEpisodeTerm",
        ShortFilm => "shortFilmTerm",
        RatingIndex => "ratingIndex",
        Language => "languageTerm",
        Description => "descriptionTerm",
        ReleaseYear => "releaseYearTerm",
        FeatureFilm => "featureFilmTerm",
        MovieArtist => "movieArtistTerm",
    }
    default All;
}

wire_enum! {
    pub enum MediaEntity {
        Default => "",
        Mix => "mix",
        Movie => "movie",
        Album => "album",
        Podcast => "podcast",
        MusicVideo => "musicVideo",
        TvSeason => "tvSeason",
        AllTrack => "allTrack",
        AllArtist => "allArtist",
        AudioBook => "audiobook",
    }
    default Default;
}
