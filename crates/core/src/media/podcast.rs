use super::{Media, MediaKind};
use crate::search::Search;

/// Podcast descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Podcasts;

impl MediaKind for Podcasts {
    const MEDIA: Media = Media::Podcast;
    type Attribute = PodcastAttribute;
    type Entity = PodcastEntity;
}

pub type PodcastSearch = Search<Podcasts>;

wire_enum! {
    /// Podcast field the search term is matched against.
    pub enum PodcastAttribute {
        All => "",
        Title => "titleTerm",
        Language => "languageTerm",
        Author => "authorTerm",
        Genre => "genreIndex",
        Artist => "artistTerm",
        Rating => "ratingIndex",
        Keywords => "keywordsTerm",
        Description => "descriptionTerm",
    }
    default All;
}

wire_enum! {
    /// Records returned by a podcast search: the shows or their authors.
    pub enum PodcastEntity {
        Podcast => "podcast",
        PodcastAuthor => "podcastAuthor",
    }
    default Podcast;
}
