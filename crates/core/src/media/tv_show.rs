use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct TvShows;

impl MediaKind for TvShows {
    const MEDIA: Media = Media::TvShow;
    type Attribute = TvShowAttribute;
    type Entity = TvShowEntity;
}

pub type TvShowSearch = Search<TvShows>;

wire_enum! {
    pub enum TvShowAttribute {
        All => "",
        Genre => "genreIndex",
        Episode => "tvEpisodeTerm",
        Show => "showTerm",
        Season => "tvSeasonTerm",
        Rating => "ratingIndex",
        Description => "descriptionTerm",
    }
    default All;
}

wire_enum! {
    pub enum TvShowEntity {
        Default => "",
        Episode => "tvEpisode",
        Season => "tvSeason",
    }
    default Default;
}
