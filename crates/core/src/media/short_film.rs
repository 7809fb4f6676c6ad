use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortFilms;

impl MediaKind for ShortFilms {
    const MEDIA: Media = Media::ShortFilm;
    type Attribute = ShortFilmAttribute;
    type Entity = ShortFilmEntity;
}

pub type ShortFilmSearch = Search<ShortFilms>;

wire_enum! {
    pub enum ShortFilmAttribute {
        All => "",
        Genre => "genreIndex",
        Artist => "artistTerm",
        ShortFilm => "shortFilmTerm",
        Rating => "ratingIndex",
        Description => "descriptionTerm",
    }
    default All;
}

wire_enum! {
    pub enum ShortFilmEntity {
        Default => "",
        Artist => "shortFilmArtist",
        ShortFilm => "shortFilm",
    }
    default Default;
}
