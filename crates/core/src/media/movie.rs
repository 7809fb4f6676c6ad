use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct Movies;

impl MediaKind for Movies {
    const MEDIA: Media = Media::Movie;
    type Attribute = MovieAttribute;
    type Entity = MovieEntity;
}

pub type MovieSearch = Search<Movies>;

wire_enum! {
    pub enum MovieAttribute {
        All => "",
        Movie => "movieTerm",
        Actor => "actorTerm",
        Genre => "genreIndex",
        Artist => "artistTerm",
        Producer => "producerTerm",
        Director => "directorTerm",
        RatingTerm => "ratingTerm",
        ShortFilm => "shortFilmTerm",
        RatingIndex => "ratingIndex",
        Description => "descriptionTerm",
        ReleaseYear => "releaseYearTerm",
        FeatureFilm => "featureFilmTerm",
        MovieArtist => "movieArtistTerm",
    }
    default All;
}

wire_enum! {
    pub enum MovieEntity {
        Movie => "movie",
        MovieArtist => "movieArtist",
    }
    default Movie;
}
