use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct AudioBooks;

impl MediaKind for AudioBooks {
    const MEDIA: Media = Media::AudioBook;
    type Attribute = AudioBookAttribute;
    type Entity = AudioBookEntity;
}

pub type AudioBookSearch = Search<AudioBooks>;

wire_enum! {
    pub enum AudioBookAttribute {
        All => "",
        Title => "titleTerm",
        Author => "authorTerm",
        Genre => "genreIndex",
        Rating => "ratingIndex",
    }
    default All;
}

wire_enum! {
    pub enum AudioBookEntity {
        AudioBook => "audiobook",
        Author => "audiobookAuthor",
    }
    default AudioBook;
}
