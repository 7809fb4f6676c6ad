use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct EBooks;

impl MediaKind for EBooks {
    const MEDIA: Media = Media::EBook;
    type Attribute = EBookAttribute;
    type Entity = EBookEntity;
}

pub type EBookSearch = Search<EBooks>;

wire_enum! {
    pub enum EBookAttribute {
        All => "",
        Title => "titleTerm",
        Author => "authorTerm",
        Genre => "genreIndex",
        Rating => "ratingIndex",
    }
    default All;
}

wire_enum! {
    pub enum EBookEntity {
        Default => "",
        EBook => "ebook",
    }
    default Default;
}
