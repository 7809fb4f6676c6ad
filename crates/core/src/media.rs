//! Media kinds and the per-media attribute and entity tables.
//!
//! Each media type is a zero-sized descriptor implementing [`MediaKind`]. The
//! descriptor names the `media` wire value and the attribute and entity enums
//! that are valid for it. [`crate::search::Search`] is generic over the
//! descriptor, so a podcast search only accepts podcast attributes.

use std::fmt;

/// A closed enum whose members map to fixed query-string values.
pub trait WireValue: Copy + Default + fmt::Debug + Send + Sync + 'static {
    fn wire_value(self) -> &'static str;
}

/// Per-media descriptor plugged into the generic search builder.
pub trait MediaKind {
    const MEDIA: Media;
    type Attribute: WireValue;
    type Entity: WireValue;
}

/// Declares a wire enum: variants, their query-string values and the default.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
        default $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::media::WireValue for $name {
            fn wire_value(self) -> &'static str {
                self.as_str()
            }
        }
    };
}

pub mod all;
pub mod audiobook;
pub mod ebook;
pub mod movie;
pub mod music;
pub mod music_video;
pub mod podcast;
pub mod short_film;
pub mod software;
pub mod tv_show;

pub use all::{AllMedia, MediaAttribute, MediaEntity, MediaSearch};
pub use audiobook::{AudioBookAttribute, AudioBookEntity, AudioBookSearch, AudioBooks};
pub use ebook::{EBookAttribute, EBookEntity, EBookSearch, EBooks};
pub use movie::{MovieAttribute, MovieEntity, MovieSearch, Movies};
pub use music::{Music, MusicAttribute, MusicEntity, MusicSearch};
pub use music_video::{MusicVideoAttribute, MusicVideoEntity, MusicVideoSearch, MusicVideos};
pub use podcast::{PodcastAttribute, PodcastEntity, PodcastSearch, Podcasts};
pub use short_film::{ShortFilmAttribute, ShortFilmEntity, ShortFilmSearch, ShortFilms};
pub use software::{Software, SoftwareAttribute, SoftwareEntity, SoftwareSearch};
pub use tv_show::{TvShowAttribute, TvShowEntity, TvShowSearch, TvShows};

wire_enum! {
    /// Value of the `media` query parameter.
    pub enum Media {
        All => "all",
        Movie => "movie",
        Music => "music",
        EBook => "ebook",
        TvShow => "tvShow",
        Podcast => "podcast",
        Software => "software",
        ShortFilm => "shortFilm",
        AudioBook => "audiobook",
        MusicVideo => "musicVideo",
    }
    default All;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_wire_values() {
        assert_eq!(Media::TvShow.as_str(), "tvShow");
        assert_eq!(Media::AudioBook.to_string(), "audiobook");
        assert_eq!(Media::default(), Media::All);
        assert_eq!(Media::VARIANTS.len(), 10);
    }

    #[test]
    fn test_descriptors_name_their_media() {
        assert_eq!(Podcasts::MEDIA, Media::Podcast);
        assert_eq!(Music::MEDIA, Media::Music);
        assert_eq!(Movies::MEDIA, Media::Movie);
        assert_eq!(TvShows::MEDIA, Media::TvShow);
        assert_eq!(AudioBooks::MEDIA, Media::AudioBook);
        assert_eq!(EBooks::MEDIA, Media::EBook);
        assert_eq!(ShortFilms::MEDIA, Media::ShortFilm);
        assert_eq!(Software::MEDIA, Media::Software);
        assert_eq!(MusicVideos::MEDIA, Media::MusicVideo);
        assert_eq!(AllMedia::MEDIA, Media::All);
    }

    #[test]
    fn test_default_attribute_matches_everything() {
        fn default_attr<M: MediaKind>() -> &'static str {
            M::Attribute::default().wire_value()
        }
        assert_eq!(default_attr::<Podcasts>(), "");
        assert_eq!(default_attr::<Music>(), "");
        assert_eq!(default_attr::<Movies>(), "");
        assert_eq!(default_attr::<Software>(), "");
        assert_eq!(default_attr::<AllMedia>(), "");
    }

    #[test]
    fn test_default_entities_vary_by_media() {
        fn default_entity<M: MediaKind>() -> &'static str {
            M::Entity::default().wire_value()
        }
        assert_eq!(default_entity::<Podcasts>(), "podcast");
        assert_eq!(default_entity::<AudioBooks>(), "audiobook");
        assert_eq!(default_entity::<Movies>(), "movie");
        assert_eq!(default_entity::<Music>(), "");
        assert_eq!(default_entity::<TvShows>(), "");
    }

    #[test]
    fn test_attribute_wire_values_are_unique_per_table() {
        fn unique(values: &[&'static str]) -> bool {
            let mut seen = std::collections::HashSet::new();
            values.iter().all(|v| seen.insert(*v))
        }
        let podcast: Vec<_> = PodcastAttribute::VARIANTS.iter().map(|a| a.as_str()).collect();
        let movie: Vec<_> = MovieAttribute::VARIANTS.iter().map(|a| a.as_str()).collect();
        let all: Vec<_> = MediaAttribute::VARIANTS.iter().map(|a| a.as_str()).collect();
        assert!(unique(&podcast));
        assert!(unique(&movie));
        assert!(unique(&all));
    }
}
