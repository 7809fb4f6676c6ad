use super::{Media, MediaKind};
use crate::search::Search;

#[derive(Debug, Clone, Copy, Default)]
pub struct Software;

impl MediaKind for Software {
    const MEDIA: Media = Media::Software;
    type Attribute = SoftwareAttribute;
    type Entity = SoftwareEntity;
}

pub type SoftwareSearch = Search<Software>;

wire_enum! {
    pub enum SoftwareAttribute {
        All => "",
        Developer => "softwareDeveloper",
    }
    default All;
}

wire_enum! {
    /// `Default` returns iPhone apps.
    pub enum SoftwareEntity {
        Default => "",
        Software => "software",
        IPadSoftware => "iPadSoftware",
        MacSoftware => "macSoftware",
    }
    default Default;
}
