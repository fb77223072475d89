//! Type definitions for binary VDF format.

/// Tag byte values recognized by the binary VDF format.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Start of a nested map (key follows, then the map's items).
    MapStart = 0x00,
    /// String value (null-terminated).
    String = 0x01,
    /// 32-bit unsigned integer value, little-endian.
    Number = 0x02,
    /// End of map marker. Carries no key and no payload.
    MapEnd = 0x08,
}

impl Tag {
    /// Attempts to convert a byte to a `Tag`.
    ///
    /// Returns `None` if the byte doesn't correspond to a known tag.
    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0x00 => Some(Tag::MapStart),
            0x01 => Some(Tag::String),
            0x02 => Some(Tag::Number),
            0x08 => Some(Tag::MapEnd),
            _ => None,
        }
    }

    /// Returns the wire byte for this tag.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag.as_byte()
    }
}
