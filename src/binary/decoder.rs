//! Binary VDF decoder.
//!
//! Format:
//! - Each entry starts with a tag byte
//! - Tag 0x00: Map start (key is the map name, then its entries)
//! - Tag 0x01: String value
//! - Tag 0x02: Number value (u32, little-endian)
//! - Tag 0x08: Map end (no key, no payload)
//!
//! All keys and strings are null-terminated. A document is the entries of
//! an implicit top-level map followed by its 0x08.

use tracing::{debug, trace};

use crate::binary::config::DecodeConfig;
use crate::binary::cursor::Cursor;
use crate::binary::types::Tag;
use crate::error::{DecodeError, Result};
use crate::value::{Entries, Key, Value, VdfStr};

/// One decoded map entry, or the end of the enclosing map.
///
/// Produced by [`decode_item`]; `name` and `value` are both `None` exactly
/// when `tag` is [`Tag::MapEnd`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapItem<'a> {
    /// The tag byte that introduced this item.
    pub tag: Tag,
    /// The entry key.
    pub name: Option<Key<'a>>,
    /// The entry value.
    pub value: Option<Value<'a>>,
}

impl<'a> MapItem<'a> {
    fn map_end() -> Self {
        Self {
            tag: Tag::MapEnd,
            name: None,
            value: None,
        }
    }

    fn entry(tag: Tag, name: Key<'a>, value: Value<'a>) -> Self {
        Self {
            tag,
            name: Some(name),
            value: Some(value),
        }
    }

    /// Returns `true` if this item terminates a map.
    pub fn is_map_end(&self) -> bool {
        self.tag == Tag::MapEnd
    }
}

/// Decode a binary VDF document with the default configuration.
///
/// Keys and strings are borrowed from `input`; use
/// [`Entries::into_owned`] to detach the result. Bytes after the top-level
/// map's end marker are ignored.
pub fn decode(input: &[u8]) -> Result<Entries<'_>> {
    decode_with_config(input, &DecodeConfig::default())
}

/// Decode a binary VDF document with the given configuration.
pub fn decode_with_config<'a>(input: &'a [u8], config: &DecodeConfig) -> Result<Entries<'a>> {
    decode_partial(input, config).map(|(entries, _consumed)| entries)
}

/// Decode the top-level map and report how many bytes it occupied.
///
/// Useful when a binary VDF blob is embedded in a larger buffer.
pub fn decode_partial<'a>(input: &'a [u8], config: &DecodeConfig) -> Result<(Entries<'a>, usize)> {
    let mut cursor = Cursor::new(input);
    let entries = decode_map(&mut cursor, config)?;
    let consumed = cursor.position();

    if consumed < input.len() {
        trace!(
            trailing = input.len() - consumed,
            "ignoring bytes after top-level map"
        );
    }
    debug!(entries = entries.len(), consumed, "decoded binary VDF");

    Ok((entries, consumed))
}

/// Decode map entries from the cursor up to and including the map end tag.
///
/// The cursor is treated as being at the top level (depth 0).
pub fn decode_map<'a>(cursor: &mut Cursor<'a>, config: &DecodeConfig) -> Result<Entries<'a>> {
    decode_map_at(cursor, config, 0)
}

/// Decode a single item: one entry, or the map end marker.
pub fn decode_item<'a>(cursor: &mut Cursor<'a>, config: &DecodeConfig) -> Result<MapItem<'a>> {
    decode_item_at(cursor, config, 0)
}

fn decode_map_at<'a>(
    cursor: &mut Cursor<'a>,
    config: &DecodeConfig,
    depth: usize,
) -> Result<Entries<'a>> {
    let mut entries = Entries::new();

    // Every item consumes at least its tag byte, so this terminates.
    loop {
        let item = decode_item_at(cursor, config, depth)?;
        let MapItem {
            name: Some(name),
            value: Some(value),
            ..
        } = item
        else {
            return Ok(entries);
        };

        if entries.contains_key(&name) {
            trace!(key = %name, depth, "duplicate key, last value wins");
        }
        entries.insert(name, value);
    }
}

fn decode_item_at<'a>(
    cursor: &mut Cursor<'a>,
    config: &DecodeConfig,
    depth: usize,
) -> Result<MapItem<'a>> {
    let offset = cursor.position();
    let byte = cursor.peek_tag()?;
    let tag = Tag::from_byte(byte).ok_or(DecodeError::unrecognized_tag(byte, offset))?;

    match tag {
        Tag::MapEnd => Ok(MapItem::map_end()),
        Tag::MapStart => {
            let name = VdfStr::borrowed(cursor.read_cstring()?);
            if depth >= config.max_depth {
                return Err(DecodeError::DepthExceeded {
                    max_depth: config.max_depth,
                    offset,
                });
            }
            trace!(key = %name, depth = depth + 1, "entering nested map");
            let map = decode_map_at(cursor, config, depth + 1)?;
            Ok(MapItem::entry(tag, name, Value::Map(map)))
        }
        Tag::String => {
            let name = VdfStr::borrowed(cursor.read_cstring()?);
            let value = VdfStr::borrowed(cursor.read_cstring()?);
            Ok(MapItem::entry(tag, name, Value::Str(value)))
        }
        Tag::Number => {
            let name = VdfStr::borrowed(cursor.read_cstring()?);
            let value = cursor.read_u32_le()?;
            Ok(MapItem::entry(tag, name, Value::Number(value)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read_test_bytes() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"\x01key1\x00value1\x00");
        data.extend_from_slice(b"\x02key2\x00\x03\x00\x00\x00");
        data.extend_from_slice(b"\x00key3\x00");
        data.extend_from_slice(b"\x01key4\x00value2\x00");
        data.extend_from_slice(b"\x01key5\x00value3\x00");
        data.extend_from_slice(b"\x08\x08");
        data
    }

    #[test]
    fn test_decode_item_string() {
        let mut cursor = Cursor::new(b"\x01key\x00value\x00");
        let item = decode_item(&mut cursor, &DecodeConfig::default()).unwrap();
        assert_eq!(
            item,
            MapItem {
                tag: Tag::String,
                name: Some("key".into()),
                value: Some("value".into()),
            }
        );
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_decode_item_number() {
        let mut cursor = Cursor::new(b"\x02key\x00\x03\x00\x00\x00");
        let item = decode_item(&mut cursor, &DecodeConfig::default()).unwrap();
        assert_eq!(item.tag, Tag::Number);
        assert_eq!(item.name, Some("key".into()));
        assert_eq!(item.value, Some(Value::Number(3)));
    }

    #[test]
    fn test_decode_item_map() {
        let mut cursor = Cursor::new(b"\x00key1\x00\x01key2\x00value1\x00\x01key3\x00value2\x00\x08");
        let item = decode_item(&mut cursor, &DecodeConfig::default()).unwrap();

        let expected: Entries = [("key2", "value1"), ("key3", "value2")].into_iter().collect();
        assert_eq!(item.tag, Tag::MapStart);
        assert_eq!(item.name, Some("key1".into()));
        assert_eq!(item.value, Some(Value::Map(expected)));
    }

    #[test]
    fn test_decode_item_map_end() {
        let mut cursor = Cursor::new(&[0x08, 0xff]);
        let item = decode_item(&mut cursor, &DecodeConfig::default()).unwrap();
        assert!(item.is_map_end());
        assert_eq!(item.name, None);
        assert_eq!(item.value, None);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_decode_nested_map() {
        let data = read_test_bytes();
        let entries = decode(&data).unwrap();

        let mut key3 = Entries::new();
        key3.insert("key4", "value2");
        key3.insert("key5", "value3");
        let mut expected = Entries::new();
        expected.insert("key1", "value1");
        expected.insert("key2", 3u32);
        expected.insert("key3", key3);

        assert_eq!(entries, expected);
    }

    #[test]
    fn test_decode_preserves_wire_order() {
        let data = read_test_bytes();
        let entries = decode(&data).unwrap();
        let keys: Vec<_> = entries.keys().map(|k| k.as_str().unwrap()).collect();
        assert_eq!(keys, ["key1", "key2", "key3"]);
    }

    #[test]
    fn test_decode_is_zero_copy() {
        let data = read_test_bytes();
        let entries = decode(&data).unwrap();
        let (key, value) = entries.iter().next().unwrap();
        assert!(key.is_borrowed());
        assert!(value.as_vdf_str().unwrap().is_borrowed());
    }

    #[test]
    fn test_decode_empty_document() {
        assert_eq!(decode(&[0x08]).unwrap(), Entries::new());
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let data = b"\x01key1\x00value1\x00\x02key2\x00\x03\x00\x00\x00\x08\x01key3\x00";
        let (entries, consumed) = decode_partial(data, &DecodeConfig::default()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(consumed, data.len() - 6);
    }

    #[test]
    fn test_decode_duplicate_keys_last_wins() {
        let data = b"\x01a\x00one\x00\x02b\x00\x01\x00\x00\x00\x01a\x00two\x00\x08";
        let entries = decode(data).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("a").and_then(Value::as_str), Some("two"));
        // The overwritten key keeps its first position
        assert_eq!(entries.keys().next().map(|k| k.as_bytes()), Some(&b"a"[..]));
    }

    #[test]
    fn test_decode_non_utf8_string() {
        let data = b"\x01k\x00\xff\xfe\x00\x08";
        let entries = decode(data).unwrap();
        let value = entries.get("k").unwrap();
        assert_eq!(value.as_bytes(), Some(&[0xff, 0xfe][..]));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_decode_missing_tag() {
        let err = decode(&[]).unwrap_err();
        assert_eq!(err, DecodeError::unexpected_eof("reading tag byte", 0));

        // Map never closed
        let err = decode(b"\x01key\x00value\x00").unwrap_err();
        assert_eq!(err, DecodeError::unexpected_eof("reading tag byte", 11));
    }

    #[test]
    fn test_decode_truncated_string() {
        let err = decode(b"\x01key\x00val").unwrap_err();
        assert_eq!(
            err,
            DecodeError::unexpected_eof("reading null-terminated string", 5)
        );

        let err = decode(b"\x01ke").unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn test_decode_truncated_number() {
        let err = decode(b"\x02key\x00\x03\x00\x00").unwrap_err();
        assert_eq!(err, DecodeError::unexpected_eof("reading u32", 5));
    }

    #[test]
    fn test_decode_unrecognized_tag() {
        let err = decode(&[0x03, b'k', 0x00, 0, 0, 0x80, 0x3f, 0x08]).unwrap_err();
        assert_eq!(err, DecodeError::unrecognized_tag(0x03, 0));

        // Unknown tag inside a nested map reports its absolute offset
        let err = decode(b"\x00m\x00\x07k\x00").unwrap_err();
        assert_eq!(err, DecodeError::unrecognized_tag(0x07, 3));
    }

    #[test]
    fn test_decode_depth_limit() {
        // "a" { "b" { } }
        let data = b"\x00a\x00\x00b\x00\x08\x08\x08";
        assert!(decode_with_config(data, &DecodeConfig::new().with_max_depth(2)).is_ok());

        let err = decode_with_config(data, &DecodeConfig::new().with_max_depth(1)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::DepthExceeded {
                max_depth: 1,
                offset: 3
            }
        );
    }

    #[test]
    fn test_decode_hostile_nesting_fails_cleanly() {
        let mut data = Vec::new();
        for _ in 0..100_000 {
            data.extend_from_slice(b"\x00n\x00");
        }
        let err = decode(&data).unwrap_err();
        assert!(matches!(err, DecodeError::DepthExceeded { max_depth: 256, .. }));
    }
}
