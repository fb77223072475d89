//! Binary VDF encoder.
//!
//! Writes entries in map iteration order; every map, including the
//! top-level one, is terminated by a 0x08 byte so the output decodes back
//! to an equal tree.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::binary::config::EncodeConfig;
use crate::binary::types::Tag;
use crate::error::EncodeError;
use crate::value::{Entries, Value};

/// Encode a map as a binary VDF document with the default configuration.
pub fn encode(entries: &Entries<'_>) -> Result<Vec<u8>, EncodeError> {
    encode_with_config(entries, &EncodeConfig::default())
}

/// Encode a map as a binary VDF document with the given configuration.
pub fn encode_with_config(
    entries: &Entries<'_>,
    config: &EncodeConfig,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_into(entries, &mut out, config)?;
    Ok(out)
}

/// Append the encoding of `entries` to `out`.
///
/// On error `out` is truncated back to its original length, so a failed
/// call never leaves partial output behind.
pub fn encode_into(
    entries: &Entries<'_>,
    out: &mut Vec<u8>,
    config: &EncodeConfig,
) -> Result<(), EncodeError> {
    let start = out.len();
    match encode_map(entries, out, config, 0) {
        Ok(()) => {
            debug!(
                entries = entries.len(),
                bytes = out.len() - start,
                "encoded binary VDF"
            );
            Ok(())
        }
        Err(err) => {
            out.truncate(start);
            Err(err)
        }
    }
}

/// Encode a tag byte followed by a null-terminated key.
///
/// # Example
///
/// ```
/// use binary_vdf::{Tag, encode_key_tag};
///
/// let bytes = encode_key_tag(Tag::String, b"key1").unwrap();
/// assert_eq!(bytes, [0x01, b'k', b'e', b'y', b'1', 0x00]);
/// ```
pub fn encode_key_tag(tag: Tag, key: impl AsRef<[u8]>) -> Result<Vec<u8>, EncodeError> {
    let key = key.as_ref();
    check_nul(key, key, true)?;
    let mut out = Vec::with_capacity(key.len() + 2);
    write_key_tag(&mut out, tag, key);
    Ok(out)
}

/// Encode a string value followed by its NUL terminator.
///
/// Fails with [`EncodeError::EmbeddedNul`] if `s` contains a NUL byte. The
/// error is reported against a string value (`in_key: false`) and its `key`
/// field carries `s` itself, since there is no enclosing entry. Keys go
/// through [`encode_key_tag`], which reports `in_key: true`.
pub fn encode_cstring(s: impl AsRef<[u8]>) -> Result<Vec<u8>, EncodeError> {
    let s = s.as_ref();
    check_nul(s, s, false)?;
    let mut out = Vec::with_capacity(s.len() + 1);
    write_cstring(&mut out, s);
    Ok(out)
}

fn encode_map(
    entries: &Entries<'_>,
    out: &mut Vec<u8>,
    config: &EncodeConfig,
    depth: usize,
) -> Result<(), EncodeError> {
    for (key, value) in entries.iter() {
        // Validate before writing so a rejected entry emits nothing.
        check_nul(key, key, true)?;
        match value {
            Value::Number(n) => {
                write_key_tag(out, Tag::Number, key);
                out.extend_from_slice(&n.to_le_bytes());
            }
            Value::Str(s) => {
                check_nul(s, key, false)?;
                write_key_tag(out, Tag::String, key);
                write_cstring(out, s);
            }
            Value::Map(map) => {
                if depth >= config.max_depth {
                    return Err(EncodeError::DepthExceeded {
                        max_depth: config.max_depth,
                    });
                }
                trace!(key = %key, depth = depth + 1, "encoding nested map");
                write_key_tag(out, Tag::MapStart, key);
                encode_map(map, out, config, depth + 1)?;
            }
        }
    }

    out.push(Tag::MapEnd.as_byte());
    Ok(())
}

fn check_nul(bytes: &[u8], key: &[u8], in_key: bool) -> Result<(), EncodeError> {
    if bytes.contains(&0) {
        return Err(EncodeError::embedded_nul(
            String::from_utf8_lossy(key),
            in_key,
        ));
    }
    Ok(())
}

#[inline]
fn write_key_tag(out: &mut Vec<u8>, tag: Tag, key: &[u8]) {
    out.push(tag.as_byte());
    write_cstring(out, key);
}

#[inline]
fn write_cstring(out: &mut Vec<u8>, s: &[u8]) {
    out.extend_from_slice(s);
    out.push(0);
}
