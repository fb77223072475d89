//! Error types for binary VDF decoding and encoding.

use alloc::string::String;
use thiserror::Error;

/// Result type for decode operations.
pub type Result<T, E = DecodeError> = core::result::Result<T, E>;

/// Errors that can occur while decoding binary VDF.
///
/// Every variant aborts the whole decode call; no partial tree is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A read would run past the end of the input.
    #[error("unexpected end of input at offset {offset} while {context}")]
    UnexpectedEof {
        /// Description of what was being read.
        context: &'static str,
        /// Offset in the input where the read started.
        offset: usize,
    },

    /// A tag byte outside the recognized set.
    #[error("unrecognized tag byte 0x{tag:02x} at offset {offset}")]
    UnrecognizedTag {
        /// The tag byte that was found.
        tag: u8,
        /// Offset of the tag byte in the input.
        offset: usize,
    },

    /// Maps are nested deeper than the configured limit.
    #[error("map nesting exceeds maximum depth of {max_depth} at offset {offset}")]
    DepthExceeded {
        /// The configured maximum depth.
        max_depth: usize,
        /// Offset of the map start tag that crossed the limit.
        offset: usize,
    },
}

impl DecodeError {
    /// Creates a new unexpected end of input error
    pub fn unexpected_eof(context: &'static str, offset: usize) -> Self {
        Self::UnexpectedEof { context, offset }
    }

    /// Creates a new unrecognized tag error
    pub fn unrecognized_tag(tag: u8, offset: usize) -> Self {
        Self::UnrecognizedTag { tag, offset }
    }

    /// Returns the input offset where decoding failed.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEof { offset, .. }
            | Self::UnrecognizedTag { offset, .. }
            | Self::DepthExceeded { offset, .. } => *offset,
        }
    }

    /// Returns `true` if the input was cut short rather than malformed.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

/// Errors that can occur while encoding a VDF tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// A key or string value contains NUL, which is the string terminator.
    #[error("NUL byte in {} for key {key:?}", nul_location(.in_key))]
    EmbeddedNul {
        /// The offending entry's key (lossy UTF-8).
        key: String,
        /// `true` if the NUL is in the key itself, `false` if in the value.
        in_key: bool,
    },

    /// The tree is nested deeper than the configured limit.
    #[error("map nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded {
        /// The configured maximum depth.
        max_depth: usize,
    },
}

fn nul_location(in_key: &bool) -> &'static str {
    if *in_key { "key" } else { "string value" }
}

impl EncodeError {
    /// Creates a new embedded NUL error
    pub fn embedded_nul(key: impl Into<String>, in_key: bool) -> Self {
        Self::EmbeddedNul {
            key: key.into(),
            in_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::unexpected_eof("reading u32", 7);
        assert_eq!(
            err.to_string(),
            "unexpected end of input at offset 7 while reading u32"
        );

        let err = DecodeError::unrecognized_tag(0x03, 12);
        assert_eq!(err.to_string(), "unrecognized tag byte 0x03 at offset 12");
    }

    #[test]
    fn test_decode_error_offset() {
        assert_eq!(DecodeError::unexpected_eof("reading tag", 3).offset(), 3);
        assert_eq!(DecodeError::unrecognized_tag(0xff, 9).offset(), 9);
        let err = DecodeError::DepthExceeded {
            max_depth: 4,
            offset: 20,
        };
        assert_eq!(err.offset(), 20);
        assert!(!err.is_eof());
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::embedded_nul("name", false);
        assert_eq!(err.to_string(), "NUL byte in string value for key \"name\"");

        let err = EncodeError::embedded_nul("na\0me", true);
        assert_eq!(err.to_string(), "NUL byte in key for key \"na\\0me\"");
    }
}
