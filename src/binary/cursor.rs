//! Bounds-checked reading over a byte buffer.

use crate::error::{DecodeError, Result};

/// A read position over an immutable byte buffer.
///
/// Every read either consumes exactly the bytes it returns or fails with
/// [`DecodeError::UnexpectedEof`]; the position never moves past the end of
/// the buffer.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at position 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Returns the current offset into the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns `true` if every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Reads the tag byte at the current position and advances by one.
    pub fn peek_tag(&mut self) -> Result<u8> {
        let byte = *self
            .data
            .get(self.position)
            .ok_or(DecodeError::unexpected_eof("reading tag byte", self.position))?;
        self.position += 1;
        Ok(byte)
    }

    /// Reads a little-endian u32 and advances by four.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self
            .data
            .get(self.position..)
            .and_then(|rest| rest.first_chunk::<4>())
            .ok_or(DecodeError::unexpected_eof("reading u32", self.position))?;
        self.position += 4;
        Ok(u32::from_le_bytes(*bytes))
    }

    /// Reads a NUL-terminated byte string and advances past the terminator.
    ///
    /// The returned slice excludes the NUL and borrows from the buffer. If no
    /// NUL is found before the end of the buffer the position is left where
    /// it was.
    pub fn read_cstring(&mut self) -> Result<&'a [u8]> {
        let rest = self.data.get(self.position..).unwrap_or_default();
        let nul_pos = rest.iter().position(|&b| b == 0).ok_or(
            DecodeError::unexpected_eof("reading null-terminated string", self.position),
        )?;
        self.position += nul_pos + 1;
        Ok(&rest[..nul_pos])
    }
}
