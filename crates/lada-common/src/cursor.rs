//! Bounds-checked sequential reader over a byte slice.
//!
//! This module provides [`ByteCursor`], a cursor-like type for decoding
//! binary formats whose fields mix big- and little-endian encodings, so
//! every integer read names its byte order explicitly.

use crate::{Error, Result};

/// A sequential reader over an immutable byte buffer.
///
/// All reads are bounds-checked and atomic: a read that would run past the
/// end of the buffer fails without advancing the position, so the caller
/// can report the offset of the failing field.
///
/// # Example
///
/// ```
/// use lada_common::ByteCursor;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut cursor = ByteCursor::new(&data);
///
/// assert_eq!(cursor.read_u16_be().unwrap(), 0x0102);
/// assert_eq!(cursor.read_u16_le().unwrap(), 0x0403);
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor at the start of a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Skip `count` bytes, failing if that would pass the end of the buffer.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }

    /// Read `count` bytes and advance the position.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::OutOfBounds {
                offset: self.position,
                needed: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read a fixed-size array of bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        // read_bytes guarantees the length
        Ok(bytes.try_into().unwrap())
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a signed byte.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_u8().map(|b| b as i8)
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Read a big-endian u16.
    #[inline]
    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    /// Read a little-endian i16.
    #[inline]
    pub fn read_i16_le(&mut self) -> Result<i16> {
        self.read_array().map(i16::from_le_bytes)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Read a big-endian u32.
    #[inline]
    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_be_bytes)
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Read a null-terminated ASCII string.
    ///
    /// Returns the string and the number of bytes consumed *including* the
    /// terminator; some formats pad the following field based on that count.
    pub fn read_cstring(&mut self) -> Result<(&'a str, usize)> {
        let start = self.position;
        let remaining = &self.data[start.min(self.data.len())..];

        let null_pos = memchr::memchr(0, remaining)
            .ok_or(Error::MissingNullTerminator { offset: start })?;

        let value = std::str::from_utf8(&remaining[..null_pos])
            .map_err(|source| Error::InvalidString { offset: start, source })?;

        self.position = start + null_pos + 1;
        Ok((value, null_pos + 1))
    }

    /// Read a string from a fixed-size buffer, stopping at the first null.
    pub fn read_string_in_buffer(&mut self, buffer_size: usize) -> Result<&'a str> {
        let offset = self.position;
        let bytes = self.read_bytes(buffer_size)?;
        let null_pos = memchr::memchr(0, bytes).unwrap_or(buffer_size);
        std::str::from_utf8(&bytes[..null_pos])
            .map_err(|source| Error::InvalidString { offset, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_both_endians() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x01, 0x02, 0x03, 0x04];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u32_be().unwrap(), 0x01020304);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x04030201);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_read_signed() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_i32_le().unwrap(), -1);
        assert_eq!(cursor.read_i16_le().unwrap(), -2);
    }

    #[test]
    fn test_failed_read_keeps_position() {
        let data = [0x01, 0x02];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_u8().unwrap();

        let err = cursor.read_u32_le().unwrap_err();
        match err {
            Error::OutOfBounds {
                offset,
                needed,
                available,
            } => {
                assert_eq!(offset, 1);
                assert_eq!(needed, 4);
                assert_eq!(available, 1);
            }
            other => panic!("unexpected error: {other}"),
        }

        // Position is unchanged, the remaining byte is still readable.
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u8().unwrap(), 0x02);
    }

    #[test]
    fn test_read_cstring_reports_consumed() {
        let data = b"Bella\0Mortimer\0";
        let mut cursor = ByteCursor::new(data);

        let (name, consumed) = cursor.read_cstring().unwrap();
        assert_eq!(name, "Bella");
        assert_eq!(consumed, 6);

        let (name, consumed) = cursor.read_cstring().unwrap();
        assert_eq!(name, "Mortimer");
        assert_eq!(consumed, 9);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_read_cstring_missing_terminator() {
        let data = b"unterminated";
        let mut cursor = ByteCursor::new(data);

        assert!(matches!(
            cursor.read_cstring(),
            Err(Error::MissingNullTerminator { offset: 0 })
        ));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_read_string_in_buffer() {
        let data = b"NBRS\0\0\0\0tail";
        let mut cursor = ByteCursor::new(data);

        assert_eq!(cursor.read_string_in_buffer(8).unwrap(), "NBRS");
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_skip() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data);

        cursor.skip(6).unwrap();
        assert_eq!(cursor.position(), 6);
        assert!(cursor.skip(4).is_err());
        assert_eq!(cursor.position(), 6);
    }
}
