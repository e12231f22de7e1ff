//! Container signature validation and lazy chunk iteration.

use lada_common::ByteCursor;

use crate::chunk::{RawChunk, CHUNK_HEADER_SIZE, LABEL_SIZE};
use crate::{Error, Result};

/// The 60-byte ASCII signature at the start of every Sims 1 IFF file.
pub const SIGNATURE: &[u8; 60] = b"IFF FILE 2.5:TYPE FOLLOWED BY SIZE\0 JAMIE DOORNBOS & MAXIS 1";

/// Offset of the first chunk: signature (60) + resource-map offset (4).
const FIRST_CHUNK_OFFSET: usize = 64;

/// A validated IFF container over a borrowed byte buffer.
///
/// Construction only checks the signature; chunks are framed lazily by
/// [`IffFile::chunks`], which can be called any number of times to
/// re-iterate from the start of the file.
#[derive(Debug, Clone, Copy)]
pub struct IffFile<'a> {
    data: &'a [u8],
}

impl<'a> IffFile<'a> {
    /// Validate the signature and wrap the buffer.
    ///
    /// Fails with [`Error::InvalidSignature`] before any chunk is touched
    /// if the file does not start with the expected 60-byte signature
    /// followed by the 4-byte resource-map offset.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < FIRST_CHUNK_OFFSET || data[..SIGNATURE.len()] != SIGNATURE[..] {
            return Err(Error::InvalidSignature);
        }
        Ok(Self { data })
    }

    /// Check whether a buffer looks like an IFF file.
    pub fn is_iff(data: &[u8]) -> bool {
        data.len() >= SIGNATURE.len() && data[..SIGNATURE.len()] == SIGNATURE[..]
    }

    /// The full underlying buffer.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Iterate over the chunks in file order.
    pub fn chunks(&self) -> Chunks<'a> {
        Chunks {
            data: self.data,
            position: FIRST_CHUNK_OFFSET,
            failed: false,
        }
    }

    /// Find the first chunk with the given type tag.
    pub fn find(&self, tag: &[u8; 4]) -> Result<Option<RawChunk<'a>>> {
        for chunk in self.chunks() {
            let chunk = chunk?;
            if chunk.is(tag) {
                return Ok(Some(chunk));
            }
        }
        Ok(None)
    }
}

/// Lazy iterator over the chunks of an [`IffFile`].
///
/// Yields `Err` at most once: a framing error poisons the iterator, since
/// every later boundary would be a guess.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    data: &'a [u8],
    position: usize,
    failed: bool,
}

impl<'a> Chunks<'a> {
    fn next_chunk(&mut self) -> Result<RawChunk<'a>> {
        let offset = self.position;
        let available = self.data.len() - offset;
        if available < CHUNK_HEADER_SIZE {
            return Err(Error::TruncatedHeader { offset, available });
        }

        let mut cursor = ByteCursor::new(&self.data[offset..]);
        let type_tag = cursor.read_array::<4>()?;
        let size = cursor.read_u32_be()?;
        let id = cursor.read_u16_be()?;
        let flags = cursor.read_u16_be()?;
        let label = cursor.read_string_in_buffer(LABEL_SIZE)?;

        if (size as usize) < CHUNK_HEADER_SIZE {
            return Err(Error::ChunkTooSmall { offset, size });
        }
        if size as usize > available {
            return Err(Error::ChunkTruncated {
                offset,
                size,
                available,
            });
        }

        let payload = &self.data[offset + CHUNK_HEADER_SIZE..offset + size as usize];
        self.position = offset + size as usize;

        Ok(RawChunk {
            type_tag,
            id,
            flags,
            label,
            payload,
            offset,
        })
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Result<RawChunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.data.len() {
            return None;
        }
        let result = self.next_chunk();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}
