//! Chunk record produced by container framing.

/// Size of the chunk header: tag (4) + size (4) + id (2) + flags (2) + label (64).
pub const CHUNK_HEADER_SIZE: usize = 76;

/// Size of the null-padded label field inside the header.
pub const LABEL_SIZE: usize = 64;

/// A single chunk split out of the container.
///
/// Ephemeral: borrows the file buffer and lives only for one parse pass.
#[derive(Debug, Clone)]
pub struct RawChunk<'a> {
    /// Four-byte ASCII type tag, e.g. `NBRS`.
    pub type_tag: [u8; 4],
    /// Chunk id; resources that belong together share an id.
    pub id: u16,
    /// Chunk flags (unused by the decoders).
    pub flags: u16,
    /// Null-padded label from the header.
    pub label: &'a str,
    /// Payload bytes, excluding the 76-byte header.
    pub payload: &'a [u8],
    /// File offset of the chunk header.
    pub offset: usize,
}

impl<'a> RawChunk<'a> {
    /// The type tag as a string, with non-ASCII bytes replaced.
    pub fn tag(&self) -> String {
        self.type_tag
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect()
    }

    /// Check the type tag against an expected value.
    #[inline]
    pub fn is(&self, tag: &[u8; 4]) -> bool {
        &self.type_tag == tag
    }
}
