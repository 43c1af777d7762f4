use crate::format_error::FormatError;
use crate::index::{HEADER_SIZE, SIGNATURE, SUPPORTED_VERSIONS};
use byteorder::ByteOrder;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct IndexHeader {
    pub(crate) marker: String,
    pub(crate) version: u32,
    pub(crate) entries_count: u32,
}

impl IndexHeader {
    /// Decode and validate the 12-byte header block.
    ///
    /// The marker must be the literal signature and the version one of the
    /// supported format versions; anything else aborts the parse.
    pub(crate) fn deserialize(bytes: Bytes) -> Result<Self, FormatError> {
        if bytes.len() < HEADER_SIZE {
            return Err(FormatError::UnexpectedEof {
                needed: HEADER_SIZE,
                remaining: bytes.len(),
            });
        }

        let marker = String::from_utf8(bytes[0..4].to_vec())
            .map_err(|_| FormatError::InvalidSignature)?;
        if marker != SIGNATURE {
            return Err(FormatError::InvalidSignature);
        }

        let version = byteorder::NetworkEndian::read_u32(&bytes[4..8]);
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(FormatError::UnsupportedVersion(version));
        }

        let entries_count = byteorder::NetworkEndian::read_u32(&bytes[8..12]);

        Ok(IndexHeader::new(marker, version, entries_count))
    }
}
