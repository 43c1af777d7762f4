use crate::format_error::FormatError;
use crate::index::byte_reader::ByteReader;
use bytes::Bytes;
use derive_new::new;

/// Size of an extension signature in bytes
pub const EXTENSION_SIGNATURE_SIZE: usize = 4;

/// Auxiliary data block following the entries.
///
/// The payload is carried as-is; this decoder never interprets it.
#[derive(Debug, Clone, PartialEq, new)]
pub struct IndexExtension {
    /// 1-based position among the extensions
    pub number: u32,
    /// 4-character ASCII signature, e.g. "TREE"
    pub signature: String,
    /// Payload size in bytes
    pub size: u32,
    /// Opaque payload
    pub data: Bytes,
}

impl IndexExtension {
    pub(crate) fn deserialize(reader: &mut ByteReader, number: u32) -> Result<Self, FormatError> {
        let signature_bytes = reader.read(EXTENSION_SIGNATURE_SIZE)?;
        if !signature_bytes.is_ascii() {
            return Err(FormatError::NonAsciiSignature);
        }
        let signature = String::from_utf8(signature_bytes.to_vec())
            .map_err(|_| FormatError::NonAsciiSignature)?;

        let size = reader.read_u32()?;
        // Copy the payload out so the model does not alias the source buffer
        let data = Bytes::copy_from_slice(&reader.read(size as usize)?);

        Ok(IndexExtension::new(number, signature, size, data))
    }
}
