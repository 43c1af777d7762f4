//! SHA-1 object identifier
//!
//! Object IDs are 40-character lowercase hexadecimal strings representing
//! SHA-1 hashes. The index stores them as 20 raw bytes; both the per-entry
//! content hashes and the trailing file checksum use this form.

use crate::format_error::FormatError;

/// Length of an object ID in hexadecimal characters
pub const OBJECT_ID_LENGTH: usize = 40;

/// Size of an object ID in raw bytes
pub const OBJECT_ID_SIZE: usize = 20;

/// SHA-1 object identifier
///
/// A 40-character hexadecimal string that uniquely identifies a piece of
/// content. Decoded values are always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> Result<Self, FormatError> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(FormatError::InvalidObjectId(format!(
                "invalid length: {}",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidObjectId(id));
        }
        Ok(Self(id))
    }

    /// Hex-encode an object ID from its 20-byte binary form
    ///
    /// Converts the raw bytes to a 40-character lowercase hex string.
    pub fn from_h40(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut hex40 = String::with_capacity(OBJECT_ID_LENGTH);

        for byte in bytes {
            hex40.push_str(&format!("{byte:02x}"));
        }

        Self::try_parse(hex40)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
