use crate::index::index_entry::IndexEntry;
use crate::index::index_extension::IndexExtension;
use crate::object_id::ObjectId;

/// Decoded index file.
///
/// Immutable once parsing completes: the aggregate owns every extracted
/// value and the source buffer is discarded. Entries and extensions keep
/// their on-disk order.
#[derive(Debug, Clone)]
pub struct IndexFile {
    version: u32,
    checksum: ObjectId,
    entries: Vec<IndexEntry>,
    extensions: Vec<IndexExtension>,
}

impl IndexFile {
    pub(crate) fn new(
        version: u32,
        checksum: ObjectId,
        entries: Vec<IndexEntry>,
        extensions: Vec<IndexExtension>,
    ) -> Self {
        IndexFile {
            version,
            checksum,
            entries,
            extensions,
        }
    }

    /// Index file format version (2 or 3)
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Trailing checksum as 40 lowercase hex characters
    pub fn checksum(&self) -> &ObjectId {
        &self.checksum
    }

    /// Entries in on-disk order
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Extensions in on-disk order
    pub fn extensions(&self) -> &[IndexExtension] {
        &self.extensions
    }
}
