//! Index file parser
//!
//! Decoding is one deterministic sequential pass over an immutable in-memory
//! buffer: header, then exactly entry-count entries, then extensions until
//! only the trailing checksum remains, then the checksum itself. There is no
//! lookahead and no backtracking; the first violation aborts the parse.

use crate::format_error::FormatError;
use crate::index::byte_reader::ByteReader;
use crate::index::index_entry::IndexEntry;
use crate::index::index_extension::IndexExtension;
use crate::index::index_file::IndexFile;
use crate::index::index_header::IndexHeader;
use crate::index::{CHECKSUM_SIZE, HEADER_SIZE};
use crate::object_id::ObjectId;
use bytes::Bytes;
use std::io::Read;
use std::ops::DerefMut;
use std::path::Path;
use tracing::{debug, trace};

/// Decode an in-memory index image.
pub fn parse_bytes(bytes: impl Into<Bytes>) -> Result<IndexFile, FormatError> {
    let mut reader = ByteReader::new(bytes.into());

    let header = IndexHeader::deserialize(reader.read(HEADER_SIZE)?)?;
    debug!(
        version = header.version,
        entries = header.entries_count,
        "parsed index header"
    );

    let mut entries = Vec::new();
    for position in 1..=header.entries_count {
        let entry = IndexEntry::deserialize(&mut reader, header.version, position)?;
        trace!(index = entry.index, name = %entry.name, "parsed index entry");
        entries.push(entry);
    }

    // Everything between the last entry and the trailing checksum is
    // extension blocks
    let mut extensions = Vec::new();
    while reader.remaining() > CHECKSUM_SIZE {
        let number = extensions.len() as u32 + 1;
        let extension = IndexExtension::deserialize(&mut reader, number)?;
        trace!(
            number = extension.number,
            signature = %extension.signature,
            size = extension.size,
            "parsed index extension"
        );
        extensions.push(extension);
    }

    let checksum = ObjectId::from_h40(&reader.read(CHECKSUM_SIZE)?)?;

    Ok(IndexFile::new(
        header.version,
        checksum,
        entries,
        extensions,
    ))
}

/// Read a whole index file and decode it.
///
/// The file is opened read-only and a shared lock is held for the duration
/// of the read, so a concurrent writer cannot tear the image.
pub fn parse_file(path: impl AsRef<Path>) -> Result<IndexFile, FormatError> {
    let mut file = std::fs::OpenOptions::new().read(true).open(path)?;
    let mut lock = file_guard::lock(&mut file, file_guard::Lock::Shared, 0, 1)?;

    let mut content = Vec::new();
    lock.deref_mut().read_to_end(&mut content)?;

    parse_bytes(content)
}
