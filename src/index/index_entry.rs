//! Index entry representation
//!
//! Each entry in the index represents a tracked file with:
//! - File path
//! - Content hash (object ID)
//! - File metadata (mode, size, timestamps)
//! - Packed flag words
//!
//! ## Entry Format
//!
//! Entries are stored in a binary format with 8-byte alignment. The fixed
//! prefix is 62 bytes: ten 4-byte stat fields, the 20-byte content hash and
//! the 2-byte flags word. Version 3 entries with the extended bit set carry
//! an additional 2-byte flags word. The path follows, then NUL padding up to
//! the next 8-byte boundary (at least one pad byte, all of which must be
//! zero).

use crate::format_error::FormatError;
use crate::index::byte_reader::ByteReader;
use crate::index::{ENTRY_BLOCK, ENTRY_FIXED_SIZE, NAME_LENGTH_MASK, VERSION_V3};
use crate::object_id::ObjectId;
use bitflags::bitflags;
use byteorder::ByteOrder;

bitflags! {
    /// Status bits of the 16-bit entry flags word.
    ///
    /// The low 12 bits are the name length, not flags; `from_bits_retain`
    /// keeps them intact.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct EntryFlags: u16 {
        const ASSUME_VALID = 1 << 15;
        const EXTENDED = 1 << 14;
        const STAGE_ONE = 1 << 13;
        const STAGE_TWO = 1 << 12;
    }
}

bitflags! {
    /// Status bits of the 16-bit extra flags word (version 3 only).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ExtraFlags: u16 {
        const RESERVED = 1 << 15;
        const SKIP_WORKTREE = 1 << 14;
        const INTENT_TO_ADD = 1 << 13;
    }
}

/// Index entry representing a tracked file
///
/// A flat immutable aggregate of the decoded on-disk fields. The entry is
/// fully validated when it is decoded; there is no partially-built state.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    /// 1-based position among the entries
    pub index: u32,
    /// File path relative to repository root
    pub name: String,
    /// Change time (seconds since Unix epoch)
    pub ctime_seconds: u32,
    /// Change time nanoseconds
    pub ctime_nanoseconds: u32,
    /// Modification time (seconds since Unix epoch)
    pub mtime_seconds: u32,
    /// Modification time nanoseconds
    pub mtime_nanoseconds: u32,
    /// Device ID
    pub dev: u32,
    /// Inode number
    pub ino: u32,
    /// File mode: 4-bit object type, 3 unused bits, 9-bit unix permission
    pub mode: u32,
    /// User ID of owner
    pub uid: u32,
    /// Group ID of owner
    pub gid: u32,
    /// File size in bytes
    pub size: u32,
    /// SHA-1 hash of the staged content
    pub oid: ObjectId,
    /// Raw 16-bit flags word
    pub flags: EntryFlags,
    /// Raw 16-bit extra flags word, present only for extended v3 entries
    pub extra_flags: Option<ExtraFlags>,
}

impl IndexEntry {
    pub fn assume_valid(&self) -> bool {
        self.flags.contains(EntryFlags::ASSUME_VALID)
    }

    pub fn extended(&self) -> bool {
        self.flags.contains(EntryFlags::EXTENDED)
    }

    pub fn stage_one(&self) -> bool {
        self.flags.contains(EntryFlags::STAGE_ONE)
    }

    pub fn stage_two(&self) -> bool {
        self.flags.contains(EntryFlags::STAGE_TWO)
    }

    /// Name length as recorded in the flags word, saturated at 0xFFF
    pub fn name_length(&self) -> usize {
        (self.flags.bits() & NAME_LENGTH_MASK) as usize
    }

    pub fn reserved(&self) -> Option<bool> {
        self.extra_flags.map(|flags| flags.contains(ExtraFlags::RESERVED))
    }

    pub fn skip_worktree(&self) -> Option<bool> {
        self.extra_flags
            .map(|flags| flags.contains(ExtraFlags::SKIP_WORKTREE))
    }

    pub fn intent_to_add(&self) -> Option<bool> {
        self.extra_flags
            .map(|flags| flags.contains(ExtraFlags::INTENT_TO_ADD))
    }

    /// Decode one entry record from the cursor.
    ///
    /// `index` is the 1-based position of the entry in the file and `version`
    /// the format version from the header, which decides whether extended
    /// entries carry an extra flags word.
    pub(crate) fn deserialize(
        reader: &mut ByteReader,
        version: u32,
        index: u32,
    ) -> Result<Self, FormatError> {
        let bytes = reader.read(ENTRY_FIXED_SIZE)?;

        let ctime_seconds = byteorder::NetworkEndian::read_u32(&bytes[0..4]);
        let ctime_nanoseconds = byteorder::NetworkEndian::read_u32(&bytes[4..8]);
        let mtime_seconds = byteorder::NetworkEndian::read_u32(&bytes[8..12]);
        let mtime_nanoseconds = byteorder::NetworkEndian::read_u32(&bytes[12..16]);
        let dev = byteorder::NetworkEndian::read_u32(&bytes[16..20]);
        let ino = byteorder::NetworkEndian::read_u32(&bytes[20..24]);
        let mode = byteorder::NetworkEndian::read_u32(&bytes[24..28]);
        let uid = byteorder::NetworkEndian::read_u32(&bytes[28..32]);
        let gid = byteorder::NetworkEndian::read_u32(&bytes[32..36]);
        let size = byteorder::NetworkEndian::read_u32(&bytes[36..40]);
        let oid = ObjectId::from_h40(&bytes[40..60])?;
        let flags = EntryFlags::from_bits_retain(byteorder::NetworkEndian::read_u16(&bytes[60..62]));

        let mut consumed = ENTRY_FIXED_SIZE;

        let extra_flags = if flags.contains(EntryFlags::EXTENDED) && version == VERSION_V3 {
            let word = reader.read_u16()?;
            consumed += 2;
            Some(ExtraFlags::from_bits_retain(word))
        } else {
            None
        };

        let name_length = (flags.bits() & NAME_LENGTH_MASK) as usize;
        let name = if name_length < NAME_LENGTH_MASK as usize {
            let name_bytes = reader.read(name_length)?;
            consumed += name_length;
            String::from_utf8_lossy(&name_bytes).into_owned()
        } else {
            // Name too long to encode in the flags word: NUL-terminated on
            // disk. The padding counter advances by one for the terminator,
            // not by the real name length.
            let mut name_bytes = Vec::new();
            loop {
                let byte = reader.read_byte()?;
                if byte == 0 {
                    break;
                }
                name_bytes.push(byte);
            }
            consumed += 1;
            String::from_utf8_lossy(&name_bytes).into_owned()
        };

        // Pad up to the next 8-byte boundary, always at least one byte
        let pad_length = ENTRY_BLOCK - consumed % ENTRY_BLOCK;
        let padding = reader.read(pad_length)?;
        if padding.iter().any(|&byte| byte != 0) {
            return Err(FormatError::NonZeroPadding);
        }

        Ok(IndexEntry {
            index,
            name,
            ctime_seconds,
            ctime_nanoseconds,
            mtime_seconds,
            mtime_nanoseconds,
            dev,
            ino,
            mode,
            uid,
            gid,
            size,
            oid,
            flags,
            extra_flags,
        })
    }
}
