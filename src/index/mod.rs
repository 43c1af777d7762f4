//! Git index file format
//!
//! The index (also called staging area or cache) stores information about the working tree.
//! It tracks which files should be included in the next commit.
//!
//! ## File Format (Versions 2 and 3)
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "DIRC" (4 bytes)
//!   - Version: 2 or 3 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length):
//!   - Each entry padded to 8-byte alignment
//!   - Contains metadata, content hash, flags and path
//!
//! Extensions (zero or more):
//!   - Signature (4 bytes), payload size (4 bytes), opaque payload
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes (not verified here)
//! ```
//!
//! All multi-byte integers are in network byte order.

pub mod byte_reader;
pub mod index_entry;
pub mod index_extension;
pub mod index_file;
pub mod index_header;
pub mod parser;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20; // SHA1 produces a 20-byte hash

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12; // 4 bytes for marker, 4 for version, 4 for entries_count

/// Magic signature identifying index files
pub const SIGNATURE: &str = "DIRC"; // Signature for the index file

/// Lowest supported index file format version
pub const VERSION_V2: u32 = 2;

/// Index file format version that introduces extended entry flags
pub const VERSION_V3: u32 = 3;

/// Index file format versions this decoder accepts
pub const SUPPORTED_VERSIONS: [u32; 2] = [VERSION_V2, VERSION_V3];

/// Block size for entry alignment (8 bytes)
pub const ENTRY_BLOCK: usize = 8;

/// Size of the fixed entry prefix through the flags word
pub const ENTRY_FIXED_SIZE: usize = 62; // 10 stat fields, 20-byte hash, 2-byte flags

/// Mask selecting the name-length bits of the entry flags word
pub const NAME_LENGTH_MASK: u16 = 0xFFF; // low 12 bits, saturates for longer names
