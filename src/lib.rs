//! Decoder for the Git index file (also called the directory cache).
//!
//! The index records the staged state of the working tree: which files are
//! tracked, their stat metadata, and the hash of their staged content. This
//! crate parses index files in format versions 2 and 3 into an immutable
//! [`IndexFile`] model. It does not write indexes back, interpret extension
//! payloads, or verify the trailing checksum.

pub mod format_error;
pub mod index;
pub mod object_id;

// Re-export the main types for convenience
pub use format_error::FormatError;
pub use index::index_entry::{EntryFlags, ExtraFlags, IndexEntry};
pub use index::index_extension::IndexExtension;
pub use index::index_file::IndexFile;
pub use index::parser::{parse_bytes, parse_file};
pub use object_id::ObjectId;
