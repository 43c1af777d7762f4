#![allow(dead_code)]

use byteorder::WriteBytesExt;
use std::io::Write;

/// Block size for entry alignment in the on-disk format
pub const ENTRY_BLOCK: usize = 8;

/// Stat fields written into every generated entry, in on-disk order:
/// ctime s/ns, mtime s/ns, dev, ino, mode, uid, gid, size
pub const STAT_FIELDS: [u32; 10] = [
    1747659933, 0, 1747659933, 0, 66310, 9699292, 0o100644, 1000, 1000, 42,
];

/// Content hash written into every generated entry
pub const ENTRY_SHA: [u8; 20] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
    0x0F, 0x10, 0x11, 0x12, 0x13,
];

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

pub fn header_bytes(signature: &[u8], version: u32, entries_count: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.write_all(signature).unwrap();
    bytes.write_u32::<byteorder::NetworkEndian>(version).unwrap();
    bytes
        .write_u32::<byteorder::NetworkEndian>(entries_count)
        .unwrap();
    bytes
}

/// Entry with the name length recorded in the flags word and no status bits
pub fn entry_bytes(name: &str) -> Vec<u8> {
    entry_bytes_with_flags(name, name.len() as u16, None)
}

/// Entry with a caller-controlled flags word and optional extra flags word.
///
/// The caller keeps the low 12 bits of `flags` consistent with the name
/// length; the writer pads to the 8-byte boundary the way the format does
/// for short names (at least one NUL).
pub fn entry_bytes_with_flags(name: &str, flags: u16, extra_flags: Option<u16>) -> Vec<u8> {
    let mut bytes = Vec::new();
    for field in STAT_FIELDS {
        bytes.write_u32::<byteorder::NetworkEndian>(field).unwrap();
    }
    bytes.write_all(&ENTRY_SHA).unwrap();
    bytes.write_u16::<byteorder::NetworkEndian>(flags).unwrap();
    if let Some(word) = extra_flags {
        bytes.write_u16::<byteorder::NetworkEndian>(word).unwrap();
    }
    bytes.write_all(name.as_bytes()).unwrap();

    bytes.push(0); // There must be at least one null byte at the end
    while bytes.len() % ENTRY_BLOCK != 0 {
        bytes.push(0);
    }
    bytes
}

/// Entry whose name length saturates the flags word (0xFFF): the name is
/// NUL-terminated on disk and the decoder's running counter advances by one
/// byte only, so exactly one pad byte follows the terminator.
pub fn long_name_entry_bytes(name: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for field in STAT_FIELDS {
        bytes.write_u32::<byteorder::NetworkEndian>(field).unwrap();
    }
    bytes.write_all(&ENTRY_SHA).unwrap();
    bytes.write_u16::<byteorder::NetworkEndian>(0xFFF).unwrap();
    bytes.write_all(name.as_bytes()).unwrap();
    bytes.push(0);
    bytes.push(0);
    bytes
}

pub fn extension_bytes(signature: &str, data: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.write_all(signature.as_bytes()).unwrap();
    bytes
        .write_u32::<byteorder::NetworkEndian>(data.len() as u32)
        .unwrap();
    bytes.write_all(data).unwrap();
    bytes
}

pub fn checksum_bytes(byte: u8) -> Vec<u8> {
    vec![byte; 20]
}
