use crate::format_error::FormatError;
use byteorder::ByteOrder;
use bytes::Bytes;

/// Bounded cursor over an immutable byte buffer.
///
/// The cursor owns the read position for the duration of a parse; every read
/// advances it and a read past the end of the buffer fails instead of
/// returning a short chunk.
#[derive(Debug)]
pub struct ByteReader {
    buffer: Bytes,
    position: usize,
}

impl ByteReader {
    pub fn new(buffer: Bytes) -> Self {
        ByteReader {
            buffer,
            position: 0,
        }
    }

    /// Distance from the current position to the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn read(&mut self, size: usize) -> Result<Bytes, FormatError> {
        if size > self.remaining() {
            return Err(FormatError::UnexpectedEof {
                needed: size,
                remaining: self.remaining(),
            });
        }

        let chunk = self.buffer.slice(self.position..self.position + size);
        self.position += size;
        Ok(chunk)
    }

    pub fn read_u32(&mut self) -> Result<u32, FormatError> {
        let bytes = self.read(4)?;
        Ok(byteorder::NetworkEndian::read_u32(&bytes))
    }

    pub fn read_u16(&mut self) -> Result<u16, FormatError> {
        let bytes = self.read(2)?;
        Ok(byteorder::NetworkEndian::read_u16(&bytes))
    }

    pub fn read_byte(&mut self) -> Result<u8, FormatError> {
        let bytes = self.read(1)?;
        Ok(bytes[0])
    }
}
