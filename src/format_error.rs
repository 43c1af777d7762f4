use thiserror::Error;

/// The single error type surfaced by the decoder.
///
/// Every failure mode — structural violations as well as lower-level decode
/// failures such as short reads — maps to one of these variants, so callers
/// always observe exactly one error type.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("not a valid index file")]
    InvalidSignature,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u32),

    #[error("padding contained non-NUL")]
    NonZeroPadding,

    #[error("unexpected end-of-file while reading index: needed {needed} bytes, {remaining} left")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("signature contains non-ASCII bytes")]
    NonAsciiSignature,

    #[error("invalid object ID: {0}")]
    InvalidObjectId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
