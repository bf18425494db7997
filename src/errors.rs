//! Error taxonomy for the `huffc` codec.

use thiserror::Error;

/// Everything that can go wrong while compressing or extracting a file.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The source text had no characters to build a code from.
    #[error("input is empty, nothing to compress")]
    EmptyInput,

    /// A character's UTF-8 encoding was more than one byte.
    #[error("character {0:?} does not fit in a single byte; only ASCII/Latin-1 text is supported")]
    NonSingleByteSymbol(char),

    /// The encoder hit a character that is absent from the code table.
    #[error("no code for character {0:?}; the table was not built from this text")]
    MissingSymbol(char),

    /// Underlying file or stream I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The container ended before a fixed-size field could be fully read.
    #[error("truncated container: expected {expected} bytes, found {got}")]
    TruncatedContainer { expected: usize, got: usize },

    /// The deserialized code table is malformed (duplicate or empty code).
    #[error("malformed code table: {0}")]
    BadTable(String),

    /// The decode window exhausted a block without matching a code.
    #[error("decoder stuck in block {block_index}: no code matched the remaining bits")]
    DecodeStuck { block_index: usize },

    /// The decoded character count did not match the stored checksum.
    #[error("checksum mismatch: expected {expected} characters, decoded {got}")]
    ChecksumMismatch { expected: u32, got: u32 },

    /// The file did not start with the `HUFC` magic bytes.
    #[error("not a huffc container (bad magic bytes)")]
    BadMagic,

    /// The container's format version is not one this build understands.
    #[error("unsupported container version {0}")]
    UnsupportedVersion(u8),
}

/// Shorthand used throughout the crate.
pub type HuffResult<T> = Result<T, HuffError>;
