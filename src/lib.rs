//! `huffc` is a lossless text compressor built on classical (static, two-pass)
//! Huffman coding. `compress` turns a text file into a self-describing
//! binary container; `extract` inverts it back byte-for-byte.
//!
//! Huffman coding assigns shorter bit strings to more frequent characters
//! and longer ones to rarer characters, so that the total encoded length is
//! minimal among all prefix-free codes for the observed frequency
//! distribution. This crate restricts its input alphabet to characters whose
//! UTF-8 encoding is a single byte (ASCII and low Latin-1), since the
//! on-disk code table stores one byte per symbol.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! huffc::compress(Path::new("book.txt"), None, None).unwrap();
//! huffc::extract(Path::new("book.txt.comp"), None, None).unwrap();
//! ```
//!
//! For in-memory use without touching the filesystem, the lower-level
//! container functions are available through [`HuffError`] and
//! [`HuffResult`] for error handling; see the crate's `container` module
//! for `write_container`/`read_container` if embedding this codec in a
//! larger pipeline.
//!
//! ## Format
//!
//! A `huffc` container is a magic/version header, a checksum (the total
//! character count), the serialized code table, and then the encoded text
//! split into fixed-size blocks. See `format` and `block` for the exact
//! byte layout.

mod block;
mod code;
mod container;
mod driver;
pub mod errors;
mod format;
mod freq;
mod node;
mod tree;
mod wire;

pub use driver::{compress, extract};
pub use errors::{HuffError, HuffResult};
