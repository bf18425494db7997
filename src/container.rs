//! Container Writer / Reader: ties the header, code table, and blocks
//! together into the complete `huffc` file format (spec.md §4.6, §4.7).

use std::io::{Read, Write};

use crate::block::{self, BUFF_SIZE};
use crate::code::{self, DecodeTrie};
use crate::errors::{HuffError, HuffResult};
use crate::format::{self, ContainerHeader};
use crate::freq;
use crate::tree;

/// Compress `text` into a complete `huffc` container written to `w`.
pub(crate) fn write_container<W: Write>(text: &str, w: &mut W) -> HuffResult<()> {
    let leaves = freq::analyze(text)?;
    let tree = tree::build_tree(leaves);
    let table = code::build_code_table(&tree);

    let checksum = text.chars().count() as u32;
    ContainerHeader { checksum }.write(w)?;
    format::write_table(w, &table)?;

    for chunk in char_chunks(text, BUFF_SIZE) {
        block::encode_block(chunk, &table, w)?;
    }
    Ok(())
}

/// Decode a complete `huffc` container from `r`, streaming the decoded
/// text to `out` block by block rather than accumulating it in memory
/// (spec.md §5's streaming allowance).
pub(crate) fn read_container<R: Read, W: Write>(r: &mut R, out: &mut W) -> HuffResult<()> {
    let header = ContainerHeader::read(r)?;
    let entries = format::read_table(r)?;
    let trie = DecodeTrie::from_table(&entries)?;

    let mut decoded_total: u32 = 0;
    let mut block_index = 0usize;
    while decoded_total < header.checksum {
        let block_header = block::read_block_header(r)?;
        let text = block::decode_block(r, &block_header, &trie, block_index)?;
        out.write_all(text.as_bytes())?;
        decoded_total = decoded_total
            .checked_add(block_header.original_char_length)
            .ok_or_else(|| HuffError::BadTable("block length overflow".into()))?;
        block_index += 1;
    }

    if decoded_total != header.checksum {
        return Err(HuffError::ChecksumMismatch {
            expected: header.checksum,
            got: decoded_total,
        });
    }
    Ok(())
}

/// Split `text` into chunks of at most `size` characters, never splitting
/// a character's UTF-8 encoding.
fn char_chunks(text: &str, size: usize) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut chunk_start = 0usize;
    let mut count = 0usize;
    let mut iter = text.char_indices().peekable();
    while let Some((i, ch)) = iter.next() {
        count += 1;
        if count == size || iter.peek().is_none() {
            let end = i + ch.len_utf8();
            out.push(&text[chunk_start..end]);
            chunk_start = end;
            count = 0;
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips_a_short_string() {
        let text = "aaaabbc";
        let mut buf = Vec::new();
        write_container(text, &mut buf).unwrap();

        let mut cur = std::io::Cursor::new(buf);
        let mut out = Vec::new();
        read_container(&mut cur, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }

    #[test]
    fn round_trips_more_than_one_block() {
        let text = "x".repeat(BUFF_SIZE + 1);
        let mut buf = Vec::new();
        write_container(&text, &mut buf).unwrap();

        let mut cur = std::io::Cursor::new(buf);
        let mut out = Vec::new();
        read_container(&mut cur, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut buf = Vec::new();
        let err = write_container("", &mut buf).unwrap_err();
        assert!(matches!(err, HuffError::EmptyInput));
    }

    #[test]
    fn flipped_checksum_is_detected() {
        let text = "aaaabbc";
        let mut buf = Vec::new();
        write_container(text, &mut buf).unwrap();
        // checksum sits right after the 5-byte magic+version preamble;
        // shrink it so the reader notices after decoding one too many chars
        let bad = (text.chars().count() as u32 - 1).to_be_bytes();
        buf[5..9].copy_from_slice(&bad);

        let mut cur = std::io::Cursor::new(buf);
        let mut out = Vec::new();
        let err = read_container(&mut cur, &mut out).unwrap_err();
        assert!(matches!(err, HuffError::ChecksumMismatch { .. }));
    }

    #[test]
    fn determinism_same_input_same_bytes() {
        let text = "the quick brown fox jumps over the lazy dog";
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_container(text, &mut first).unwrap();
        write_container(text, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
