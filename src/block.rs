//! Block Encoder / Decoder: one `BUFF_SIZE`-character chunk of text per
//! block, each carrying its own byte-length and character-count header
//! (spec.md §4.5, §4.7).

use std::collections::HashMap;
use std::io::{Cursor, ErrorKind, Read, Write};

use bitstream_io::{BigEndian, BitReader, BitWriter};

use crate::code::{Code, DecodeTrie};
use crate::errors::{HuffError, HuffResult};
use crate::wire;

/// Characters per chunk, matching the original `BUFF_SIZE`.
pub(crate) const BUFF_SIZE: usize = 1024;

/// Encode `chunk` (at most `BUFF_SIZE` characters) against `table` and
/// write `(block_byte_length, original_char_length, payload)` to `wtr`.
///
/// The framing rule is applied by building the bit payload in memory: a
/// sentinel `1` bit is written first, then every character's code, then
/// the writer is byte-aligned (zero-padded) before the bytes are taken out.
pub(crate) fn encode_block<W: Write>(
    chunk: &str,
    table: &HashMap<char, Code>,
    wtr: &mut W,
) -> HuffResult<()> {
    let mut payload = Vec::new();
    {
        let mut bits = BitWriter::endian(&mut payload, BigEndian);
        bits.write_bit(true)?;
        for ch in chunk.chars() {
            let code = table
                .get(&ch)
                .ok_or(HuffError::MissingSymbol(ch))?;
            bits.write(code.len as u32, code.bits)?;
        }
        bits.byte_align()?;
    }

    let block_byte_length = payload.len() as u32;
    let original_char_length = chunk.chars().count() as u32;

    wire::write_u32(wtr, block_byte_length)?;
    wire::write_u32(wtr, original_char_length)?;
    wtr.write_all(&payload)?;
    Ok(())
}

/// The two length fields that precede a block's payload.
pub(crate) struct BlockHeader {
    pub(crate) block_byte_length: u32,
    pub(crate) original_char_length: u32,
}

pub(crate) fn read_block_header<R: Read>(r: &mut R) -> HuffResult<BlockHeader> {
    let block_byte_length = wire::read_u32(r)?;
    let original_char_length = wire::read_u32(r)?;
    Ok(BlockHeader {
        block_byte_length,
        original_char_length,
    })
}

/// Read `header.block_byte_length` payload bytes from `r` and decode
/// exactly `header.original_char_length` symbols via `trie`.
///
/// Mirrors the window-scanning state machine in spec.md §4.7
/// (`Scanning`/`Matched`/`BlockDone`): walking the decode trie bit by bit
/// and emitting a symbol each time a leaf is reached *is* that state
/// machine, just without materializing the `[i, j)` window as a string —
/// the trie position already encodes how far the current partial match has
/// grown. Running out of bits before `original_char_length` symbols are
/// emitted is `BlockDone` with no match, i.e. [`HuffError::DecodeStuck`].
pub(crate) fn decode_block<R: Read>(
    r: &mut R,
    header: &BlockHeader,
    trie: &DecodeTrie,
    block_index: usize,
) -> HuffResult<String> {
    let mut payload = vec![0u8; header.block_byte_length as usize];
    wire::read_exact_checked(r, &mut payload)?;

    let mut bits = BitReader::endian(Cursor::new(payload), BigEndian);
    stuck_on_eof(bits.read_bit().map(|_sentinel| ()), block_index)?;

    let mut out = String::with_capacity(header.original_char_length as usize);
    for _ in 0..header.original_char_length {
        let symbol = stuck_on_eof(trie.decode_one(&mut bits), block_index)?;
        out.push(symbol);
    }
    Ok(out)
}

/// Turn an end-of-file I/O error into [`HuffError::DecodeStuck`]; any other
/// error (or success) passes through unchanged.
fn stuck_on_eof<T>(result: HuffResult<T>, block_index: usize) -> HuffResult<T> {
    match result {
        Err(HuffError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
            Err(HuffError::DecodeStuck { block_index })
        }
        other => other,
    }
}
