//! Code Table Builder: turn a Huffman tree into a symbol<->code table.
//!
//! Codes are stored as `(bits, len)` pairs rather than strings of `'0'`/`'1'`
//! characters (the performance note in spec.md §9), capped at 32 bits —
//! the same bound `tehzz-vpk0`'s own `HuffCode` draws with its `u32`
//! backing type, which is ample here since a single text file can have at
//! most 256 distinct single-byte symbols.

use std::collections::HashMap;
use std::io::Read;

use bitstream_io::{BigEndian, BitReader};

use crate::errors::{HuffError, HuffResult};
use crate::node::Node;

/// A prefix-free Huffman code: the low `len` bits of `bits`, read
/// most-significant-bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Code {
    pub(crate) bits: u32,
    pub(crate) len: u8,
}

impl Code {
    /// Persisted form used in the container's code table: the code's bits
    /// with a leading sentinel `1` bit, interpreted as an unsigned integer
    /// (spec.md §4.6). This is what survives codes whose leading bits are
    /// zero through a fixed-width integer round-trip.
    pub(crate) fn to_wire(self) -> u32 {
        (1u32 << self.len) | self.bits
    }

    /// Invert [`Code::to_wire`]: strip the sentinel bit and recover `(bits, len)`.
    pub(crate) fn from_wire(wire: u32) -> HuffResult<Self> {
        if wire == 0 {
            return Err(HuffError::BadTable("code integer has no sentinel bit".into()));
        }
        let len = (32 - wire.leading_zeros() - 1) as u8;
        let bits = wire & !(1u32 << len);
        Ok(Code { bits, len })
    }
}

/// Depth-first traversal of `tree`, accumulating the root-to-leaf bit path.
///
/// The single-symbol edge case (spec.md §4.3) is handled here rather than
/// in the Tree Builder: a lone `Leaf` has no internal node to descend
/// through, so it is given the code `"0"` directly instead of an empty path.
pub(crate) fn build_code_table(tree: &Node) -> HashMap<char, Code> {
    let mut table = HashMap::new();

    if let Node::Leaf { symbol, .. } = tree {
        table.insert(*symbol, Code { bits: 0, len: 1 });
        return table;
    }

    fn walk(node: &Node, bits: u32, len: u8, table: &mut HashMap<char, Code>) {
        match node {
            Node::Leaf { symbol, .. } => {
                table.insert(*symbol, Code { bits, len });
            }
            Node::Internal { left, right, .. } => {
                walk(left, bits << 1, len + 1, table);
                walk(right, (bits << 1) | 1, len + 1, table);
            }
        }
    }
    walk(tree, 0, 0, &mut table);
    table
}

/// The inverse of a code table, organized as a binary trie so the decoder
/// can walk it one bit at a time (the "decoding trie" alternative spec.md
/// §9 recommends over a `HashMap<String, char>` keyed by bit-string).
pub(crate) enum DecodeTrie {
    Leaf(char),
    Node {
        zero: Box<DecodeTrie>,
        one: Box<DecodeTrie>,
    },
}

impl DecodeTrie {
    /// Build the trie by inverting `table`: each `(symbol, code)` pair
    /// inserts a path of length `code.len`.
    pub(crate) fn from_table(table: &[(char, Code)]) -> HuffResult<Self> {
        if table.is_empty() {
            return Err(HuffError::BadTable("empty code table".into()));
        }

        // single-symbol tables use the sentinel code "0" and decode directly
        if table.len() == 1 {
            return Ok(DecodeTrie::Leaf(table[0].0));
        }

        let mut root = Builder::Empty;
        for &(symbol, code) in table {
            if code.len == 0 {
                return Err(HuffError::BadTable(format!(
                    "symbol {symbol:?} has an empty code"
                )));
            }
            root.insert(code.bits, code.len, symbol)?;
        }
        root.finish()
    }

    /// Walk one code's worth of bits from `reader`, returning the decoded
    /// symbol. Runs out of bits only on a corrupted/truncated block; the
    /// caller is expected to bound `reader` to a single block's payload.
    pub(crate) fn decode_one<R: Read>(
        &self,
        reader: &mut BitReader<R, BigEndian>,
    ) -> HuffResult<char> {
        let mut node = self;
        loop {
            match node {
                DecodeTrie::Leaf(symbol) => return Ok(*symbol),
                DecodeTrie::Node { zero, one } => {
                    let bit = reader.read_bit()?;
                    node = if bit { one } else { zero };
                }
            }
        }
    }
}

/// Work-in-progress trie during construction: unlike the finished
/// `DecodeTrie`, intermediate nodes may still be missing a branch.
enum Builder {
    Empty,
    Leaf(char),
    Node(Box<Builder>, Box<Builder>),
}

impl Builder {
    fn insert(&mut self, bits: u32, len: u8, symbol: char) -> HuffResult<()> {
        if len == 0 {
            return match self {
                Builder::Empty => {
                    *self = Builder::Leaf(symbol);
                    Ok(())
                }
                _ => Err(HuffError::BadTable(format!(
                    "code for {symbol:?} is a prefix of another code"
                ))),
            };
        }

        if let Builder::Leaf(existing) = self {
            return Err(HuffError::BadTable(format!(
                "code for {symbol:?} extends the code already assigned to {existing:?}"
            )));
        }
        if let Builder::Empty = self {
            *self = Builder::Node(Box::new(Builder::Empty), Box::new(Builder::Empty));
        }

        let bit = (bits >> (len - 1)) & 1;
        if let Builder::Node(zero, one) = self {
            let branch = if bit == 1 { one } else { zero };
            branch.insert(bits, len - 1, symbol)
        } else {
            unreachable!("just ensured self is a Node")
        }
    }

    fn finish(self) -> HuffResult<DecodeTrie> {
        match self {
            Builder::Empty => Err(HuffError::BadTable("incomplete code table".into())),
            Builder::Leaf(symbol) => Ok(DecodeTrie::Leaf(symbol)),
            Builder::Node(zero, one) => Ok(DecodeTrie::Node {
                zero: Box::new(zero.finish()?),
                one: Box::new(one.finish()?),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::build_tree;

    #[test]
    fn wire_round_trip_preserves_leading_zero_bits() {
        let code = Code { bits: 0b001, len: 3 };
        let wire = code.to_wire();
        let back = Code::from_wire(wire).unwrap();
        assert_eq!(code, back);
    }

    #[test]
    fn prefix_free_codes_from_tree() {
        let tree = build_tree(vec![
            Node::Leaf { symbol: 'a', freq: 4 },
            Node::Leaf { symbol: 'b', freq: 2 },
            Node::Leaf { symbol: 'c', freq: 1 },
        ]);
        let table = build_code_table(&tree);
        let codes: Vec<_> = table.values().copied().collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert!(!is_prefix(a, b));
                assert!(!is_prefix(b, a));
            }
        }
    }

    fn is_prefix(a: &Code, b: &Code) -> bool {
        if a.len >= b.len {
            return false;
        }
        (b.bits >> (b.len - a.len)) == a.bits
    }

    #[test]
    fn single_symbol_gets_code_zero() {
        let tree = build_tree(vec![Node::Leaf { symbol: 'x', freq: 3 }]);
        let table = build_code_table(&tree);
        let code = table[&'x'];
        assert_eq!(code, Code { bits: 0, len: 1 });
    }

    #[test]
    fn decode_trie_inverts_table() {
        let tree = build_tree(vec![
            Node::Leaf { symbol: 'a', freq: 4 },
            Node::Leaf { symbol: 'b', freq: 2 },
            Node::Leaf { symbol: 'c', freq: 1 },
        ]);
        let table = build_code_table(&tree);
        let entries: Vec<_> = table.iter().map(|(&s, &c)| (s, c)).collect();
        let trie = DecodeTrie::from_table(&entries).unwrap();

        for (symbol, code) in &entries {
            let mut bytes = Vec::new();
            {
                use bitstream_io::BitWriter;
                let mut wtr = BitWriter::endian(&mut bytes, BigEndian);
                wtr.write(code.len as u32, code.bits).unwrap();
                wtr.byte_align().unwrap();
            }
            let mut rdr = BitReader::endian(std::io::Cursor::new(bytes), BigEndian);
            let decoded = trie.decode_one(&mut rdr).unwrap();
            assert_eq!(decoded, *symbol);
        }
    }
}
