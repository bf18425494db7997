//! Bit I/O: fixed-width integer pack/unpack for the parts of the container
//! that are whole bytes (lengths, the checksum, the symbol count) rather
//! than sub-byte bit payloads. Every multi-byte integer in the container
//! uses the same order — big-endian, matching `tehzz-vpk0`'s
//! `bitstream_io::BigEndian` choice — fixed at these call sites instead of
//! patched into a serialization library at runtime (spec.md §9).

use std::io::{Read, Write};

use crate::errors::{HuffError, HuffResult};

pub(crate) fn write_u32<W: Write>(w: &mut W, value: u32) -> HuffResult<()> {
    w.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub(crate) fn write_i32<W: Write>(w: &mut W, value: i32) -> HuffResult<()> {
    w.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub(crate) fn write_u8<W: Write>(w: &mut W, value: u8) -> HuffResult<()> {
    w.write_all(&[value])?;
    Ok(())
}

pub(crate) fn read_u32<R: Read>(r: &mut R) -> HuffResult<u32> {
    let mut buf = [0u8; 4];
    read_exact_checked(r, &mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

pub(crate) fn read_i32<R: Read>(r: &mut R) -> HuffResult<i32> {
    let mut buf = [0u8; 4];
    read_exact_checked(r, &mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

pub(crate) fn read_u8<R: Read>(r: &mut R) -> HuffResult<u8> {
    let mut buf = [0u8; 1];
    read_exact_checked(r, &mut buf)?;
    Ok(buf[0])
}

/// Like `Read::read_exact`, but a short read becomes
/// [`HuffError::TruncatedContainer`] instead of a bare I/O error, so the
/// reader can report which field it was parsing.
pub(crate) fn read_exact_checked<R: Read>(r: &mut R, buf: &mut [u8]) -> HuffResult<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(HuffError::TruncatedContainer {
                    expected: buf.len(),
                    got: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn u32_round_trips() {
        let mut buf = Vec::new();
        write_u32(&mut buf, 0xdead_beef).unwrap();
        let mut cur = Cursor::new(buf);
        assert_eq!(read_u32(&mut cur).unwrap(), 0xdead_beef);
    }

    #[test]
    fn short_read_is_truncated_container() {
        let mut cur = Cursor::new(vec![1u8, 2]);
        let err = read_u32(&mut cur).unwrap_err();
        assert!(matches!(
            err,
            HuffError::TruncatedContainer { expected: 4, got: 2 }
        ));
    }
}
