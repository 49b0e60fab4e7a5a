//! Readers for the `[notation]` primitives of the native protocol.
//!
//! Every reader takes the remaining input and returns the decoded value together
//! with the input that follows it. Threading `rest` from one call into the next
//! is the cursor; nothing is stored between calls.

use crate::constant::NULL_LENGTH;
use crate::error::{Error, Result};
use simdutf8::basic::from_utf8;
use zerocopy::FromBytes;
use zerocopy::byteorder::big_endian::{
    F32 as F32BE, F64 as F64BE, I32 as I32BE, I64 as I64BE, U16 as U16BE, U32 as U32BE,
};

/// Read 1-byte integer
pub fn read_int_1(data: &[u8]) -> Result<(u8, &[u8])> {
    match data.split_first() {
        Some((&byte, rest)) => Ok((byte, rest)),
        None => Err(Error::underrun(1, 0)),
    }
}

/// Read `[short]`: 2-byte big-endian unsigned integer
pub fn read_short(data: &[u8]) -> Result<(u16, &[u8])> {
    let (bytes, rest) = read_string_fix(data, 2)?;
    let value = U16BE::ref_from_bytes(bytes)
        .map_err(Error::from_debug)?
        .get();
    Ok((value, rest))
}

/// Read `[int]`: 4-byte big-endian signed integer
pub fn read_int(data: &[u8]) -> Result<(i32, &[u8])> {
    let (bytes, rest) = read_string_fix(data, 4)?;
    let value = I32BE::ref_from_bytes(bytes)
        .map_err(Error::from_debug)?
        .get();
    Ok((value, rest))
}

/// Read 4-byte big-endian unsigned integer (result kind, flags)
pub fn read_uint(data: &[u8]) -> Result<(u32, &[u8])> {
    let (bytes, rest) = read_string_fix(data, 4)?;
    let value = U32BE::ref_from_bytes(bytes)
        .map_err(Error::from_debug)?
        .get();
    Ok((value, rest))
}

/// Read `[long]`: 8-byte big-endian signed integer
///
/// Equivalent to combining two 4-byte words as `(hi << 32) | lo`.
pub fn read_long(data: &[u8]) -> Result<(i64, &[u8])> {
    let (bytes, rest) = read_string_fix(data, 8)?;
    let value = I64BE::ref_from_bytes(bytes)
        .map_err(Error::from_debug)?
        .get();
    Ok((value, rest))
}

/// Read 8-byte big-endian IEEE-754 double
pub fn read_double(data: &[u8]) -> Result<(f64, &[u8])> {
    let (bytes, rest) = read_string_fix(data, 8)?;
    let value = F64BE::ref_from_bytes(bytes)
        .map_err(Error::from_debug)?
        .get();
    Ok((value, rest))
}

/// Read 4-byte big-endian IEEE-754 single
pub fn read_float(data: &[u8]) -> Result<(f32, &[u8])> {
    let (bytes, rest) = read_string_fix(data, 4)?;
    let value = F32BE::ref_from_bytes(bytes)
        .map_err(Error::from_debug)?
        .get();
    Ok((value, rest))
}

/// Read a count prefix (`[int]` that must not be negative)
pub fn read_count(data: &[u8]) -> Result<(usize, &[u8])> {
    let (count, rest) = read_int(data)?;
    let count = usize::try_from(count)
        .map_err(|e| Error::CorruptFrame(format!("negative count {}: {}", count, e)))?;
    Ok((count, rest))
}

/// Read fixed-length bytes
pub fn read_string_fix(data: &[u8], len: usize) -> Result<(&[u8], &[u8])> {
    if data.len() < len {
        return Err(Error::underrun(len, data.len()));
    }
    Ok(data.split_at(len))
}

/// Read `[short bytes]`: `[short]` length followed by that many bytes
pub fn read_short_bytes(data: &[u8]) -> Result<(&[u8], &[u8])> {
    let (len, rest) = read_short(data)?;
    read_string_fix(rest, usize::from(len))
}

/// Read `[string]`: `[short]` length followed by UTF-8 text
pub fn read_string(data: &[u8]) -> Result<(&str, &[u8])> {
    let (bytes, rest) = read_short_bytes(data)?;
    Ok((from_utf8(bytes)?, rest))
}

/// Read `[bytes]`: `[int]` length followed by that many bytes
///
/// A length of -1 (`0xFFFFFFFF`) is null: only the length is consumed.
/// Any other negative length is a corrupt frame.
pub fn read_bytes(data: &[u8]) -> Result<(Option<&[u8]>, &[u8])> {
    let (len, rest) = read_int(data)?;
    if len == NULL_LENGTH {
        return Ok((None, rest));
    }
    let len = usize::try_from(len)
        .map_err(|e| Error::CorruptFrame(format!("negative [bytes] length {}: {}", len, e)))?;
    let (bytes, rest) = read_string_fix(rest, len)?;
    Ok((Some(bytes), rest))
}
