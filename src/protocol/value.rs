//! Reconstruction of typed values from `[bytes]` fields.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::Opts;
use crate::constant::{ColumnType, MAX_DECIMAL_SCALE};
use crate::error::{Error, Result};
use crate::protocol::column_type::TypeDescriptor;
use crate::protocol::primitive::*;
use crate::value::Value;
use simdutf8::basic::from_utf8;
use zerocopy::FromBytes;
use zerocopy::byteorder::big_endian::U16 as U16BE;

/// Read one `[bytes]` field and decode it as `ty`
///
/// A null field yields `Value::Null` whatever the declared type.
pub fn read_value<'a>(
    ty: &TypeDescriptor,
    data: &'a [u8],
    opts: &Opts,
) -> Result<(Value<'a>, &'a [u8])> {
    let (field, rest) = read_bytes(data)?;
    let value = match field {
        None => Value::Null,
        Some(bytes) => decode_field(ty, bytes, opts)?,
    };
    Ok((value, rest))
}

/// Decode the payload of a non-null field
pub fn decode_field<'a>(ty: &TypeDescriptor, bytes: &'a [u8], opts: &Opts) -> Result<Value<'a>> {
    match ty {
        TypeDescriptor::Simple(code) => decode_simple(*code, bytes, opts),
        TypeDescriptor::List(elem) | TypeDescriptor::Set(elem) => decode_list(elem, bytes, opts),
        TypeDescriptor::Map(key, value) => decode_map(key, value, bytes, opts),
        // No structural interpretation
        TypeDescriptor::Custom(_) => decode_inner_bytes(bytes),
        TypeDescriptor::UserDefinedType { .. } => Err(Error::UnsupportedType("user-defined type")),
        TypeDescriptor::Tuple(_) => Err(Error::UnsupportedType("tuple")),
    }
}

fn decode_simple<'a>(code: u16, bytes: &'a [u8], opts: &Opts) -> Result<Value<'a>> {
    let Some(column_type) = ColumnType::from_u16(code) else {
        return Err(Error::UnknownType(code));
    };

    match column_type {
        ColumnType::Ascii | ColumnType::Varchar | ColumnType::Text => {
            Ok(Value::Text(from_utf8(bytes)?))
        }

        ColumnType::Bigint | ColumnType::Counter | ColumnType::Timestamp => {
            let (value, _) = read_long(bytes)?;
            Ok(Value::BigInt(value))
        }

        ColumnType::Varint => Ok(Value::BigInt(read_varint(bytes, opts)?)),

        ColumnType::Blob => decode_inner_bytes(bytes),

        ColumnType::Boolean => {
            let (byte, _) = read_int_1(bytes)?;
            Ok(Value::Boolean(byte != 0))
        }

        ColumnType::Decimal => {
            let (scale, magnitude) = read_int(bytes)?;
            let unscaled = read_varint(magnitude, opts)?;
            Ok(Value::Decimal(format_decimal(unscaled, scale)?))
        }

        ColumnType::Double => {
            let (value, _) = read_double(bytes)?;
            Ok(Value::Double(value))
        }

        ColumnType::Float => {
            let (value, _) = read_float(bytes)?;
            Ok(Value::Float(value))
        }

        ColumnType::Int => {
            let (value, _) = read_int(bytes)?;
            Ok(Value::Int(value))
        }

        ColumnType::Uuid | ColumnType::Timeuuid => Ok(Value::Uuid(format_uuid(bytes)?)),

        ColumnType::Inet => Ok(Value::Inet(format_inet(bytes)?)),

        // Composite codes are turned into their own descriptors by `read_type`
        ColumnType::Custom
        | ColumnType::List
        | ColumnType::Map
        | ColumnType::Set
        | ColumnType::Udt
        | ColumnType::Tuple => Err(Error::UnknownType(code)),
    }
}

// The field is itself a `[bytes]`
fn decode_inner_bytes(bytes: &[u8]) -> Result<Value<'_>> {
    let (inner, _) = read_bytes(bytes)?;
    Ok(inner.map_or(Value::Null, Value::Bytes))
}

fn decode_list<'a>(elem: &TypeDescriptor, bytes: &'a [u8], opts: &Opts) -> Result<Value<'a>> {
    let (count, mut data) = read_count(bytes)?;
    let mut values = Vec::with_capacity(count.min(opts.preallocate_limit));
    for _ in 0..count {
        let (value, rest) = read_value(elem, data, opts)?;
        values.push(value);
        data = rest;
    }
    Ok(Value::List(values))
}

fn decode_map<'a>(
    key_type: &TypeDescriptor,
    value_type: &TypeDescriptor,
    bytes: &'a [u8],
    opts: &Opts,
) -> Result<Value<'a>> {
    let (count, mut data) = read_count(bytes)?;
    let mut pairs = Vec::with_capacity(count.min(opts.preallocate_limit));
    for _ in 0..count {
        let (key, rest) = read_value(key_type, data, opts)?;
        let (value, rest) = read_value(value_type, rest, opts)?;
        pairs.push((key, value));
        data = rest;
    }
    Ok(Value::Map(pairs))
}

/// Two's complement big-endian integer of any width, reduced to its low 64 bits
pub fn read_varint(bytes: &[u8], opts: &Opts) -> Result<i64> {
    let mut bytes = bytes;
    if bytes.len() > 8 {
        let (high, low) = bytes.split_at(bytes.len() - 8);
        let sign = match low.first() {
            Some(b) if b & 0x80 != 0 => 0xFF,
            _ => 0x00,
        };
        if high.iter().any(|&b| b != sign) {
            if opts.strict_varint {
                return Err(Error::VarintOverflow(bytes.len()));
            }
            tracing::debug!(len = bytes.len(), "varint truncated to 64 bits");
        }
        bytes = low;
    }

    let fill = match bytes.first() {
        Some(b) if b & 0x80 != 0 => 0xFF,
        _ => 0x00,
    };
    let mut buf = [fill; 8];
    if let Some(tail) = buf.get_mut(8 - bytes.len()..) {
        tail.copy_from_slice(bytes);
    }
    Ok(i64::from_be_bytes(buf))
}

/// Render `unscaled × 10^-scale` as `"<integer>.<fraction>"`
///
/// The point goes `scale` digits from the right, left-padding with zeros so a
/// digit precedes it (`5`, scale 3 → `0.005`). A scale of 0 or less leaves the
/// fraction empty, appending `-scale` zeros to the integer (`123`, scale -2 →
/// `12300.`).
pub fn format_decimal(unscaled: i64, scale: i32) -> Result<String> {
    if scale.unsigned_abs() > MAX_DECIMAL_SCALE {
        return Err(Error::CorruptFrame(format!(
            "decimal scale {} out of range",
            scale
        )));
    }
    let digits = unscaled.unsigned_abs().to_string();
    let sign = if unscaled < 0 { "-" } else { "" };

    let Ok(scale) = usize::try_from(scale) else {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        return Ok(format!("{}{}{}.", sign, digits, zeros));
    };
    let padded = format!("{:0>width$}", digits, width = scale + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    Ok(format!("{}{}.{}", sign, int_part, frac_part))
}

/// Render 16 bytes as eight big-endian 16-bit groups in 8-4-4-4-12 form
pub fn format_uuid(bytes: &[u8]) -> Result<String> {
    let groups = <[U16BE; 8]>::ref_from_bytes(bytes).map_err(|_e| {
        Error::CorruptFrame(format!("uuid must be 16 bytes, got {}", bytes.len()))
    })?;
    let [g0, g1, g2, g3, g4, g5, g6, g7] = (*groups).map(|g| g.get());
    Ok(format!(
        "{:04x}{:04x}-{:04x}-{:04x}-{:04x}-{:04x}{:04x}{:04x}",
        g0, g1, g2, g3, g4, g5, g6, g7
    ))
}

/// Render a 4- or 16-byte address
pub fn format_inet(bytes: &[u8]) -> Result<String> {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Ok(Ipv4Addr::from(octets).to_string());
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return Ok(Ipv6Addr::from(octets).to_string());
    }
    Err(Error::CorruptFrame(format!(
        "inet must be 4 or 16 bytes, got {}",
        bytes.len()
    )))
}
