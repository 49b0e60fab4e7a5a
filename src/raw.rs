//! Conversion of decoded values and rows into caller-chosen types.
//!
//! `FromValue` turns one [`Value`] into a Rust type, `FromRow` turns one [`Row`]
//! into an output row shape. Row fetches on
//! [`ResultMessage`](crate::result::ResultMessage) are generic over `FromRow`,
//! so the output representation is picked by the caller.

use std::collections::HashMap;
use std::hash::Hash;
use std::net::IpAddr;

use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::Value;

fn mismatch<T>(cql_type: &str) -> Error {
    Error::BadUsageError(format!(
        "Cannot decode CQL type {} to {}",
        cql_type,
        std::any::type_name::<T>()
    ))
}

/// Trait for types that can be built from a decoded CQL value.
///
/// Each method corresponds to one kind of decoded value. Implementations
/// override the ones they accept; the rest return `Err`.
pub trait FromValue<'a>: Sized {
    fn from_null() -> Result<Self> {
        Err(mismatch::<Self>("NULL"))
    }

    fn from_bytes(_v: &'a [u8]) -> Result<Self> {
        Err(mismatch::<Self>("BLOB"))
    }

    fn from_text(_v: &'a str) -> Result<Self> {
        Err(mismatch::<Self>("TEXT"))
    }

    fn from_bigint(_v: i64) -> Result<Self> {
        Err(mismatch::<Self>("BIGINT"))
    }

    fn from_boolean(_v: bool) -> Result<Self> {
        Err(mismatch::<Self>("BOOLEAN"))
    }

    fn from_decimal(_v: String) -> Result<Self> {
        Err(mismatch::<Self>("DECIMAL"))
    }

    fn from_double(_v: f64) -> Result<Self> {
        Err(mismatch::<Self>("DOUBLE"))
    }

    fn from_float(_v: f32) -> Result<Self> {
        Err(mismatch::<Self>("FLOAT"))
    }

    fn from_int(_v: i32) -> Result<Self> {
        Err(mismatch::<Self>("INT"))
    }

    fn from_uuid(_v: String) -> Result<Self> {
        Err(mismatch::<Self>("UUID"))
    }

    fn from_inet(_v: String) -> Result<Self> {
        Err(mismatch::<Self>("INET"))
    }

    fn from_list(_v: Vec<Value<'a>>) -> Result<Self> {
        Err(mismatch::<Self>("LIST"))
    }

    fn from_map(_v: Vec<(Value<'a>, Value<'a>)>) -> Result<Self> {
        Err(mismatch::<Self>("MAP"))
    }

    /// Dispatch on the kind of `value`
    fn from_value(value: Value<'a>) -> Result<Self> {
        match value {
            Value::Null => Self::from_null(),
            Value::Bytes(v) => Self::from_bytes(v),
            Value::Text(v) => Self::from_text(v),
            Value::BigInt(v) => Self::from_bigint(v),
            Value::Boolean(v) => Self::from_boolean(v),
            Value::Decimal(v) => Self::from_decimal(v),
            Value::Double(v) => Self::from_double(v),
            Value::Float(v) => Self::from_float(v),
            Value::Int(v) => Self::from_int(v),
            Value::Uuid(v) => Self::from_uuid(v),
            Value::Inet(v) => Self::from_inet(v),
            Value::List(v) => Self::from_list(v),
            Value::Map(v) => Self::from_map(v),
        }
    }
}

/// Trait for output row shapes built from one decoded row.
pub trait FromRow<'a>: Sized {
    fn from_row(row: Row<'a>) -> Result<Self>;
}

// ============================================================================
// FromValue implementations
// ============================================================================

impl<'a> FromValue<'a> for Value<'a> {
    fn from_value(value: Value<'a>) -> Result<Self> {
        Ok(value)
    }
}

impl FromValue<'_> for i32 {
    fn from_int(v: i32) -> Result<Self> {
        Ok(v)
    }
}

impl FromValue<'_> for i64 {
    fn from_int(v: i32) -> Result<Self> {
        Ok(i64::from(v))
    }

    fn from_bigint(v: i64) -> Result<Self> {
        Ok(v)
    }
}

impl FromValue<'_> for f32 {
    fn from_float(v: f32) -> Result<Self> {
        Ok(v)
    }
}

impl FromValue<'_> for f64 {
    fn from_double(v: f64) -> Result<Self> {
        Ok(v)
    }

    fn from_float(v: f32) -> Result<Self> {
        Ok(f64::from(v))
    }
}

impl FromValue<'_> for bool {
    fn from_boolean(v: bool) -> Result<Self> {
        Ok(v)
    }
}

impl<'a> FromValue<'a> for &'a [u8] {
    fn from_bytes(v: &'a [u8]) -> Result<Self> {
        Ok(v)
    }
}

impl FromValue<'_> for Vec<u8> {
    fn from_bytes(v: &[u8]) -> Result<Self> {
        Ok(v.to_vec())
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_text(v: &'a str) -> Result<Self> {
        Ok(v)
    }
}

impl FromValue<'_> for String {
    fn from_text(v: &str) -> Result<Self> {
        Ok(v.to_owned())
    }

    fn from_decimal(v: String) -> Result<Self> {
        Ok(v)
    }

    fn from_uuid(v: String) -> Result<Self> {
        Ok(v)
    }

    fn from_inet(v: String) -> Result<Self> {
        Ok(v)
    }
}

impl FromValue<'_> for IpAddr {
    fn from_inet(v: String) -> Result<Self> {
        v.parse()
            .map_err(|e| Error::BadUsageError(format!("Cannot parse inet {}: {}", v, e)))
    }
}

impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    fn from_null() -> Result<Self> {
        Ok(None)
    }

    fn from_value(value: Value<'a>) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

impl<'a, T: FromValue<'a>> FromValue<'a> for Vec<T> {
    fn from_list(v: Vec<Value<'a>>) -> Result<Self> {
        v.into_iter().map(T::from_value).collect()
    }
}

impl<'a, K, V> FromValue<'a> for HashMap<K, V>
where
    K: FromValue<'a> + Eq + Hash,
    V: FromValue<'a>,
{
    fn from_map(v: Vec<(Value<'a>, Value<'a>)>) -> Result<Self> {
        v.into_iter()
            .map(|(key, value)| Ok((K::from_value(key)?, V::from_value(value)?)))
            .collect()
    }
}

#[cfg(feature = "with-uuid")]
impl FromValue<'_> for uuid::Uuid {
    fn from_uuid(v: String) -> Result<Self> {
        uuid::Uuid::parse_str(&v)
            .map_err(|e| Error::BadUsageError(format!("Cannot parse uuid {}: {}", v, e)))
    }
}

/// TIMESTAMP is milliseconds since the Unix epoch
#[cfg(feature = "with-chrono")]
impl FromValue<'_> for chrono::DateTime<chrono::Utc> {
    fn from_bigint(v: i64) -> Result<Self> {
        chrono::DateTime::from_timestamp_millis(v).ok_or_else(|| {
            Error::BadUsageError(format!("Timestamp out of range: {} ms", v))
        })
    }
}

#[cfg(feature = "with-time")]
impl FromValue<'_> for time::OffsetDateTime {
    fn from_bigint(v: i64) -> Result<Self> {
        time::OffsetDateTime::from_unix_timestamp_nanos(i128::from(v) * 1_000_000)
            .map_err(|e| Error::BadUsageError(format!("Timestamp out of range: {} ms: {}", v, e)))
    }
}

#[cfg(feature = "with-rust-decimal")]
impl FromValue<'_> for rust_decimal::Decimal {
    fn from_int(v: i32) -> Result<Self> {
        Ok(rust_decimal::Decimal::from(v))
    }

    fn from_bigint(v: i64) -> Result<Self> {
        Ok(rust_decimal::Decimal::from(v))
    }

    fn from_decimal(v: String) -> Result<Self> {
        // Integral values carry a trailing point
        v.trim_end_matches('.')
            .parse::<rust_decimal::Decimal>()
            .map_err(|e| Error::BadUsageError(format!("Cannot parse decimal {}: {}", v, e)))
    }
}

// ============================================================================
// FromRow implementations
// ============================================================================

impl<'a> FromRow<'a> for Row<'a> {
    fn from_row(row: Row<'a>) -> Result<Self> {
        Ok(row)
    }
}

impl<'a> FromRow<'a> for Vec<Value<'a>> {
    fn from_row(row: Row<'a>) -> Result<Self> {
        Ok(row.into_values())
    }
}

macro_rules! impl_from_row_tuple {
    ($len:literal; $($T:ident),+) => {
        impl<'a, $($T: FromValue<'a>),+> FromRow<'a> for ($($T,)+) {
            #[expect(non_snake_case)]
            fn from_row(row: Row<'a>) -> Result<Self> {
                if row.len() < $len {
                    return Err(Error::BadUsageError(format!(
                        "Cannot decode a row of {} columns into a tuple of {}",
                        row.len(),
                        $len
                    )));
                }
                let mut values = row.into_values().into_iter();
                $(
                    let $T = $T::from_value(values.next().unwrap_or(Value::Null))?;
                )+
                Ok(($($T,)+))
            }
        }
    };
}

impl_from_row_tuple!(1; A);
impl_from_row_tuple!(2; A, B);
impl_from_row_tuple!(3; A, B, C);
impl_from_row_tuple!(4; A, B, C, D);
impl_from_row_tuple!(5; A, B, C, D, E);
impl_from_row_tuple!(6; A, B, C, D, E, F);
impl_from_row_tuple!(7; A, B, C, D, E, F, G);
impl_from_row_tuple!(8; A, B, C, D, E, F, G, H);
impl_from_row_tuple!(9; A, B, C, D, E, F, G, H, I);
impl_from_row_tuple!(10; A, B, C, D, E, F, G, H, I, J);
impl_from_row_tuple!(11; A, B, C, D, E, F, G, H, I, J, K);
impl_from_row_tuple!(12; A, B, C, D, E, F, G, H, I, J, K, L);
