use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

use crate::constant::ColumnType;
use crate::error::Error;
use crate::protocol::{ColumnSpec, TypeDescriptor};
use crate::raw::{FromRow, FromValue};
use crate::row::Row;
use crate::value::Value;

fn row<'a>(cells: Vec<(&str, Value<'a>)>) -> Row<'a> {
    let (names, values): (Vec<_>, Vec<_>) = cells.into_iter().unzip();
    let columns: Arc<[ColumnSpec]> = names
        .into_iter()
        .map(|name| ColumnSpec::new("ks", "t", name, TypeDescriptor::simple(ColumnType::Int)))
        .collect();
    Row::new(columns, values)
}

#[test]
fn test_from_value_scalars() {
    assert_eq!(i32::from_value(Value::Int(5)).unwrap(), 5);
    assert_eq!(i64::from_value(Value::Int(5)).unwrap(), 5);
    assert_eq!(i64::from_value(Value::BigInt(-9)).unwrap(), -9);
    assert_eq!(f64::from_value(Value::Float(0.5)).unwrap(), 0.5);
    assert!(bool::from_value(Value::Boolean(true)).unwrap());
    assert_eq!(<&str>::from_value(Value::Text("hi")).unwrap(), "hi");
    assert_eq!(
        String::from_value(Value::Decimal("1.50".to_string())).unwrap(),
        "1.50"
    );
    assert_eq!(<&[u8]>::from_value(Value::Bytes(&[1, 2])).unwrap(), &[1, 2]);
    assert_eq!(Vec::<u8>::from_value(Value::Bytes(&[3])).unwrap(), vec![3]);
    assert_eq!(
        IpAddr::from_value(Value::Inet("10.0.0.1".to_string())).unwrap(),
        "10.0.0.1".parse::<IpAddr>().unwrap()
    );
}

#[test]
fn test_from_value_mismatch() {
    let err = i32::from_value(Value::Text("x")).unwrap_err();
    assert!(matches!(err, Error::BadUsageError(ref msg) if msg.contains("TEXT")));
    assert!(i32::from_value(Value::BigInt(1)).is_err());
    assert!(String::from_value(Value::Null).is_err());
}

#[test]
fn test_from_value_option() {
    assert_eq!(Option::<i32>::from_value(Value::Null).unwrap(), None);
    assert_eq!(Option::<i32>::from_value(Value::Int(3)).unwrap(), Some(3));
    assert!(Option::<i32>::from_value(Value::Text("x")).is_err());
}

#[test]
fn test_from_value_collections() {
    let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(Vec::<i32>::from_value(list).unwrap(), vec![1, 2]);

    let map = Value::Map(vec![
        (Value::Text("a"), Value::Int(1)),
        (Value::Text("b"), Value::Null),
    ]);
    let map = HashMap::<String, Option<i32>>::from_value(map).unwrap();
    assert_eq!(map.get("a"), Some(&Some(1)));
    assert_eq!(map.get("b"), Some(&None));
}

#[test]
fn test_row_lookup() {
    let row = row(vec![("id", Value::Int(1)), ("name", Value::Text("bob"))]);
    assert_eq!(row.len(), 2);
    assert_eq!(row.get("name"), Some(&Value::Text("bob")));
    assert_eq!(row.get("missing"), None);
    assert_eq!(row.get_index(0), Some(&Value::Int(1)));
    let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["id", "name"]);
}

#[test]
fn test_from_row_tuple() {
    let r = row(vec![("id", Value::Int(1)), ("name", Value::Text("bob"))]);
    let (id, name) = <(i32, String)>::from_row(r).unwrap();
    assert_eq!(id, 1);
    assert_eq!(name, "bob");

    let r = row(vec![("id", Value::Int(1))]);
    assert!(<(i32, String)>::from_row(r).is_err());
}

#[test]
fn test_from_row_values() {
    let r = row(vec![("a", Value::Null), ("b", Value::Int(2))]);
    let values = Vec::<Value>::from_row(r).unwrap();
    assert_eq!(values, vec![Value::Null, Value::Int(2)]);
}

#[cfg(feature = "with-chrono")]
#[test]
fn test_from_value_timestamp() {
    let dt = chrono::DateTime::<chrono::Utc>::from_value(Value::BigInt(1_000)).unwrap();
    assert_eq!(dt.timestamp(), 1);
}

#[cfg(feature = "with-time")]
#[test]
fn test_from_value_offset_date_time() {
    let dt = time::OffsetDateTime::from_value(Value::BigInt(1_500)).unwrap();
    assert_eq!(dt.unix_timestamp(), 1);
    assert_eq!(dt.millisecond(), 500);
}

#[cfg(feature = "with-uuid")]
#[test]
fn test_from_value_uuid() {
    let s = "550e8400-e29b-41d4-a716-446655440000";
    let uuid = uuid::Uuid::from_value(Value::Uuid(s.to_string())).unwrap();
    assert_eq!(uuid.to_string(), s);
}

#[cfg(feature = "with-rust-decimal")]
#[test]
fn test_from_value_decimal() {
    let d = rust_decimal::Decimal::from_value(Value::Decimal("123.45".to_string())).unwrap();
    assert_eq!(d.to_string(), "123.45");
    let d = rust_decimal::Decimal::from_value(Value::Decimal("12300000.".to_string())).unwrap();
    assert_eq!(d, rust_decimal::Decimal::from(12_300_000));
    let d = rust_decimal::Decimal::from_value(Value::Decimal("0.0000000001".to_string())).unwrap();
    assert_eq!(d.scale(), 10);
}
