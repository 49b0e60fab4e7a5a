/// A decoded CQL value
///
/// Text and blob payloads borrow from the message buffer. Types whose text
/// form is reconstructed from binary (decimal, uuid, inet) are owned strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// NULL value (`[bytes]` length of -1)
    Null,
    /// BLOB, custom types
    Bytes(&'a [u8]),
    /// ASCII, VARCHAR, TEXT
    Text(&'a str),
    /// BIGINT, COUNTER, TIMESTAMP, VARINT (truncated to 64 bits)
    BigInt(i64),
    /// BOOLEAN
    Boolean(bool),
    /// DECIMAL as `"<integer>.<fraction>"`; the fraction is empty when the
    /// scale is not positive
    Decimal(String),
    /// DOUBLE
    Double(f64),
    /// FLOAT
    Float(f32),
    /// INT
    Int(i32),
    /// UUID, TIMEUUID as lowercase 8-4-4-4-12 hex
    Uuid(String),
    /// INET as dotted-decimal or colon-hex text
    Inet(String),
    /// LIST, SET
    List(Vec<Value<'a>>),
    /// MAP, in wire order
    Map(Vec<(Value<'a>, Value<'a>)>),
}

impl<'a> Value<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Integer value, widening INT
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::BigInt(v) => Some(*v),
            Value::Int(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Floating point value, widening FLOAT
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            Value::Float(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Text of any string-rendered value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Decimal(s) | Value::Uuid(s) | Value::Inet(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value<'a>, Value<'a>)]> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Name of the variant, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bytes(_) => "BLOB",
            Value::Text(_) => "TEXT",
            Value::BigInt(_) => "BIGINT",
            Value::Boolean(_) => "BOOLEAN",
            Value::Decimal(_) => "DECIMAL",
            Value::Double(_) => "DOUBLE",
            Value::Float(_) => "FLOAT",
            Value::Int(_) => "INT",
            Value::Uuid(_) => "UUID",
            Value::Inet(_) => "INET",
            Value::List(_) => "LIST",
            Value::Map(_) => "MAP",
        }
    }
}
