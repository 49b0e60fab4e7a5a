use std::fmt;

use crate::constant::{ColumnType, MAX_TYPE_DEPTH};
use crate::error::{Error, Result};
use crate::protocol::primitive::*;

/// Decoded `[option]` describing the type of a column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Scalar type code (may be a code this crate cannot decode values of)
    Simple(u16),
    List(Box<TypeDescriptor>),
    Set(Box<TypeDescriptor>),
    Map(Box<TypeDescriptor>, Box<TypeDescriptor>),
    /// Server-side type identified by its Java class name
    Custom(String),
    UserDefinedType {
        keyspace: String,
        name: String,
        /// Fields in declaration order
        fields: Vec<(String, TypeDescriptor)>,
    },
    Tuple(Vec<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Simple descriptor for a scalar column type
    pub fn simple(column_type: ColumnType) -> Self {
        Self::Simple(column_type as u16)
    }
}

/// Read a recursively-structured `[option]`
///
/// Nesting deeper than [`MAX_TYPE_DEPTH`] is a corrupt frame.
pub fn read_type(data: &[u8]) -> Result<(TypeDescriptor, &[u8])> {
    read_type_nested(data, 0)
}

fn read_type_nested(data: &[u8], depth: usize) -> Result<(TypeDescriptor, &[u8])> {
    if depth > MAX_TYPE_DEPTH {
        return Err(Error::CorruptFrame(format!(
            "type nesting deeper than {}",
            MAX_TYPE_DEPTH
        )));
    }
    let (code, rest) = read_short(data)?;

    match ColumnType::from_u16(code) {
        Some(ColumnType::Custom) => {
            let (name, rest) = read_string(rest)?;
            Ok((TypeDescriptor::Custom(name.to_owned()), rest))
        }

        Some(ColumnType::List) => {
            let (elem, rest) = read_type_nested(rest, depth + 1)?;
            Ok((TypeDescriptor::List(Box::new(elem)), rest))
        }

        Some(ColumnType::Set) => {
            let (elem, rest) = read_type_nested(rest, depth + 1)?;
            Ok((TypeDescriptor::Set(Box::new(elem)), rest))
        }

        Some(ColumnType::Map) => {
            let (key, rest) = read_type_nested(rest, depth + 1)?;
            let (value, rest) = read_type_nested(rest, depth + 1)?;
            Ok((TypeDescriptor::Map(Box::new(key), Box::new(value)), rest))
        }

        Some(ColumnType::Udt) => {
            let (keyspace, rest) = read_string(rest)?;
            let (name, rest) = read_string(rest)?;
            let (count, mut rest) = read_short(rest)?;
            let mut fields = Vec::with_capacity(usize::from(count));
            for _ in 0..count {
                let (field_name, after_name) = read_string(rest)?;
                let (field_type, after_type) = read_type_nested(after_name, depth + 1)?;
                fields.push((field_name.to_owned(), field_type));
                rest = after_type;
            }
            Ok((
                TypeDescriptor::UserDefinedType {
                    keyspace: keyspace.to_owned(),
                    name: name.to_owned(),
                    fields,
                },
                rest,
            ))
        }

        Some(ColumnType::Tuple) => {
            let (count, mut rest) = read_short(rest)?;
            let mut types = Vec::with_capacity(usize::from(count));
            for _ in 0..count {
                let (elem, after) = read_type_nested(rest, depth + 1)?;
                types.push(elem);
                rest = after;
            }
            Ok((TypeDescriptor::Tuple(types), rest))
        }

        // Any other code is structurally valid on its own
        _ => Ok((TypeDescriptor::Simple(code), rest)),
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Simple(code) => match ColumnType::from_u16(*code) {
                Some(column_type) => write!(f, "{}", column_type.name()),
                None => write!(f, "unknown(0x{:04X})", code),
            },
            TypeDescriptor::List(elem) => write!(f, "list<{}>", elem),
            TypeDescriptor::Set(elem) => write!(f, "set<{}>", elem),
            TypeDescriptor::Map(key, value) => write!(f, "map<{}, {}>", key, value),
            TypeDescriptor::Custom(name) => write!(f, "'{}'", name),
            TypeDescriptor::UserDefinedType { keyspace, name, .. } => {
                write!(f, "{}.{}", keyspace, name)
            }
            TypeDescriptor::Tuple(types) => {
                write!(f, "tuple<")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", ty)?;
                }
                write!(f, ">")
            }
        }
    }
}
