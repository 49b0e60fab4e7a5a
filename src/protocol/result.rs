use crate::Opts;
use crate::constant::ResultKind;
use crate::error::Result;
use crate::protocol::metadata::{Metadata, read_metadata};
use crate::protocol::primitive::*;
use crate::protocol::resultset::{RowSet, read_row_set};

/// Decoded RESULT body, one variant per result kind
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBody<'a> {
    Void,
    Rows(RowSet<'a>),
    /// Keyspace now in use
    SetKeyspace(&'a str),
    Prepared(Prepared<'a>),
    SchemaChange(SchemaChange<'a>),
}

/// Prepared statement descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared<'a> {
    /// Opaque statement id, a `[short bytes]`
    pub id: &'a [u8],
    /// Bound variables
    pub metadata: Metadata,
    pub result_metadata: Metadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaChange<'a> {
    pub change_type: &'a str,
    pub keyspace: &'a str,
    pub table: &'a str,
}

/// Decode the body that follows the result kind
///
/// `registered` stands in for row set columns omitted by `NO_METADATA`.
pub fn read_result<'a>(
    kind: ResultKind,
    data: &'a [u8],
    registered: Option<&Metadata>,
    opts: &Opts,
) -> Result<ResultBody<'a>> {
    match kind {
        ResultKind::Void => Ok(ResultBody::Void),
        ResultKind::Rows => {
            let (row_set, _rest) = read_row_set(data, registered, opts)?;
            Ok(ResultBody::Rows(row_set))
        }
        ResultKind::SetKeyspace => {
            let (keyspace, _rest) = read_string(data)?;
            Ok(ResultBody::SetKeyspace(keyspace))
        }
        ResultKind::Prepared => {
            let (id, data) = read_short_bytes(data)?;
            let (metadata, data) = read_metadata(data)?;
            let (result_metadata, _rest) = read_metadata(data)?;
            Ok(ResultBody::Prepared(Prepared {
                id,
                metadata,
                result_metadata,
            }))
        }
        ResultKind::SchemaChange => {
            let (change_type, data) = read_string(data)?;
            let (keyspace, data) = read_string(data)?;
            let (table, _rest) = read_string(data)?;
            Ok(ResultBody::SchemaChange(SchemaChange {
                change_type,
                keyspace,
                table,
            }))
        }
    }
}
