//! `Rows` result body: metadata, row count, then `row_count × column_count`
//! `[bytes]` fields in row-major order.

use std::sync::Arc;

use crate::Opts;
use crate::error::{Error, Result};
use crate::protocol::metadata::{ColumnSpec, Metadata, read_metadata};
use crate::protocol::primitive::read_count;
use crate::protocol::value::read_value;
use crate::raw::FromRow;
use crate::row::Row;
use crate::value::Value;

/// A fully decoded `Rows` body
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet<'a> {
    pub metadata: Metadata,
    pub rows: Vec<Row<'a>>,
}

/// Everything in front of the first row
#[derive(Debug, Clone)]
pub struct RowsHeader {
    pub metadata: Metadata,
    /// Columns rows are decoded with: the inline ones, else the registered ones
    pub columns: Arc<[ColumnSpec]>,
    pub row_count: usize,
}

/// Read metadata and row count, resolving the column list
///
/// `registered` is only consulted when the inline metadata omits its column
/// specs (`NO_METADATA`).
pub fn read_rows_header<'a>(
    data: &'a [u8],
    registered: Option<&Metadata>,
) -> Result<(RowsHeader, &'a [u8])> {
    let (metadata, data) = read_metadata(data)?;
    let columns = resolve_columns(&metadata, registered)?;
    let (row_count, data) = read_count(data)?;
    tracing::trace!(
        columns = columns.len(),
        rows = row_count,
        more_pages = metadata.has_more_pages(),
        "rows header"
    );
    Ok((
        RowsHeader {
            metadata,
            columns,
            row_count,
        },
        data,
    ))
}

fn resolve_columns(metadata: &Metadata, registered: Option<&Metadata>) -> Result<Arc<[ColumnSpec]>> {
    if let Some(columns) = &metadata.columns {
        return Ok(Arc::clone(columns));
    }
    registered
        .and_then(|registered| registered.columns.as_ref())
        .map(Arc::clone)
        .ok_or(Error::MissingMetadata)
}

/// Decode one row, one `[bytes]` field per column
pub fn read_row<'a>(
    columns: &Arc<[ColumnSpec]>,
    mut data: &'a [u8],
    opts: &Opts,
) -> Result<(Row<'a>, &'a [u8])> {
    let mut values = Vec::with_capacity(columns.len());
    for column in columns.iter() {
        let (value, rest) = read_value(&column.ty, data, opts)?;
        values.push(value);
        data = rest;
    }
    Ok((Row::new(Arc::clone(columns), values), data))
}

/// Decode every row described by `header` into `R`
pub fn read_rows<'a, R: FromRow<'a>>(
    header: &RowsHeader,
    mut data: &'a [u8],
    opts: &Opts,
) -> Result<(Vec<R>, &'a [u8])> {
    let mut rows = Vec::with_capacity(header.row_count.min(opts.preallocate_limit));
    for _ in 0..header.row_count {
        let (row, rest) = read_row(&header.columns, data, opts)?;
        rows.push(R::from_row(row)?);
        data = rest;
    }
    Ok((rows, data))
}

/// Decode every row, keeping only the value of column `index`
///
/// Every field is still decoded so that malformed values in other columns are
/// reported.
pub fn read_column<'a>(
    header: &RowsHeader,
    index: usize,
    mut data: &'a [u8],
    opts: &Opts,
) -> Result<(Vec<Value<'a>>, &'a [u8])> {
    if index >= header.columns.len() {
        return Err(Error::BadUsageError(format!(
            "Column index {} out of range for {} columns",
            index,
            header.columns.len()
        )));
    }

    let mut column = Vec::with_capacity(header.row_count.min(opts.preallocate_limit));
    for _ in 0..header.row_count {
        for (idx, spec) in header.columns.iter().enumerate() {
            let (value, rest) = read_value(&spec.ty, data, opts)?;
            if idx == index {
                column.push(value);
            }
            data = rest;
        }
    }
    Ok((column, data))
}

/// Decode a whole `Rows` body
pub fn read_row_set<'a>(
    data: &'a [u8],
    registered: Option<&Metadata>,
    opts: &Opts,
) -> Result<(RowSet<'a>, &'a [u8])> {
    let (header, data) = read_rows_header(data, registered)?;
    let (rows, data) = read_rows(&header, data, opts)?;
    Ok((
        RowSet {
            metadata: header.metadata,
            rows,
        },
        data,
    ))
}
