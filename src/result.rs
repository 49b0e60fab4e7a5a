use std::sync::OnceLock;

use crate::Opts;
use crate::constant::ResultKind;
use crate::error::{Error, Result};
use crate::protocol::metadata::{Metadata, read_metadata};
use crate::protocol::primitive::{read_string_fix, read_uint};
use crate::protocol::result::{ResultBody, read_result};
use crate::protocol::resultset::{RowsHeader, read_column, read_row, read_rows, read_rows_header};
use crate::protocol::value::read_value;
use crate::raw::{FromRow, FromValue};
use crate::row::Row;
use crate::value::Value;

/// A received RESULT message body
///
/// The payload is never mutated. Every decode and fetch starts again right
/// after the 4-byte result kind, so any of them can be called repeatedly, in
/// any order, and from several threads at once.
///
/// ```rs
/// let message = ResultMessage::new(&payload);
/// for row in message.fetch_all()? {
///     println!("{:?}", row.get("id"));
/// }
/// let users: Vec<(i32, String)> = message.fetch_all_as()?;
/// ```
#[derive(Debug)]
pub struct ResultMessage<'a> {
    payload: &'a [u8],
    kind: OnceLock<ResultKind>,
    metadata: Option<Metadata>,
    opts: Opts,
}

impl<'a> ResultMessage<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self {
            payload,
            kind: OnceLock::new(),
            metadata: None,
            opts: Opts::default(),
        }
    }

    /// Register the metadata to decode rows with when the message omits its own
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = Some(metadata);
    }

    pub fn with_opts(mut self, opts: Opts) -> Self {
        self.opts = opts;
        self
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Result kind, read once and cached
    pub fn kind(&self) -> Result<ResultKind> {
        if let Some(kind) = self.kind.get() {
            return Ok(*kind);
        }
        let (code, _rest) = read_uint(self.payload)?;
        let kind = ResultKind::from_u32(code).ok_or(Error::InvalidResultKind(code))?;
        Ok(*self.kind.get_or_init(|| kind))
    }

    // Input right after the result kind
    fn body(&self) -> Result<&'a [u8]> {
        let (_kind, body) = read_string_fix(self.payload, 4)?;
        Ok(body)
    }

    // Row fetches reject every kind but Rows, unknown codes included
    fn expect_rows(&self) -> Result<()> {
        match self.kind() {
            Ok(ResultKind::Rows) => Ok(()),
            Ok(kind) => Err(Error::UnexpectedKind(kind as u32)),
            Err(Error::InvalidResultKind(code)) => Err(Error::UnexpectedKind(code)),
            Err(e) => Err(e),
        }
    }

    fn rows_header(&self) -> Result<(RowsHeader, &'a [u8])> {
        self.expect_rows()?;
        read_rows_header(self.body()?, self.metadata.as_ref())
    }

    /// Decode the whole body according to its kind
    #[tracing::instrument(skip_all)]
    pub fn decode(&self) -> Result<ResultBody<'a>> {
        let kind = self.kind()?;
        tracing::debug!(?kind, len = self.payload.len(), "decoding result");
        read_result(kind, self.body()?, self.metadata.as_ref(), &self.opts)
    }

    /// Metadata of a row set as it appears on the wire
    pub fn metadata(&self) -> Result<Metadata> {
        self.expect_rows()?;
        let (metadata, _rest) = read_metadata(self.body()?)?;
        Ok(metadata)
    }

    /// Every row, each a map from column name to value
    pub fn fetch_all(&self) -> Result<Vec<Row<'a>>> {
        self.fetch_all_as()
    }

    /// Every row, converted to `R`
    #[tracing::instrument(skip_all)]
    pub fn fetch_all_as<R: FromRow<'a>>(&self) -> Result<Vec<R>> {
        let (header, data) = self.rows_header()?;
        let (rows, _rest) = read_rows(&header, data, &self.opts)?;
        Ok(rows)
    }

    /// The value of column `index` from every row
    #[tracing::instrument(skip_all, fields(index = index))]
    pub fn fetch_column(&self, index: usize) -> Result<Vec<Value<'a>>> {
        let (header, data) = self.rows_header()?;
        let (column, _rest) = read_column(&header, index, data, &self.opts)?;
        Ok(column)
    }

    /// The first row, or `None` when there are no rows
    pub fn fetch_row(&self) -> Result<Option<Row<'a>>> {
        self.fetch_row_as()
    }

    #[tracing::instrument(skip_all)]
    pub fn fetch_row_as<R: FromRow<'a>>(&self) -> Result<Option<R>> {
        let (header, data) = self.rows_header()?;
        if header.row_count == 0 {
            return Ok(None);
        }
        let (row, _rest) = read_row(&header.columns, data, &self.opts)?;
        R::from_row(row).map(Some)
    }

    /// The first column of the first row, or `None` when there is no such cell
    pub fn fetch_one(&self) -> Result<Option<Value<'a>>> {
        self.fetch_one_as()
    }

    #[tracing::instrument(skip_all)]
    pub fn fetch_one_as<T: FromValue<'a>>(&self) -> Result<Option<T>> {
        let (header, data) = self.rows_header()?;
        if header.row_count == 0 {
            return Ok(None);
        }
        let Some(first) = header.columns.first() else {
            return Ok(None);
        };
        let (value, _rest) = read_value(&first.ty, data, &self.opts)?;
        T::from_value(value).map(Some)
    }
}
