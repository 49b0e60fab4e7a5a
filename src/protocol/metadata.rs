use std::sync::Arc;

use crate::constant::RowsFlags;
use crate::error::{Error, Result};
use crate::protocol::column_type::{TypeDescriptor, read_type};
use crate::protocol::primitive::*;
use zerocopy::byteorder::big_endian::{I32 as I32BE, U32 as U32BE};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Fixed-size head of a `<metadata>` block (8 bytes)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
pub struct MetadataHeader {
    flags: U32BE,
    column_count: I32BE,
}

impl MetadataHeader {
    pub fn flags(&self) -> RowsFlags {
        RowsFlags::from_bits_retain(self.flags.get())
    }

    pub fn column_count(&self) -> i32 {
        self.column_count.get()
    }
}

/// One column of a row set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnSpec {
    pub keyspace: String,
    pub table: String,
    pub name: String,
    pub ty: TypeDescriptor,
}

impl ColumnSpec {
    pub fn new(
        keyspace: impl Into<String>,
        table: impl Into<String>,
        name: impl Into<String>,
        ty: TypeDescriptor,
    ) -> Self {
        Self {
            keyspace: keyspace.into(),
            table: table.into(),
            name: name.into(),
            ty,
        }
    }
}

/// Row set metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub flags: RowsFlags,
    pub column_count: usize,
    /// Continuation token, present when `HAS_MORE_PAGES` is set
    pub paging_state: Option<Vec<u8>>,
    /// `None` when `NO_METADATA` is set
    pub columns: Option<Arc<[ColumnSpec]>>,
}

impl Metadata {
    /// Metadata carrying the given columns, for registration on a message
    /// whose own metadata is omitted.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            flags: RowsFlags::empty(),
            column_count: columns.len(),
            paging_state: None,
            columns: Some(columns.into()),
        }
    }

    pub fn columns(&self) -> Option<&[ColumnSpec]> {
        self.columns.as_deref()
    }

    pub fn has_more_pages(&self) -> bool {
        self.flags.contains(RowsFlags::HAS_MORE_PAGES)
    }
}

/// Read a `<metadata>` block
pub fn read_metadata(data: &[u8]) -> Result<(Metadata, &[u8])> {
    let (header_bytes, mut data) = read_string_fix(data, size_of::<MetadataHeader>())?;
    let header = MetadataHeader::ref_from_bytes(header_bytes).map_err(Error::from_debug)?;
    let flags = header.flags();
    let column_count = usize::try_from(header.column_count()).map_err(|e| {
        Error::CorruptFrame(format!(
            "negative column count {}: {}",
            header.column_count(),
            e
        ))
    })?;

    let mut paging_state = None;
    if flags.contains(RowsFlags::HAS_MORE_PAGES) {
        let (state, rest) = read_bytes(data)?;
        paging_state = state.map(<[u8]>::to_vec);
        data = rest;
    }

    let mut columns = None;
    if !flags.contains(RowsFlags::NO_METADATA) {
        let (specs, rest) = if flags.contains(RowsFlags::GLOBAL_TABLES_SPEC) {
            read_global_column_specs(data, column_count)?
        } else {
            read_column_specs(data, column_count)?
        };
        columns = Some(Arc::from(specs));
        data = rest;
    }

    Ok((
        Metadata {
            flags,
            column_count,
            paging_state,
            columns,
        },
        data,
    ))
}

// One keyspace/table pair shared by every column
fn read_global_column_specs(data: &[u8], count: usize) -> Result<(Vec<ColumnSpec>, &[u8])> {
    let (keyspace, data) = read_string(data)?;
    let (table, mut data) = read_string(data)?;
    let mut specs = Vec::with_capacity(count.min(data.len()));
    for _ in 0..count {
        let (name, rest) = read_string(data)?;
        let (ty, rest) = read_type(rest)?;
        specs.push(ColumnSpec::new(keyspace, table, name, ty));
        data = rest;
    }
    Ok((specs, data))
}

fn read_column_specs(mut data: &[u8], count: usize) -> Result<(Vec<ColumnSpec>, &[u8])> {
    let mut specs = Vec::with_capacity(count.min(data.len()));
    for _ in 0..count {
        let (keyspace, rest) = read_string(data)?;
        let (table, rest) = read_string(rest)?;
        let (name, rest) = read_string(rest)?;
        let (ty, rest) = read_type(rest)?;
        specs.push(ColumnSpec::new(keyspace, table, name, ty));
        data = rest;
    }
    Ok((specs, data))
}
