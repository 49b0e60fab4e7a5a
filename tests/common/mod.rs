#![allow(dead_code)]

//! Builders for RESULT payloads.

pub const VOID: u32 = 0x0001;
pub const ROWS: u32 = 0x0002;
pub const SET_KEYSPACE: u32 = 0x0003;
pub const PREPARED: u32 = 0x0004;
pub const SCHEMA_CHANGE: u32 = 0x0005;

pub const GLOBAL_TABLES_SPEC: u32 = 0x0001;
pub const HAS_MORE_PAGES: u32 = 0x0002;
pub const NO_METADATA: u32 = 0x0004;

pub const INT: u16 = 0x0009;
pub const VARCHAR: u16 = 0x000D;
pub const BIGINT: u16 = 0x0002;
pub const LIST: u16 = 0x0020;

/// Send decoder logs to the test output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn new(kind: u32) -> Self {
        Self(kind.to_be_bytes().to_vec())
    }

    pub fn int(mut self, v: i32) -> Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn uint(mut self, v: u32) -> Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn short(mut self, v: u16) -> Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn string(mut self, s: &str) -> Self {
        self.0.extend_from_slice(&(s.len() as u16).to_be_bytes());
        self.0.extend_from_slice(s.as_bytes());
        self
    }

    pub fn bytes(mut self, b: &[u8]) -> Self {
        self.0.extend_from_slice(&(b.len() as i32).to_be_bytes());
        self.0.extend_from_slice(b);
        self
    }

    pub fn null(self) -> Self {
        self.int(-1)
    }

    pub fn int_cell(self, v: i32) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    pub fn text_cell(self, s: &str) -> Self {
        self.bytes(s.as_bytes())
    }

    /// Metadata with a global table spec and the given `(name, type)` columns
    pub fn global_metadata(self, flags: u32, columns: &[(&str, u16)]) -> Self {
        let mut this = self
            .uint(flags | GLOBAL_TABLES_SPEC)
            .int(columns.len() as i32)
            .string("ks")
            .string("users");
        for (name, ty) in columns {
            this = this.string(name).short(*ty);
        }
        this
    }

    /// Metadata repeating keyspace and table for each column
    pub fn per_column_metadata(self, flags: u32, columns: &[(&str, u16)]) -> Self {
        let mut this = self.uint(flags).int(columns.len() as i32);
        for (name, ty) in columns {
            this = this.string("ks").string("users").string(name).short(*ty);
        }
        this
    }

    pub fn build(self) -> Vec<u8> {
        self.0
    }
}

/// `id int, name varchar` with the given rows
pub fn users(rows: &[(i32, Option<&str>)]) -> Vec<u8> {
    let mut payload = Payload::new(ROWS)
        .global_metadata(0, &[("id", INT), ("name", VARCHAR)])
        .int(rows.len() as i32);
    for (id, name) in rows {
        payload = payload.int_cell(*id);
        payload = match name {
            Some(name) => payload.text_cell(name),
            None => payload.null(),
        };
    }
    payload.build()
}
