use bitflags::bitflags;

/// RESULT message kinds
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Void = 0x0001,
    Rows = 0x0002,
    SetKeyspace = 0x0003,
    Prepared = 0x0004,
    SchemaChange = 0x0005,
}

impl ResultKind {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x0001 => Some(Self::Void),
            0x0002 => Some(Self::Rows),
            0x0003 => Some(Self::SetKeyspace),
            0x0004 => Some(Self::Prepared),
            0x0005 => Some(Self::SchemaChange),
            _ => None,
        }
    }
}

bitflags! {
    /// Flags of a `<metadata>` block
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RowsFlags: u32 {
        /// One keyspace/table pair is shared by every column
        const GLOBAL_TABLES_SPEC = 0x0001;
        /// A paging state follows the column count
        const HAS_MORE_PAGES = 0x0002;
        /// The column specifications are omitted
        const NO_METADATA = 0x0004;
    }
}

/// `[option]` type codes
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Custom = 0x0000,
    Ascii = 0x0001,
    Bigint = 0x0002,
    Blob = 0x0003,
    Boolean = 0x0004,
    Counter = 0x0005,
    Decimal = 0x0006,
    Double = 0x0007,
    Float = 0x0008,
    Int = 0x0009,
    Text = 0x000A,
    Timestamp = 0x000B,
    Uuid = 0x000C,
    Varchar = 0x000D,
    Varint = 0x000E,
    Timeuuid = 0x000F,
    Inet = 0x0010,
    List = 0x0020,
    Map = 0x0021,
    Set = 0x0022,
    Udt = 0x0030,
    Tuple = 0x0031,
}

impl ColumnType {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(Self::Custom),
            0x0001 => Some(Self::Ascii),
            0x0002 => Some(Self::Bigint),
            0x0003 => Some(Self::Blob),
            0x0004 => Some(Self::Boolean),
            0x0005 => Some(Self::Counter),
            0x0006 => Some(Self::Decimal),
            0x0007 => Some(Self::Double),
            0x0008 => Some(Self::Float),
            0x0009 => Some(Self::Int),
            0x000A => Some(Self::Text),
            0x000B => Some(Self::Timestamp),
            0x000C => Some(Self::Uuid),
            0x000D => Some(Self::Varchar),
            0x000E => Some(Self::Varint),
            0x000F => Some(Self::Timeuuid),
            0x0010 => Some(Self::Inet),
            0x0020 => Some(Self::List),
            0x0021 => Some(Self::Map),
            0x0022 => Some(Self::Set),
            0x0030 => Some(Self::Udt),
            0x0031 => Some(Self::Tuple),
            _ => None,
        }
    }

    /// CQL name of the type
    pub fn name(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Ascii => "ascii",
            Self::Bigint => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Varchar => "varchar",
            Self::Varint => "varint",
            Self::Timeuuid => "timeuuid",
            Self::Inet => "inet",
            Self::List => "list",
            Self::Map => "map",
            Self::Set => "set",
            Self::Udt => "udt",
            Self::Tuple => "tuple",
        }
    }
}

/// `[bytes]` length that marks a null value
pub const NULL_LENGTH: i32 = -1;

/// Deepest `[option]` nesting accepted from the wire
pub const MAX_TYPE_DEPTH: usize = 64;

/// Largest decimal scale magnitude rendered as text
pub const MAX_DECIMAL_SCALE: u32 = 4096;
