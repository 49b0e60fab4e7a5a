use thiserror::Error;

pub use color_eyre::eyre::eyre;

#[derive(Debug, Error)]
pub enum Error {
    /// Row fetch on a message whose kind code is not Rows (unknown codes included)
    #[error("Unexpected result kind for a row fetch: 0x{0:04X}")]
    UnexpectedKind(u32),

    #[error("Invalid result kind: 0x{0:04X}")]
    InvalidResultKind(u32),

    #[error("Missing result metadata: NO_METADATA is set and no metadata was registered")]
    MissingMetadata,

    #[error("Unsupported type: decoding {0} values is not supported")]
    UnsupportedType(&'static str),

    #[error("Unknown type code: 0x{0:04X}")]
    UnknownType(u16),

    #[error("Buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },

    #[error("Corrupt frame: {0}")]
    CorruptFrame(String),

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] simdutf8::basic::Utf8Error),

    #[error("Varint overflow: {0}-byte magnitude does not fit in 64 bits")]
    VarintOverflow(usize),

    #[error("Bad usage error: {0}")]
    BadUsageError(String),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Library bug: {0}")]
    LibraryBug(#[from] color_eyre::Report),
}

impl Error {
    pub(crate) fn underrun(needed: usize, remaining: usize) -> Self {
        Error::BufferUnderrun { needed, remaining }
    }

    pub(crate) fn from_debug(err: impl std::fmt::Debug) -> Self {
        Error::LibraryBug(eyre!("{:?}", err))
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

pub type Result<T> = std::result::Result<T, Error>;
