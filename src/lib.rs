//! Decoder for the RESULT message body of the CQL native protocol.
//!
//! [`ResultMessage`] wraps a received body and exposes the decode and fetch
//! operations. The byte-level readers live in [`protocol`].

pub mod constant;
pub mod error;
mod opts;
pub mod protocol;
pub mod raw;
pub mod result;
pub mod row;
pub mod value;

#[cfg(feature = "derive")]
pub mod r#macro {
    pub use zero_cql_derive::FromRow;
}

pub use opts::Opts;
pub use result::ResultMessage;

#[cfg(test)]
mod constant_test;
#[cfg(test)]
mod opts_test;
#[cfg(test)]
mod raw_test;
