pub mod column_type;
pub mod metadata;
pub mod primitive;
pub mod result;
pub mod resultset;
pub mod value;


pub use column_type::TypeDescriptor;
pub use metadata::{ColumnSpec, Metadata};
pub use result::{Prepared, ResultBody, SchemaChange};
pub use resultset::RowSet;
