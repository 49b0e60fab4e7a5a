use std::sync::Arc;

use crate::protocol::ColumnSpec;
use crate::value::Value;

/// One decoded row: a value per column, in column order
///
/// The column list is shared by every row of a row set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    columns: Arc<[ColumnSpec]>,
    values: Vec<Value<'a>>,
}

impl<'a> Row<'a> {
    pub(crate) fn new(columns: Arc<[ColumnSpec]>, values: Vec<Value<'a>>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn values(&self) -> &[Value<'a>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of the first column named `name`
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        let idx = self.columns.iter().position(|col| col.name == name)?;
        self.values.get(idx)
    }

    pub fn get_index(&self, idx: usize) -> Option<&Value<'a>> {
        self.values.get(idx)
    }

    /// `(column name, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<'a>)> {
        self.columns
            .iter()
            .map(|col| col.name.as_str())
            .zip(self.values.iter())
    }

    pub fn into_values(self) -> Vec<Value<'a>> {
        self.values
    }

    pub fn into_parts(self) -> (Arc<[ColumnSpec]>, Vec<Value<'a>>) {
        (self.columns, self.values)
    }
}
