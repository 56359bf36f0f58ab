//! The tabular container: named, ordered columns and records.

use serde::{Deserialize, Serialize};

use crate::column::ColumnId;
use crate::error::{Result, TableError};
use crate::record::Record;

/// An ordered, named container of columns and records.
///
/// Columns and records are owned exclusively by the table, and insertion
/// order is display order. The table stores — it does not validate: a record
/// with the wrong field count is accepted by [`append`](Table::append) and
/// rejected later, when widths are computed for rendering.
///
/// # Example
///
/// ```rust
/// use gridline::{Record, Table};
///
/// let mut table = Table::new("inventory");
/// table.set_column_names(["sku", "qty"]);
/// table.append(Record::new(["A-17", "3"]));
///
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.record_count(), 1);
/// assert_eq!(table.column_name(0)?, "sku");
/// # Ok::<(), gridline::TableError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: Vec<ColumnId>,
    records: Vec<Record>,
}

impl Table {
    /// Create an empty table with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            columns: Vec::new(),
            records: Vec::new(),
        }
    }

    /// The table's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the column list with one plain column per name, in order.
    ///
    /// Every new column starts with the key flag unset; duplicate names are
    /// allowed. Existing records are kept untouched even if their field
    /// counts no longer line up — the mismatch surfaces at width computation.
    pub fn set_column_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = names.into_iter().map(ColumnId::new).collect();
    }

    /// Replace the column list with fully specified columns, in order.
    ///
    /// Use this instead of [`set_column_names`](Table::set_column_names) when
    /// key flags matter.
    pub fn set_columns<I>(&mut self, columns: I)
    where
        I: IntoIterator<Item = ColumnId>,
    {
        self.columns = columns.into_iter().collect();
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// The column at `index`.
    pub fn column(&self, index: usize) -> Result<&ColumnId> {
        self.columns.get(index).ok_or(TableError::ColumnOutOfRange {
            index,
            count: self.columns.len(),
        })
    }

    /// The name of the column at `index`.
    pub fn column_name(&self, index: usize) -> Result<&str> {
        self.column(index).map(ColumnId::name)
    }

    /// Append a record to the end of the record list.
    ///
    /// The field count is not checked here.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// The record at `index`.
    pub fn record(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or(TableError::RecordOutOfRange {
            index,
            count: self.records.len(),
        })
    }

    /// All columns in display order.
    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }

    /// All records in display order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
