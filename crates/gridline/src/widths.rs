//! Column width computation.
//!
//! Widths drive the entire layout: each column is exactly as wide as the
//! longest of its name and its field values, measured in raw `char` counts.
//! Columns never influence each other's widths.

use crate::error::{Result, TableError};
use crate::table::Table;

/// Computed display widths, one per column of a table.
///
/// A fresh value is computed per call; nothing is cached between renders, so
/// widths can never go stale against the table they were computed from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    /// Seed widths from the column names alone.
    ///
    /// Guarantees headers are never truncated, even for a table with no
    /// records.
    pub fn from_headers(table: &Table) -> Self {
        ColumnWidths {
            widths: table
                .columns()
                .iter()
                .map(|column| column.name().chars().count())
                .collect(),
        }
    }

    /// Widths from the column names and every record's fields.
    ///
    /// Each column's width is the maximum of its name length and all its
    /// field lengths in that column, computed independently per column.
    ///
    /// Fails with [`TableError::FieldCountMismatch`] if any record's field
    /// count differs from the table's column count, so a malformed table can
    /// never produce a malformed block.
    pub fn from_table(table: &Table) -> Result<Self> {
        let mut resolved = Self::from_headers(table);
        let columns = table.column_count();

        for (i, record) in table.records().iter().enumerate() {
            if record.len() != columns {
                return Err(TableError::FieldCountMismatch {
                    record: i,
                    fields: record.len(),
                    columns,
                });
            }
            for (width, field) in resolved.widths.iter_mut().zip(record.fields()) {
                *width = (*width).max(field.chars().count());
            }
        }

        Ok(resolved)
    }

    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// All widths in column order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Total content width of all columns, without padding or rules.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
