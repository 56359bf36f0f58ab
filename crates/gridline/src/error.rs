//! Error types for table access and rendering.

use thiserror::Error;

/// Errors that can occur when accessing table contents or laying them out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Column index outside the table's column list.
    #[error("no such column: index {index}, table has {count} columns")]
    ColumnOutOfRange { index: usize, count: usize },

    /// Record index outside the table's record list.
    #[error("no such record: index {index}, table has {count} records")]
    RecordOutOfRange { index: usize, count: usize },

    /// A record's field count disagrees with the table's column count.
    #[error("record {record} has {fields} fields, expected {columns}")]
    FieldCountMismatch {
        record: usize,
        fields: usize,
        columns: usize,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_index_and_the_bound() {
        let err = TableError::ColumnOutOfRange { index: 4, count: 3 };
        assert_eq!(err.to_string(), "no such column: index 4, table has 3 columns");

        let err = TableError::RecordOutOfRange { index: 9, count: 2 };
        assert_eq!(err.to_string(), "no such record: index 9, table has 2 records");
    }

    #[test]
    fn mismatch_names_the_offending_record() {
        let err = TableError::FieldCountMismatch {
            record: 1,
            fields: 2,
            columns: 3,
        };
        assert_eq!(err.to_string(), "record 1 has 2 fields, expected 3");
    }
}
