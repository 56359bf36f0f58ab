//! Gridline - plain ASCII tables with data-driven column widths.
//!
//! Gridline lays out in-memory tabular data (named columns, rows of string
//! fields) as an ASCII block: `+`/`-` divider lines, `|` cell rules, one
//! space of padding on each side, every column exactly as wide as its longest
//! entry. Output is deterministic byte for byte, so rendered blocks are safe
//! to golden-test against.
//!
//! # Quick Start
//!
//! ```rust
//! use gridline::{ColumnId, Record, Table, render};
//!
//! let mut table = Table::new("crew");
//! table.set_columns(vec![
//!     ColumnId::new("id").with_key(true),
//!     ColumnId::new("name"),
//!     ColumnId::new("role"),
//! ]);
//! table.append(Record::new(["1", "Hull", "nav"]));
//! table.append(Record::new(["2", "Okafor", "engineer"]));
//!
//! let block = render(&table)?;
//! assert_eq!(block, "\
//! +----+--------+----------+
//! | id | name   | role     |
//! +----+--------+----------+
//! | 1  | Hull   | nav      |
//! | 2  | Okafor | engineer |
//! +----+--------+----------+
//! ");
//! # Ok::<(), gridline::TableError>(())
//! ```
//!
//! # Layout Semantics
//!
//! - **Width**: each column is as wide as the longest character count among
//!   its name and all its field values; columns never influence each other.
//! - **Cell**: `| `, the value, then right padding out to the column width
//!   plus one trailing space, so every cell spans `width + 3` characters
//!   including its leading rule.
//! - **Block**: divider, header row, divider, one line per record in
//!   insertion order, closing divider. Every line ends in a newline.
//!
//! Widths count `char`s, not display columns; wide glyphs and ANSI escape
//! sequences are out of scope.
//!
//! # Failure Model
//!
//! Out-of-range access and field-count mismatches surface immediately as
//! [`TableError`]; no partial output is ever produced. Tables accept records
//! with any field count, and the mismatch is reported when a [`Renderer`] is
//! built.

mod column;
mod error;
mod record;
mod render;
mod table;
mod widths;

// Re-export public API
pub use column::ColumnId;
pub use error::{Result, TableError};
pub use record::Record;
pub use render::{render, Renderer};
pub use table::Table;
pub use widths::ColumnWidths;
