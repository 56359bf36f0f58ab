//! ASCII rendering: dividers, header row, record rows, full table blocks.
//!
//! The layout is fixed and not configurable: `+`/`-` divider lines, `|` cell
//! rules, one space of padding on each side of cell content. Output is
//! deterministic byte for byte.

use crate::column::ColumnId;
use crate::error::Result;
use crate::table::Table;
use crate::widths::ColumnWidths;

const CROSS: char = '+';
const HORIZONTAL: char = '-';
const VERTICAL: char = '|';
// One space on each side of cell content; the half unit pads the right edge.
const PADDING: usize = 2;
const HALF_PADDING: usize = PADDING / 2;

/// Renders one table, with widths computed once at construction.
///
/// # Example
///
/// ```rust
/// use gridline::{Record, Renderer, Table};
///
/// let mut table = Table::new("inventory");
/// table.set_column_names(["sku", "qty"]);
/// table.append(Record::new(["A-17", "3"]));
///
/// let renderer = Renderer::new(&table)?;
/// assert_eq!(renderer.divider(), "+------+-----+\n");
/// assert_eq!(renderer.header_row(), "| sku  | qty |\n");
/// # Ok::<(), gridline::TableError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Renderer<'a> {
    table: &'a Table,
    widths: ColumnWidths,
}

impl<'a> Renderer<'a> {
    /// Compute widths for `table` and build a renderer over it.
    ///
    /// Fails with [`TableError`](crate::TableError::FieldCountMismatch) if
    /// any record disagrees with the column count; a renderer that
    /// constructs successfully cannot emit a misaligned block.
    pub fn new(table: &'a Table) -> Result<Self> {
        let widths = ColumnWidths::from_table(table)?;
        Ok(Renderer { table, widths })
    }

    /// The widths the renderer laid out, one per column.
    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// A horizontal divider line, `+----+-----+\n`.
    ///
    /// Each column spans its width plus one padding space per side.
    pub fn divider(&self) -> String {
        let mut line = String::new();
        for &width in self.widths.widths() {
            line.push(CROSS);
            for _ in 0..width + PADDING {
                line.push(HORIZONTAL);
            }
        }
        line.push(CROSS);
        line.push('\n');
        line
    }

    /// The header row, `| sku  | qty |\n`.
    pub fn header_row(&self) -> String {
        self.row(self.table.columns().iter().map(ColumnId::name))
    }

    /// The row for the record at `index`, `| A-17 | 3   |\n`.
    ///
    /// Fails with [`TableError`](crate::TableError::RecordOutOfRange) when
    /// `index` is past the last record.
    pub fn record_row(&self, index: usize) -> Result<String> {
        let record = self.table.record(index)?;
        Ok(self.row(record.fields()))
    }

    /// The full block: divider, header row, divider, one line per record in
    /// insertion order, closing divider.
    pub fn render(&self) -> String {
        let divider = self.divider();
        let mut block = String::new();
        block.push_str(&divider);
        block.push_str(&self.header_row());
        block.push_str(&divider);
        for record in self.table.records() {
            block.push_str(&self.row(record.fields()));
        }
        block.push_str(&divider);
        block
    }

    // Cell layout: `| `, the value, then right padding out to the column
    // width plus one trailing space. Values never exceed their column width
    // once Renderer::new has succeeded.
    fn row<I, S>(&self, values: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = String::new();
        for (value, &width) in values.into_iter().zip(self.widths.widths()) {
            let value = value.as_ref();
            line.push(VERTICAL);
            line.push(' ');
            line.push_str(value);
            for _ in 0..width - value.chars().count() + HALF_PADDING {
                line.push(' ');
            }
        }
        line.push(VERTICAL);
        line.push('\n');
        line
    }
}

/// Render `table` as a complete ASCII block.
///
/// One-shot convenience for `Renderer::new(table)?.render()`.
///
/// # Example
///
/// ```rust
/// use gridline::{Record, Table, render};
///
/// let mut table = Table::new("pairs");
/// table.set_column_names(["k", "v"]);
/// table.append(Record::new(["a", "1"]));
///
/// let block = render(&table)?;
/// assert_eq!(block, "+---+---+\n| k | v |\n+---+---+\n| a | 1 |\n+---+---+\n");
/// # Ok::<(), gridline::TableError>(())
/// ```
pub fn render(table: &Table) -> Result<String> {
    Ok(Renderer::new(table)?.render())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::record::Record;
    use proptest::prelude::*;

    fn table_strategy() -> impl Strategy<Value = Table> {
        proptest::collection::vec("[a-zA-Z0-9_ ]{0,8}", 1..6)
            .prop_flat_map(|names| {
                let count = names.len();
                let rows = proptest::collection::vec(
                    proptest::collection::vec("[a-zA-Z0-9_ ]{0,12}", count),
                    0..6,
                );
                (Just(names), rows)
            })
            .prop_map(|(names, rows)| {
                let mut table = Table::new("generated");
                table.set_column_names(names);
                for row in rows {
                    table.append(Record::new(row));
                }
                table
            })
    }

    proptest! {
        #[test]
        fn divider_length_tracks_widths(table in table_strategy()) {
            let renderer = Renderer::new(&table).unwrap();
            let widths = renderer.widths();

            // One rule char per column boundary plus width + padding per
            // column, then the trailing newline.
            let expected = widths.total() + 3 * widths.len() + 1;
            prop_assert_eq!(renderer.divider().chars().count(), expected + 1);
        }

        #[test]
        fn every_line_is_equally_wide(table in table_strategy()) {
            let renderer = Renderer::new(&table).unwrap();
            let block = renderer.render();

            let mut lines = block.lines();
            let first = lines.next().unwrap().chars().count();
            for line in lines {
                prop_assert_eq!(line.chars().count(), first);
            }
        }
    }
}
