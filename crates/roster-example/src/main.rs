//! Prints a small crew roster as an ASCII table.
//!
//! A worked example of the embedding surface: build a table, set columns,
//! append records, render, print.

use anyhow::Result;
use clap::Parser;
use gridline::{ColumnId, Record, Renderer, Table};

#[derive(Parser)]
#[command(name = "roster", about = "Print the demo crew roster")]
struct Cli {
    /// Table name printed above the block.
    #[arg(long, default_value = "crew")]
    title: String,

    /// Print the computed column widths instead of the table.
    #[arg(long)]
    widths: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut table = Table::new(cli.title);
    table.set_columns(vec![
        ColumnId::new("id").with_key(true),
        ColumnId::new("name"),
        ColumnId::new("role"),
        ColumnId::new("shift"),
    ]);
    table.append(Record::new(["1", "Hull", "navigator", "day"]));
    table.append(Record::new(["2", "Okafor", "engineer", "night"]));
    table.append(Record::new(["3", "Reyes", "medic", "day"]));

    let renderer = Renderer::new(&table)?;

    if cli.widths {
        for (column, width) in table.columns().iter().zip(renderer.widths().widths()) {
            println!("{}: {}", column.name(), width);
        }
        return Ok(());
    }

    println!("{}", table.name());
    print!("{}", renderer.render());
    Ok(())
}
