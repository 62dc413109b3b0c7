use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use log::debug;
use crate::allocator::available_importance;
use crate::config::Config;
use crate::display::{result_headers, result_row};
use crate::error::{Result, SessionError};
use crate::input::{parse_batch, parse_json};
use crate::models::{RankedTask, Task};
use crate::ranking::rank_tasks;

/// How batch input is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One task per line: `description | importance | due`
    Text,
    /// A JSON array of tasks
    Json,
}

/// Reads the whole input, from `file` or stdin when none is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

/// Parses batch input into tasks. An input with no tasks is rejected.
pub fn parse_tasks(input: &str, format: InputFormat, config: &Config) -> Result<Vec<Task>> {
    let tasks = match format {
        InputFormat::Text => parse_batch(input, &config.separator)?,
        InputFormat::Json => parse_json(input)?,
    };
    if tasks.is_empty() {
        return Err(SessionError::NoTasks.into());
    }
    debug!("parsed {} tasks", tasks.len());
    Ok(tasks)
}

/// Builds the result table.
pub fn ranked_table(ranked: &[RankedTask], all_columns: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            result_headers(all_columns)
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );

    for t in ranked {
        let rank_color = match t.rank {
            1 => Color::Red,
            2 | 3 => Color::Yellow,
            _ => Color::Reset,
        };
        let mut cells: Vec<Cell> = result_row(t, all_columns).into_iter().map(Cell::new).collect();
        cells[0] = Cell::new(t.rank).fg(rank_color);
        table.add_row(cells);
    }
    table
}

/// Ranks the tasks read from `file` (or stdin) and prints them.
pub fn cmd_rank(file: Option<&Path>, format: InputFormat, all: bool, json: bool, config: &Config) -> Result<()> {
    let input = read_input(file)?;
    let tasks = parse_tasks(&input, format, config)?;
    let ranked = rank_tasks(&tasks);

    if json {
        let s = serde_json::to_string_pretty(&ranked).map_err(io::Error::from)?;
        println!("{}", s);
    } else {
        let table = ranked_table(&ranked, all || config.show_all_columns);
        println!("{table}");
    }
    Ok(())
}

/// Prints the importance values not yet assigned to any task.
pub fn cmd_available(file: Option<&Path>, format: InputFormat, config: &Config) -> Result<()> {
    let input = read_input(file)?;
    let tasks = parse_tasks(&input, format, config)?;
    let values: Vec<String> = available_importance(&tasks).iter().map(u32::to_string).collect();
    if values.is_empty() {
        println!("All importance values are assigned.");
    } else {
        println!("{}", values.join(" "));
    }
    Ok(())
}
