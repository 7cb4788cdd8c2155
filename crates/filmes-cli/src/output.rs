use crate::theme;
use console::{measure_text_width, pad_str, truncate_str, Alignment, Term};
use filmes::{stmt::Value, FormOptions, Notice, Render, Table, View};

use std::io;

/// Cells wider than this are cut short.
const MAX_CELL_WIDTH: usize = 40;

/// How null cells are drawn.
const NULL_CELL: &str = "None";

pub fn print_render(term: &Term, render: &Render) -> io::Result<()> {
    for notice in &render.notices {
        let (prefix, style) = theme::notice_style(notice);
        term.write_line(&style.apply_to(format!("{prefix} {}", notice_text(notice))).to_string())?;
    }

    match &render.view {
        View::Table { heading, table } => {
            term.write_line("")?;
            term.write_line(&theme::heading_style().apply_to(heading).to_string())?;
            print_table(term, table)?;
        }
        View::Prompt(message) => {
            term.write_line(&theme::prompt_style().apply_to(message).to_string())?;
        }
    }

    Ok(())
}

pub fn print_table(term: &Term, table: &Table) -> io::Result<()> {
    let mut lines = format_table(table).into_iter();

    if let Some(header) = lines.next() {
        term.write_line(&theme::header_style().apply_to(header).to_string())?;
    }
    for line in lines {
        term.write_line(&line)?;
    }

    term.write_line(&format!("({} rows)", table.len()))
}

pub fn print_options(term: &Term, options: &FormOptions) -> io::Result<()> {
    for (label, values) in [
        ("Directors", &options.directors),
        ("Companies", &options.companies),
        ("Genres", &options.genres),
    ] {
        term.write_line(&theme::header_style().apply_to(label).to_string())?;
        for value in values {
            term.write_line(&format!("  {value}"))?;
        }
    }
    Ok(())
}

pub fn notice_text(notice: &Notice) -> &str {
    match notice {
        Notice::Success(text) | Notice::Warning(text) | Notice::Error(text) => text,
    }
}

/// Lay the table out as aligned text lines: a header line first, then
/// one line per row, each prefixed by its row number.
pub fn format_table(table: &Table) -> Vec<String> {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(table.len() + 1);

    grid.push(
        std::iter::once(String::new())
            .chain(table.columns().iter().cloned())
            .collect(),
    );

    for (index, row) in table.rows().iter().enumerate() {
        grid.push(
            std::iter::once(index.to_string())
                .chain(
                    table
                        .columns()
                        .iter()
                        .map(|column| cell_text(Table::cell(row, column))),
                )
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..grid[0].len())
        .map(|col| {
            grid.iter()
                .map(|line| measure_text_width(&line[col]))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    grid.iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .enumerate()
                .map(|(col, (cell, width))| {
                    let align = if col == 0 {
                        Alignment::Right
                    } else {
                        Alignment::Left
                    };
                    let cell = truncate_str(cell, *width, "…");
                    pad_str(&cell, *width, align, None).into_owned()
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => NULL_CELL.to_string(),
        value => value.to_string(),
    }
}
