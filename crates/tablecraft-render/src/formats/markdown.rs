//! GitHub-flavored Markdown pipe tables.
//!
//! The separator row records column alignment: `:---` left, `---:` right,
//! `:---:` center. A literal `|` inside a cell is written as `\|`.

use super::{Exporter, Importer};
use crate::tabular::Align;
use crate::{Table, TableError};

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Exporter for MarkdownFormat {
    fn export(&self, table: &Table) -> Result<String, TableError> {
        if table.headers().is_empty() {
            return Ok(String::new());
        }

        let mut lines = Vec::with_capacity(table.row_count() + 2);
        lines.push(pipe_row(table.headers()));

        let separators: Vec<&str> = (0..table.column_count())
            .map(|i| match table.alignment(i) {
                Align::Left => ":---",
                Align::Right => "---:",
                Align::Center => ":---:",
            })
            .collect();
        lines.push(format!("|{}|", separators.join("|")));

        for row in table.rows() {
            lines.push(pipe_row(row));
        }
        Ok(lines.join("\n"))
    }
}

impl Importer for MarkdownFormat {
    /// The first non-blank line is the header row and the second must be the
    /// separator row. Missing cells are padded, surplus cells dropped.
    fn import(&self, data: &str) -> Result<Table, TableError> {
        let mut lines = data.lines().map(str::trim).filter(|l| !l.is_empty());

        let Some(header_line) = lines.next() else {
            return Ok(Table::default());
        };
        let headers = split_row(header_line);
        let mut table = Table::new(headers.iter().cloned());

        if let Some(separator) = lines.next() {
            if !is_separator(separator) {
                return Err(TableError::serialization(format!(
                    "expected a markdown separator row, found '{}'",
                    separator
                )));
            }
            for (index, marker) in split_row(separator).iter().enumerate() {
                table.set_alignment_at(index, alignment_code(marker));
            }
        }

        for line in lines {
            table.add_row(split_row(line));
        }
        Ok(table)
    }
}

fn pipe_row(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |", escaped.join(" | "))
}

/// Splits a pipe row into trimmed cells, honoring `\|` escapes.
fn split_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                cell.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    // Text after the last pipe only counts when the row lacks a closing pipe.
    if !cell.trim().is_empty() {
        cells.push(cell);
    }
    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

fn is_separator(line: &str) -> bool {
    line.contains('-') && line.chars().all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn alignment_code(marker: &str) -> &'static str {
    let marker = marker.trim();
    match (marker.starts_with(':'), marker.ends_with(':')) {
        (true, true) if marker.len() > 1 => "c",
        (false, true) => "r",
        _ => "l",
    }
}
