//! Border decoration: turns a [`Table`] and a [`Style`] into text.
//!
//! Layout, top to bottom:
//!
//! ```text
//! top border          (if the style has one)
//! header row
//! header separator    (always)
//! data rows           (each followed by the row separator when flagged
//!                      and the style defines one)
//! bottom border       (if the style has one)
//! ```
//!
//! Every cell is surrounded by one space on each side and padded to its
//! column's cached width, measured in display columns. Each line ends in `\n`.

use super::model::Table;
use super::types::Align;
use crate::style::{BorderLine, Style};
use crate::util::{pad_center, pad_left, pad_right};

/// Text rendered for a table without headers.
pub const EMPTY_TABLE: &str = "Empty table";

/// Renders `table` with `style`.
pub fn render(table: &Table, style: &Style) -> String {
    if table.headers().is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let widths = table.column_widths();
    let mut output = String::new();

    if let Some(top) = style.top_border() {
        output.push_str(&horizontal_line(top, widths));
    }

    output.push_str(&header_row(table, style));
    output.push_str(&horizontal_line(style.header_separator(), widths));

    for (index, cells) in table.rows().enumerate() {
        output.push_str(&data_row(table, style, cells));
        if table.has_divider(index) {
            if let Some(separator) = style.row_separator_line() {
                output.push_str(&horizontal_line(separator, widths));
            }
        }
    }

    if let Some(bottom) = style.bottom_border() {
        output.push_str(&horizontal_line(bottom, widths));
    }

    output
}

/// Draws one horizontal rule spanning every column.
fn horizontal_line(line: &BorderLine, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| line.fill().repeat(w + 2)).collect();
    format!(
        "{}{}{}\n",
        line.left(),
        segments.join(line.joint()),
        line.right()
    )
}

/// Header cells are centered unless their column is right-aligned.
fn header_row(table: &Table, style: &Style) -> String {
    let cells = table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let align = match table.alignment(i) {
                Align::Right => Align::Right,
                Align::Left | Align::Center => Align::Center,
            };
            pad_cell(header, table.column_widths()[i], align)
        });
    join_cells(cells, style)
}

fn data_row(table: &Table, style: &Style, values: &[String]) -> String {
    let cells = values
        .iter()
        .enumerate()
        .map(|(i, value)| pad_cell(value, table.column_widths()[i], table.alignment(i)));
    join_cells(cells, style)
}

fn pad_cell(value: &str, width: usize, align: Align) -> String {
    let padded = match align {
        Align::Left => pad_right(value, width),
        Align::Right => pad_left(value, width),
        Align::Center => pad_center(value, width),
    };
    format!(" {} ", padded)
}

fn join_cells(cells: impl Iterator<Item = String>, style: &Style) -> String {
    let vertical = style.vertical();
    let body: Vec<String> = cells.collect();
    format!("{}{}{}\n", vertical, body.join(vertical), vertical)
}
