//! The in-memory table model.
//!
//! A [`Table`] owns its headers, rows, per-row divider flags, per-column
//! alignment and a cache of column display widths. The following hold after
//! every operation:
//!
//! - each row has exactly one cell per header (short rows are padded with empty
//!   strings, long rows truncated);
//! - each row carries its own divider flag;
//! - `column_widths()[i]` is at least the display width of header `i` and of
//!   every cell in column `i`.
//!
//! Cached widths only ever grow. Deleting rows or shortening values leaves them
//! untouched.

use std::collections::HashMap;
use std::fmt;

use super::decorator;
use super::types::{Align, SortOrder};
use crate::style::{self, Style};
use crate::util::{display_width, parse_numeric, sort_tolerant};
use crate::TableError;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    cells: Vec<String>,
    divider: bool,
}

/// A table of string cells with cached column widths and a rendering style.
///
/// # Example
///
/// ```rust
/// use tablecraft_render::Table;
///
/// let mut table = Table::new(["Name", "Age"]);
/// table.add_row(["Alice", "30"]);
///
/// assert_eq!(
///     table.render(),
///     "+-------+-----+\n\
///      | Name  | Age |\n\
///      +-------+-----+\n\
///      | Alice | 30  |\n\
///      +-------+-----+\n"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    alignments: Vec<Align>,
    widths: Vec<usize>,
    style: Style,
}

impl Default for Table {
    fn default() -> Self {
        Table::new(Vec::<String>::new())
    }
}

impl Table {
    /// Create a table with the given headers, every column left-aligned.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(headers: I) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = headers.iter().map(|h| display_width(h)).collect();
        let alignments = vec![Align::Left; headers.len()];
        Table {
            headers,
            rows: Vec::new(),
            alignments,
            widths,
            style: Style::default(),
        }
    }

    /// Create a table with headers and a header-name to alignment-code map.
    ///
    /// Columns missing from the map are left-aligned.
    pub fn with_alignments<S, I, K, V, M>(headers: I, alignments: M) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
        K: Into<String>,
        V: AsRef<str>,
        M: IntoIterator<Item = (K, V)>,
    {
        let mut table = Table::new(headers);
        table.set_alignments(alignments);
        table
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the first column whose header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cached display width of each column.
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn alignments(&self) -> &[Align] {
        &self.alignments
    }

    /// Alignment of column `index`; out-of-range columns report `Left`.
    pub fn alignment(&self, index: usize) -> Align {
        self.alignments.get(index).copied().unwrap_or_default()
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[String]> + '_ {
        self.rows.iter().map(|row| row.cells.as_slice())
    }

    /// Copies every row into owned vectors.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.cells.clone()).collect()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Selects a registered style by name for [`render`](Self::render).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::StyleNotRegistered`] for unknown names; the
    /// current style is kept.
    pub fn set_style(&mut self, name: &str) -> Result<(), TableError> {
        self.style = style::get(name)?;
        Ok(())
    }

    /// Uses `style` directly, bypassing the catalog.
    pub fn apply_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Appends a row without a divider.
    pub fn add_row<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.add_row_with_divider(values, false);
    }

    /// Appends a row, optionally drawing a divider after it.
    ///
    /// Values are padded with empty strings or truncated to the header count.
    pub fn add_row_with_divider<I>(&mut self, values: I, divider: bool)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let cells = self.fit_to_headers(values);
        self.grow_widths(&cells);
        self.rows.push(Row { cells, divider });
    }

    /// Appends several rows without dividers.
    pub fn add_rows<R, I>(&mut self, rows: R)
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: ToString,
    {
        for values in rows {
            self.add_row(values);
        }
    }

    /// Appends several rows; `dividers` maps an index within `rows` to its flag.
    ///
    /// Indices absent from the map get no divider.
    pub fn add_rows_with_dividers<R, I>(&mut self, rows: R, dividers: &HashMap<usize, bool>)
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: ToString,
    {
        for (index, values) in rows.into_iter().enumerate() {
            let divider = dividers.get(&index).copied().unwrap_or(false);
            self.add_row_with_divider(values, divider);
        }
    }

    /// Appends a column.
    ///
    /// Existing row `i` receives `values[i]`, or an empty string when `values`
    /// is shorter than the table. Extra values are ignored.
    pub fn add_column<I>(&mut self, header: impl Into<String>, values: I, alignment: &str)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let header = header.into();
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();

        let width = values
            .iter()
            .map(|v| display_width(v))
            .fold(display_width(&header), usize::max);

        self.headers.push(header);
        self.alignments.push(Align::from_code(alignment));
        self.widths.push(width);

        for (index, row) in self.rows.iter_mut().enumerate() {
            row.cells.push(values.get(index).cloned().unwrap_or_default());
        }
    }

    /// Sets the alignment of the column named `column`.
    ///
    /// When no header matches, the last column is changed instead. Codes other
    /// than `l`, `r`, `c` (any case) become `l`. A table without columns is
    /// left untouched.
    pub fn set_alignment(&mut self, column: &str, alignment: &str) {
        let Some(last) = self.headers.len().checked_sub(1) else {
            return;
        };
        let index = self.column_index(column).unwrap_or(last);
        self.alignments[index] = Align::from_code(alignment);
    }

    /// Sets the alignment of column `index`. Out-of-range indices are ignored.
    pub fn set_alignment_at(&mut self, index: usize, alignment: &str) {
        if let Some(slot) = self.alignments.get_mut(index) {
            *slot = Align::from_code(alignment);
        }
    }

    /// Replaces every column's alignment from a header-name map.
    ///
    /// Columns absent from the map become left-aligned.
    pub fn set_alignments<K, V, M>(&mut self, alignments: M)
    where
        K: Into<String>,
        V: AsRef<str>,
        M: IntoIterator<Item = (K, V)>,
    {
        let by_name: HashMap<String, Align> = alignments
            .into_iter()
            .map(|(k, v)| (k.into(), Align::from_code(v.as_ref())))
            .collect();
        self.alignments = self
            .headers
            .iter()
            .map(|h| by_name.get(h).copied().unwrap_or_default())
            .collect();
    }

    /// Sorts rows by the named column; `order` is `asc` unless it reads `desc`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnNotFound`] when no header matches `column`.
    pub fn sort_table(&mut self, column: &str, order: &str) -> Result<(), TableError> {
        self.sort_by(column, SortOrder::parse(order))
    }

    /// Sorts rows by the named column.
    ///
    /// When both cells are numeric they are compared as numbers, otherwise as
    /// strings. Columns mixing numbers and text have no total order; they still
    /// sort without panicking, and sorting again changes nothing. Divider flags
    /// move with their rows.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnNotFound`] when no header matches `column`.
    pub fn sort_by(&mut self, column: &str, order: SortOrder) -> Result<(), TableError> {
        let index = self
            .column_index(column)
            .ok_or_else(|| TableError::ColumnNotFound(column.to_string()))?;

        tracing::debug!(column, %order, rows = self.rows.len(), "sorting table");
        sort_tolerant(&mut self.rows, |a, b| {
            order.apply(compare_cells(&a.cells[index], &b.cells[index]))
        });
        Ok(())
    }

    /// Returns the cells of row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidRowIndex`] when `index` is out of range.
    pub fn get_row(&self, index: usize) -> Result<&[String], TableError> {
        self.rows
            .get(index)
            .map(|row| row.cells.as_slice())
            .ok_or(TableError::InvalidRowIndex(index))
    }

    /// Replaces the cells of row `index`, keeping its divider flag.
    ///
    /// Widths grow to fit the new values but never shrink.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidRowIndex`] when `index` is out of range.
    pub fn update_row<I>(&mut self, index: usize, values: I) -> Result<(), TableError>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        if index >= self.rows.len() {
            return Err(TableError::InvalidRowIndex(index));
        }
        let cells = self.fit_to_headers(values);
        self.grow_widths(&cells);
        self.rows[index].cells = cells;
        Ok(())
    }

    /// Removes row `index` together with its divider flag, returning its cells.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidRowIndex`] when `index` is out of range.
    pub fn delete_row(&mut self, index: usize) -> Result<Vec<String>, TableError> {
        if index >= self.rows.len() {
            return Err(TableError::InvalidRowIndex(index));
        }
        Ok(self.rows.remove(index).cells)
    }

    /// Clears the divider after row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidRowIndex`] when `index` is out of range.
    pub fn remove_divider(&mut self, index: usize) -> Result<(), TableError> {
        self.set_divider(index, false)
    }

    /// Sets or clears the divider after row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidRowIndex`] when `index` is out of range.
    pub fn set_divider(&mut self, index: usize, divider: bool) -> Result<(), TableError> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or(TableError::InvalidRowIndex(index))?;
        row.divider = divider;
        Ok(())
    }

    /// Whether a divider follows row `index`; `false` for unknown rows.
    pub fn has_divider(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(|row| row.divider)
    }

    /// Number of pages needed to show every row, `rows_per_page` at a time.
    ///
    /// A table without rows has zero pages. `rows_per_page` of 0 counts as 1.
    pub fn total_pages(&self, rows_per_page: usize) -> usize {
        self.rows.len().div_ceil(rows_per_page.max(1))
    }

    /// Builds a table holding only the rows of 1-based `page`.
    ///
    /// Headers, alignments, style and divider flags are carried over; column
    /// widths are computed from the headers and the rows on that page.
    pub fn page(&self, page: usize, rows_per_page: usize) -> Table {
        let rows_per_page = rows_per_page.max(1);
        let start = page.saturating_sub(1).saturating_mul(rows_per_page);

        let mut view = Table {
            headers: self.headers.clone(),
            rows: Vec::new(),
            alignments: self.alignments.clone(),
            widths: self.headers.iter().map(|h| display_width(h)).collect(),
            style: self.style.clone(),
        };
        for row in self.rows.iter().skip(start).take(rows_per_page) {
            view.grow_widths(&row.cells);
            view.rows.push(row.clone());
        }
        view
    }

    /// Renders the table with its own style.
    pub fn render(&self) -> String {
        decorator::render(self, &self.style)
    }

    /// Renders the table with an explicit style.
    pub fn render_with(&self, style: &Style) -> String {
        decorator::render(self, style)
    }

    fn fit_to_headers<I>(&self, values: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let count = self.headers.len();
        let mut cells: Vec<String> = values
            .into_iter()
            .take(count)
            .map(|v| v.to_string())
            .collect();
        cells.resize(count, String::new());
        cells
    }

    fn grow_widths(&mut self, cells: &[String]) {
        for (width, cell) in self.widths.iter_mut().zip(cells) {
            *width = (*width).max(display_width(cell));
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn compare_cells(a: &str, b: &str) -> std::cmp::Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.cmp(b),
    }
}
