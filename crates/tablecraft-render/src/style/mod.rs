//! Border and separator glyph sets.
//!
//! A [`Style`] describes the four horizontal rules a table can draw (top border,
//! header separator, row separator, bottom border) plus the vertical glyph that
//! separates cells inside a row. The header separator is always drawn; the
//! other three rules are optional.
//!
//! Styles are usually obtained by name from the process-wide catalog:
//!
//! ```rust
//! use tablecraft_render::style;
//!
//! let grid = style::get("unicode-single-line").unwrap();
//! assert_eq!(grid.vertical(), "│");
//! ```
//!
//! Custom styles are built with [`Style::new`] and registered under a name:
//!
//! ```rust
//! use tablecraft_render::style::{self, BorderLine, Style};
//!
//! let stars = Style::new("*", BorderLine::uniform("*", "*"))
//!     .top(BorderLine::uniform("*", "*"))
//!     .bottom(BorderLine::uniform("*", "*"));
//! style::register("stars", stars);
//! assert!(style::get("stars").is_ok());
//! ```

mod catalog;

pub use catalog::{get, names, register};

/// One horizontal rule: `left`, then `fill` repeated across each column,
/// `joint` between columns, and `right` at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderLine {
    left: String,
    fill: String,
    joint: String,
    right: String,
}

impl BorderLine {
    /// Create a rule from its four glyphs.
    pub fn new(
        left: impl Into<String>,
        fill: impl Into<String>,
        joint: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        BorderLine {
            left: left.into(),
            fill: fill.into(),
            joint: joint.into(),
            right: right.into(),
        }
    }

    /// Create a rule whose corners and joints share one glyph.
    pub fn uniform(corner: impl Into<String>, fill: impl Into<String>) -> Self {
        let corner = corner.into();
        BorderLine::new(corner.clone(), fill, corner.clone(), corner)
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn joint(&self) -> &str {
        &self.joint
    }

    pub fn right(&self) -> &str {
        &self.right
    }
}

/// An immutable set of glyphs controlling how a table's borders are drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    vertical: String,
    top: Option<BorderLine>,
    header: BorderLine,
    row: Option<BorderLine>,
    bottom: Option<BorderLine>,
}

impl Style {
    /// Create a style with only the mandatory header separator.
    ///
    /// Top border, row separator and bottom border start out suppressed.
    pub fn new(vertical: impl Into<String>, header: BorderLine) -> Self {
        Style {
            vertical: vertical.into(),
            top: None,
            header,
            row: None,
            bottom: None,
        }
    }

    /// Set the top border.
    pub fn top(mut self, line: BorderLine) -> Self {
        self.top = Some(line);
        self
    }

    /// Set the separator drawn after rows flagged with a divider.
    pub fn row_separator(mut self, line: BorderLine) -> Self {
        self.row = Some(line);
        self
    }

    /// Set the bottom border.
    pub fn bottom(mut self, line: BorderLine) -> Self {
        self.bottom = Some(line);
        self
    }

    /// The glyph placed between cells and at both row edges.
    pub fn vertical(&self) -> &str {
        &self.vertical
    }

    pub fn top_border(&self) -> Option<&BorderLine> {
        self.top.as_ref()
    }

    pub fn header_separator(&self) -> &BorderLine {
        &self.header
    }

    pub fn row_separator_line(&self) -> Option<&BorderLine> {
        self.row.as_ref()
    }

    pub fn bottom_border(&self) -> Option<&BorderLine> {
        self.bottom.as_ref()
    }

    pub fn has_top_border(&self) -> bool {
        self.top.is_some()
    }

    pub fn has_row_separator(&self) -> bool {
        self.row.is_some()
    }

    pub fn has_bottom_border(&self) -> bool {
        self.bottom.is_some()
    }
}

/// The plain ASCII grid registered as `"default"`.
impl Default for Style {
    fn default() -> Self {
        let line = BorderLine::uniform("+", "-");
        Style::new("|", line.clone())
            .top(line.clone())
            .row_separator(line.clone())
            .bottom(line)
    }
}
