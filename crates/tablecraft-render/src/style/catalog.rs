//! Process-wide registry of named styles.
//!
//! The catalog is seeded with the built-in styles the first time it is touched,
//! exactly once. After that, [`register`] is the only mutator: it inserts or
//! overwrites (last write wins). There is no reset.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::{BorderLine, Style};
use crate::TableError;

static CATALOG: Lazy<RwLock<HashMap<String, Style>>> =
    Lazy::new(|| RwLock::new(builtin_styles().into_iter().collect()));

/// Registers `style` under `name`, replacing any previous entry.
pub fn register(name: impl Into<String>, style: Style) {
    let name = name.into();
    tracing::debug!(style = %name, "registering table style");
    let mut guard = CATALOG.write().unwrap_or_else(PoisonError::into_inner);
    guard.insert(name, style);
}

/// Looks up a style by name.
///
/// # Errors
///
/// Returns [`TableError::StyleNotRegistered`] when no style has that name.
pub fn get(name: &str) -> Result<Style, TableError> {
    let guard = CATALOG.read().unwrap_or_else(PoisonError::into_inner);
    guard
        .get(name)
        .cloned()
        .ok_or_else(|| TableError::StyleNotRegistered(name.to_string()))
}

/// Returns the names of every registered style, sorted.
pub fn names() -> Vec<String> {
    let guard = CATALOG.read().unwrap_or_else(PoisonError::into_inner);
    let mut names: Vec<String> = guard.keys().cloned().collect();
    names.sort();
    names
}

fn builtin_styles() -> Vec<(String, Style)> {
    let dots_edge = BorderLine::uniform(".", ".");
    let dots_inner = BorderLine::new(":", ".", ":", ":");
    let rounded_inner = BorderLine::new(":", "-", "+", ":");
    let single_inner = BorderLine::new("├", "─", "┼", "┤");
    let double_inner = BorderLine::new("╠", "═", "╬", "╣");
    let heavy_inner = BorderLine::new("┣", "━", "╋", "┫");
    let rst_simple = BorderLine::new(" ", "=", " ", " ");

    let styles = [
        ("default", Style::default()),
        ("compact", Style::new(" ", BorderLine::new(" ", "-", " ", " "))),
        (
            "dots",
            Style::new(":", dots_inner.clone())
                .top(dots_edge.clone())
                .row_separator(dots_inner)
                .bottom(dots_edge),
        ),
        (
            "rounded",
            Style::new("|", rounded_inner.clone())
                .top(BorderLine::uniform(".", "-"))
                .row_separator(rounded_inner)
                .bottom(BorderLine::uniform("'", "-")),
        ),
        (
            "unicode-single-line",
            Style::new("│", single_inner.clone())
                .top(BorderLine::new("┌", "─", "┬", "┐"))
                .row_separator(single_inner.clone())
                .bottom(BorderLine::new("└", "─", "┴", "┘")),
        ),
        (
            "unicode-rounded",
            Style::new("│", single_inner.clone())
                .top(BorderLine::new("╭", "─", "┬", "╮"))
                .row_separator(single_inner)
                .bottom(BorderLine::new("╰", "─", "┴", "╯")),
        ),
        (
            "unicode-double-line",
            Style::new("║", double_inner.clone())
                .top(BorderLine::new("╔", "═", "╦", "╗"))
                .row_separator(double_inner)
                .bottom(BorderLine::new("╚", "═", "╩", "╝")),
        ),
        (
            "unicode-heavy",
            Style::new("┃", heavy_inner.clone())
                .top(BorderLine::new("┏", "━", "┳", "┓"))
                .row_separator(heavy_inner)
                .bottom(BorderLine::new("┗", "━", "┻", "┛")),
        ),
        (
            "github-markdown",
            Style::new("|", BorderLine::uniform("|", "-")),
        ),
        (
            "reddit-markdown",
            Style::new("|", BorderLine::new(" ", "-", "|", " "))
                .row_separator(BorderLine::new(" ", " ", "|", " ")),
        ),
        (
            "restructured-text-grid",
            Style::new("|", BorderLine::uniform("+", "="))
                .top(BorderLine::uniform("+", "-"))
                .row_separator(BorderLine::uniform("+", "-"))
                .bottom(BorderLine::uniform("+", "-")),
        ),
        (
            "restructured-text-simple",
            Style::new(" ", rst_simple.clone())
                .top(rst_simple.clone())
                .row_separator(rst_simple.clone())
                .bottom(rst_simple),
        ),
    ];

    styles
        .into_iter()
        .map(|(name, style)| (name.to_string(), style))
        .collect()
}
