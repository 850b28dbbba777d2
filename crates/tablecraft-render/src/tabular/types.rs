//! Column alignment and sort direction.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides, extra space on the right).
    Center,
}

impl Align {
    /// Parses a one-letter alignment code.
    ///
    /// `l`, `r` and `c` are accepted case-insensitively. Anything else,
    /// including spelled-out names, normalizes to [`Align::Left`].
    ///
    /// ```rust
    /// use tablecraft_render::Align;
    ///
    /// assert_eq!(Align::from_code("R"), Align::Right);
    /// assert_eq!(Align::from_code("c"), Align::Center);
    /// assert_eq!(Align::from_code("middle"), Align::Left);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "r" => Align::Right,
            "c" => Align::Center,
            _ => Align::Left,
        }
    }

    /// The one-letter code for this alignment.
    pub fn code(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Right => "r",
            Align::Center => "c",
        }
    }
}

/// Sort direction for [`Table::sort_by`](super::Table::sort_by).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl SortOrder {
    /// Parses a sort order; only `desc` (any case) means descending.
    pub fn parse(order: &str) -> Self {
        if order.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Human-readable name, as used in session messages.
    pub fn describe(self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_codes_are_case_insensitive() {
        assert_eq!(Align::from_code("l"), Align::Left);
        assert_eq!(Align::from_code("L"), Align::Left);
        assert_eq!(Align::from_code("r"), Align::Right);
        assert_eq!(Align::from_code("C"), Align::Center);
    }

    #[test]
    fn align_unknown_codes_fall_back_to_left() {
        assert_eq!(Align::from_code("right"), Align::Left);
        assert_eq!(Align::from_code(""), Align::Left);
        assert_eq!(Align::from_code("x"), Align::Left);
    }

    #[test]
    fn align_round_trips_through_code() {
        for align in [Align::Left, Align::Right, Align::Center] {
            assert_eq!(Align::from_code(align.code()), align);
        }
    }

    #[test]
    fn sort_order_parse() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("invalid"), SortOrder::Asc);
        assert_eq!(SortOrder::parse(""), SortOrder::Asc);
    }

    #[test]
    fn sort_order_apply() {
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
    }
}
