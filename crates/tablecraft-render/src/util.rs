//! Display-width aware text utilities.
//!
//! Every width computation in the crate goes through [`display_width`], so the
//! cached column widths and the padding applied at render time always agree.

use std::cmp::Ordering;

use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal columns `s` occupies.
///
/// CJK and other wide characters count as two columns, combining marks as zero.
///
/// # Example
///
/// ```rust
/// use tablecraft_render::display_width;
///
/// assert_eq!(display_width("Alice"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `s` on the right up to `width` display columns.
///
/// Strings already at or over `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Pads `s` on the left up to `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.extend(std::iter::repeat_n(' ', fill));
    out.push_str(s);
    out
}

/// Centers `s` within `width` display columns.
///
/// When the free space is odd, the extra column goes on the right.
///
/// ```rust
/// use tablecraft_render::pad_center;
///
/// assert_eq!(pad_center("Name", 7), " Name  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let left = fill / 2;
    let right = fill - left;
    let mut out = String::with_capacity(s.len() + fill);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

/// Parses `s` as a number when it looks like one.
///
/// Accepts optional surrounding whitespace, a sign, a decimal point and an
/// exponent. Words such as `inf` or `NaN` are not treated as numbers.
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let first = trimmed.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '+' | '-' | '.')) {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Stable sort that accepts comparators which are not a total order.
///
/// Mixed numeric and text cells compare pairwise, which can form cycles, and
/// `slice::sort_by` panics on those. This never panics, and on return no
/// adjacent pair compares as `Greater`, so sorting the result again leaves it
/// unchanged.
pub(crate) fn sort_tolerant<T, F>(items: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if is_ordered(items, &mut compare) {
        return;
    }
    *items = merge_sort(std::mem::take(items), &mut compare);

    // Insertion pass over the nearly sorted result repairs the pairs a
    // cyclic comparator leaves out of order.
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn is_ordered<T, F>(items: &[T], compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// Ensures a string is a valid XML element name.
///
/// XML names must start with a letter or underscore. Subsequent characters
/// may be letters, digits, hyphens, underscores, or periods. Invalid
/// characters are replaced with underscores.
pub(crate) fn sanitize_xml_name(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }
    let mut result = String::with_capacity(name.len() + 1);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            if c.is_ascii_alphabetic() || c == '_' {
                result.push(c);
            } else {
                result.push('_');
                if c.is_ascii_alphanumeric() {
                    result.push(c);
                }
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
            result.push(c);
        } else {
            result.push('_');
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("aé"), 2);
    }

    #[test]
    fn test_pad_right_and_left() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad_right("abcdef", 3), "abcdef");
        assert_eq!(pad_left("abcdef", 3), "abcdef");
        assert_eq!(pad_center("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_pad_center_remainder_goes_right() {
        assert_eq!(pad_center("Age", 4), "Age ");
        assert_eq!(pad_center("Name", 7), " Name  ");
        assert_eq!(pad_center("ab", 6), "  ab  ");
    }

    #[test]
    fn test_pad_wide_chars_by_columns() {
        let padded = pad_right("日本", 6);
        assert_eq!(padded, "日本  ");
        assert_eq!(display_width(&padded), 6);
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("30"), Some(30.0));
        assert_eq!(parse_numeric(" -2.5 "), Some(-2.5));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("12px"), None);
        assert_eq!(parse_numeric("1-2"), None);
    }

    #[test]
    fn test_sort_tolerant_is_stable() {
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        sort_tolerant(&mut items, |a, b| a.0.cmp(&b.0));
        assert_eq!(items, [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_sort_tolerant_survives_cyclic_comparator() {
        // rock < paper < scissors < rock
        let beats = |a: &u8, b: &u8| match (*a, *b) {
            _ if a == b => Ordering::Equal,
            (0, 1) | (1, 2) | (2, 0) => Ordering::Less,
            _ => Ordering::Greater,
        };
        let mut items: Vec<u8> = (0..90).map(|i| (i * 7 % 3) as u8).collect();
        sort_tolerant(&mut items, beats);

        assert_eq!(items.len(), 90);
        assert!(items.windows(2).all(|p| beats(&p[0], &p[1]) != Ordering::Greater));

        let once = items.clone();
        sort_tolerant(&mut items, beats);
        assert_eq!(items, once);
    }

    #[test]
    fn test_sanitize_xml_name() {
        assert_eq!(sanitize_xml_name("name"), "name");
        assert_eq!(sanitize_xml_name("First Name"), "First_Name");
        assert_eq!(sanitize_xml_name("1st"), "_1st");
        assert_eq!(sanitize_xml_name(""), "_");
    }
}
