//! Terminal-cell width helpers for table cells and one-line previews.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cuts `text` to at most `max_width` terminal cells, ending with an
/// ellipsis when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut cut = String::with_capacity(max_width);
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        cut.push(ch);
    }
    cut.push(ELLIPSIS);
    Cow::Owned(cut)
}

/// Truncates, then right-pads with spaces to exactly `width` cells.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let fill = width.saturating_sub(cut.width());
    let mut cell = cut.into_owned();
    cell.push_str(&" ".repeat(fill));
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_borrowed_untouched() {
        assert!(matches!(truncate_to_width("John", 10), Cow::Borrowed("John")));
    }

    #[test]
    fn long_text_ends_with_ellipsis_within_budget() {
        let cut = truncate_to_width("sarah.johnson@email.com", 10);

        assert_eq!(cut, "sarah.joh…");
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn wide_characters_never_overflow() {
        let cut = truncate_to_width("日本語テキスト", 6);

        assert!(cut.width() <= 6);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn fit_pads_to_exact_width() {
        assert_eq!(fit_to_width("Mike", 8), "Mike    ");
        assert_eq!(fit_to_width("Bartholomew", 8).width(), 8);
    }
}
