//! Shared rendering utilities and helpers.
//!
//! Low-level text utilities used across UI components: cursor positioning,
//! width fitting, and match highlighting with proper ANSI escape sequence
//! management. All widths are counted in characters, never bytes, so names
//! such as `Côte d'Ivoire` or `Åland Islands` line up.

use crate::ui::theme::Theme;

const ELLIPSIS: &str = "...";

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use zatlas::ui::helpers::truncate;
///
/// assert_eq!(truncate("United Kingdom", 9), "United...");
/// assert_eq!(truncate("Peru", 9), "Peru");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let kept = kept_chars(text, width);
    let prefix: String = text.chars().take(kept).collect();
    if kept == char_len(text) || width <= ELLIPSIS.len() {
        prefix
    } else {
        format!("{prefix}{ELLIPSIS}")
    }
}

/// How many leading characters of `text` survive [`truncate`] at `width`.
///
/// Characters past this index are either dropped or replaced by the ellipsis.
#[must_use]
pub fn kept_chars(text: &str, width: usize) -> usize {
    let len = char_len(text);
    if len <= width {
        len
    } else if width <= ELLIPSIS.len() {
        width
    } else {
        width - ELLIPSIS.len()
    }
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let padding = width.saturating_sub(char_len(&truncated));
    format!("{truncated}{}", " ".repeat(padding))
}

/// Prints `text` centered in a full-width line.
pub fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = char_len(&text);
    let padding = cols.saturating_sub(len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders text with highlighted character ranges for query matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. When the row
/// is selected the selection colors win and no highlighting is applied.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
