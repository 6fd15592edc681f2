//! Header component renderer.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at the specified row and returns the next row.
///
/// The title is centered with bold styling; the theme mode is right-aligned
/// in dim text when the pane is wide enough to hold both.
///
/// ```text
/// [left padding] TITLE [right padding] dark
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = char_len(&title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    let badge = format!("{} ", header.theme_label);
    let badge_len = char_len(&badge);
    let right_space = cols.saturating_sub(padding + title_len);
    let show_badge = right_space > badge_len;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");

    if show_badge {
        print!("{}", " ".repeat(right_space - badge_len));
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        if let Some(bg) = &theme.colors.header_bg {
            print!("{}", Theme::bg(bg));
        }
        print!("{badge}");
    } else {
        print!("{}", " ".repeat(right_space));
    }

    print!("{}", Theme::reset());
    row + 1
}
