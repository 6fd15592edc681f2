//! Controls line: region selector, sort selector and result count.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlsInfo;

/// Renders the controls line and returns the next row.
///
/// ```text
///  Region: Europe   Sort: Population (high-low)            53 of 250
/// ```
pub fn render_controls(row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    let count = format!("{} of {} ", controls.count, controls.total);

    position_cursor(row, 1);

    let segments = [(" Region: ", &controls.region), ("   Sort: ", &controls.sort)];
    let mut used = 0;
    for (label, value) in segments {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label}");
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("{value}");
        print!("{}", Theme::reset());
        used += char_len(label) + char_len(value);
    }

    let count = truncate(&count, cols.saturating_sub(used));
    print!("{}", " ".repeat(cols.saturating_sub(used + char_len(&count))));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{count}");
    print!("{}", Theme::reset());

    row + 1
}
