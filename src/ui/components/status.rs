//! Status message renderers: loading, empty, error and not-found.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NotFoundView, StatusKind, StatusMessage};

/// Renders a centered two-line message starting at `row`.
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Errors use `error_fg`, everything else `status_fg`. The subtitle is dim.
pub fn render_status(row: usize, status: &StatusMessage, theme: &Theme, cols: usize) -> usize {
    let color = match status.kind {
        StatusKind::Error => &theme.colors.error_fg,
        StatusKind::Loading | StatusKind::Empty => &theme.colors.status_fg,
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print_centered(&status.message, cols);
    print!("{}", Theme::reset());

    if status.subtitle.is_empty() {
        return row + 1;
    }

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&status.subtitle, cols);
    print!("{}", Theme::reset());
    row + 2
}

/// Renders the not-found page with the unknown path and a link home.
pub fn render_not_found(row: usize, not_found: &NotFoundView, theme: &Theme, cols: usize) {
    position_cursor(row + 3, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print_centered("404", cols);
    print!("{}", Theme::reset());

    position_cursor(row + 4, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print_centered(&not_found.message, cols);

    position_cursor(row + 5, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&not_found.path, cols);

    position_cursor(row + 7, 1);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", Theme::underline());
    print_centered("Go home (g)", cols);
    print!("{}", Theme::reset());
}
