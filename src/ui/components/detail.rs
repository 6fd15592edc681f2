//! Detail page renderer.
//!
//! Lays out the country title, a two-column label/value list and the border
//! country chips. Fields that do not fit above `last_row` are dropped.

use super::status::render_status;
use crate::ui::helpers::{char_len, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BorderChip, DetailView};

const LABEL_WIDTH: usize = 20;
const LEFT_MARGIN: usize = 2;

pub fn render_detail(row: usize, last_row: usize, detail: &DetailView, theme: &Theme, cols: usize) {
    if let Some(status) = &detail.status {
        render_status(row + 2, status, theme, cols);
        return;
    }

    let mut current_row = row + 1;

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", fit(&detail.title, cols.saturating_sub(LEFT_MARGIN)));
    print!("{}", Theme::reset());
    current_row += 2;

    // Reserve two rows for the border chips.
    let fields_end = last_row.saturating_sub(2);
    let value_width = cols.saturating_sub(LEFT_MARGIN + LABEL_WIDTH);

    for field in &detail.fields {
        if current_row > fields_end {
            tracing::trace!(label = %field.label, "detail field does not fit");
            break;
        }
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(LEFT_MARGIN));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(&field.label, LABEL_WIDTH));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fit(&field.value, value_width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    render_borders(current_row + 1, &detail.borders, theme, cols);
}

/// Renders `Borders: [AND] [BEL] ...`, wrapping chips that overflow the line
/// into a trailing `+N`.
fn render_borders(row: usize, borders: &[BorderChip], theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit("Borders", LABEL_WIDTH));

    if borders.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("none");
        print!("{}", Theme::reset());
        return;
    }

    let available = cols.saturating_sub(LEFT_MARGIN + LABEL_WIDTH);
    let mut used = 0;
    for (i, chip) in borders.iter().enumerate() {
        let label = format!(" {} ", chip.code);
        let remaining = borders.len() - i;
        let overflow = format!("+{remaining}");
        if used + char_len(&label) + 1 + char_len(&overflow) > available && remaining > 1 {
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", truncate(&overflow, available.saturating_sub(used)));
            break;
        }

        if chip.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", Theme::underline());
        }
        print!("{label}");
        print!("{}", Theme::reset());
        print!(" ");
        used += char_len(&label) + 1;
    }
    print!("{}", Theme::reset());
}
