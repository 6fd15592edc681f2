//! Composable UI component renderers.
//!
//! Each component renders one part of the interface starting at a given row
//! and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the theme mode indicator
//! - [`footer`]: Keybinding hints
//! - [`input`]: Search and address bars
//! - [`controls`]: Region, sort and result count line
//! - [`table`]: Country list with responsive columns
//! - [`detail`]: Country detail fields and border countries
//! - [`status`]: Loading, empty, error and not-found messages
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Input Bar - 3 lines, optional]
//! [Page Body]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod controls;
mod detail;
mod footer;
mod header;
mod input;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListView, PageView, UIViewModel};

use controls::render_controls;
use detail::render_detail;
use footer::render_footer;
use header::render_header;
use input::render_input_bar;
use status::{render_not_found, render_status};
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
///
/// The body gets every row between the chrome; anything it prints past
/// `body_end` would be overwritten by the bottom border and footer.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(bar) = &vm.input_bar {
        current_row = render_input_bar(current_row, bar, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let body_end = border_row.saturating_sub(1);

    match &vm.page {
        PageView::List(list) => render_list_body(current_row, list, theme, cols),
        PageView::Detail(detail) => render_detail(current_row, body_end, detail, theme, cols),
        PageView::NotFound(not_found) => render_not_found(current_row, not_found, theme, cols),
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

fn render_list_body(row: usize, list: &ListView, theme: &Theme, cols: usize) {
    let current_row = render_controls(row, &list.controls, theme, cols);

    if let Some(status) = &list.status {
        render_status(current_row + 2, status, theme, cols);
        return;
    }

    let current_row = render_table_headers(current_row, &list.columns, theme, cols);
    render_table_rows(current_row, &list.display_items, &list.columns, theme, cols);
}
