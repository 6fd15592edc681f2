//! Table component renderer.
//!
//! Renders the country list with FLAG, NAME and POPULATION columns, plus
//! REGION and CAPITAL when the pane is wide enough. Supports selection
//! highlighting and query match highlighting.

use crate::ui::helpers::{self, char_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnLayout, DisplayItem};

const FLAG_COLUMN_WIDTH: usize = ColumnLayout::FLAG_WIDTH;
const POPULATION_COLUMN_WIDTH: usize = ColumnLayout::POPULATION_WIDTH;
const REGION_COLUMN_WIDTH: usize = ColumnLayout::REGION_WIDTH;

/// Renders the column headings and returns the next row.
pub fn render_table_headers(row: usize, columns: &ColumnLayout, theme: &Theme, cols: usize) -> usize {
    let mut line = format!(
        "{}{} {:>width$}",
        " ".repeat(FLAG_COLUMN_WIDTH),
        fit("NAME", columns.name_width),
        "POPULATION",
        width = POPULATION_COLUMN_WIDTH - 1
    );
    if columns.show_region {
        line.push_str("  ");
        line.push_str(&fit("REGION", REGION_COLUMN_WIDTH - 2));
    }
    if columns.show_capital {
        line.push_str("  CAPITAL");
    }

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", fit(&line, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the row after the last.
pub fn render_table_rows(
    row: usize,
    items: &[DisplayItem],
    columns: &ColumnLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, columns, theme, cols);
    }
    current_row
}

/// Renders a single row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to the full pane width so the selection background
/// spans the whole line.
fn render_table_row(
    row: usize,
    item: &DisplayItem,
    columns: &ColumnLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.flag.is_empty() {
        print!("{}", " ".repeat(FLAG_COLUMN_WIDTH));
    } else {
        print!("{}  ", item.flag);
    }

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(columns.name_width.saturating_sub(char_len(&item.name))));

    print!(" {:>width$}", item.population, width = POPULATION_COLUMN_WIDTH - 1);
    let mut line_len = FLAG_COLUMN_WIDTH + columns.name_width + POPULATION_COLUMN_WIDTH;

    if columns.show_region {
        print!("  {}", fit(&item.region, REGION_COLUMN_WIDTH - 2));
        line_len += REGION_COLUMN_WIDTH;
    }

    if columns.show_capital {
        let capital_width = cols.saturating_sub(line_len + 2);
        print!("  {}", fit(&item.capital, capital_width));
        line_len += capital_width + 2;
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}
