//! Composable UI component renderers.
//!
//! Each component draws one part of the form and returns the next free row,
//! so the layout function below reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Form title
//! - [`field`]: Label, decorated input and error line of one field
//! - [`submit`]: Submit control and confirmation line
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Field x 6, three rows each]
//! [Submit]
//! [Status]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod field;
mod footer;
mod header;
mod submit;

pub use field::{render_field, FIELD_MARGIN, FIELD_ROWS};

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormViewModel;

use footer::render_footer;
use header::render_header;
use submit::{render_status, render_submit};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Clears whole rows from `from` up to, but not including, `until`.
fn render_blank_rows(from: usize, until: usize, cols: usize) {
    for row in from..until {
        position_cursor(row, 1);
        print!("{}", " ".repeat(cols));
    }
}

/// Renders the complete form layout.
///
/// The footer is pinned to the last row. Rows between the status line and the
/// footer border are blanked so stale output never survives a re-render.
pub fn render_form(vm: &FormViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    for field in &vm.fields {
        current_row = render_field(current_row, field, theme, cols);
    }

    current_row = render_submit(current_row, &vm.submit, theme, cols);
    if let Some(status) = &vm.status {
        current_row = render_status(current_row, status, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_blank_rows(current_row, border_row, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
