//! Submit button and status line renderers.

use crate::ui::helpers::{centered_padding, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusLine, SubmitButton};

/// Renders the submit control centered on `row` and returns the next row.
///
/// Enabled buttons use the button colors; disabled buttons are dimmed and
/// cannot be mistaken for an active control. Focus is shown with arrow
/// markers on both sides.
pub fn render_submit(row: usize, button: &SubmitButton, theme: &Theme, cols: usize) -> usize {
    let text = if button.focused {
        format!("▶  {}  ◀", button.label)
    } else {
        format!("   {}   ", button.label)
    };
    let text_len = width(&text);
    let padding = centered_padding(text_len, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    if button.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.button_disabled_fg));
    }
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    row + 1
}

/// Renders the confirmation line centered on `row` and returns the next row.
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    let message = truncate(&status.message, cols);
    let text_len = width(&message);
    let padding = centered_padding(text_len, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.success_fg));
    print!("{message}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    row + 1
}
