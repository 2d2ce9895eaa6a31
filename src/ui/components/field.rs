//! Field component renderer.
//!
//! Draws a [`FieldRender`] as three terminal rows: the label, the input line
//! with its decorations, and the error line (blank when no error is shown).

use crate::ui::field::FieldRender;
use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;

/// Columns left blank before every field row.
pub const FIELD_MARGIN: usize = 2;

/// Rows a field occupies.
pub const FIELD_ROWS: usize = 3;

/// Renders one field starting at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
///   First Name
///   $ [19.99_                        ] [Show]
///   Please enter a valid price ...
/// ```
///
/// The input brackets take the error color when the field is invalid, the
/// focus color when focused, and the plain input border color otherwise.
pub fn render_field(row: usize, field: &FieldRender, theme: &Theme, cols: usize) -> usize {
    let usable = cols.saturating_sub(FIELD_MARGIN);

    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_MARGIN));
    let label = truncate(&field.label, usable);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.label_fg));
    print!("{label}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(usable.saturating_sub(width(&label))));

    position_cursor(row + 1, 1);
    let used = FIELD_MARGIN + render_input_line(field, theme);
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(FIELD_MARGIN));
    if let Some(error) = &field.error {
        let message = truncate(error, usable);
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print!("{message}");
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(usable.saturating_sub(width(&message))));
    } else {
        print!("{}", " ".repeat(usable));
    }

    row + FIELD_ROWS
}

/// Draws prefix, bracketed input and suffix; returns the cells used.
fn render_input_line(field: &FieldRender, theme: &Theme) -> usize {
    let mut used = 0;
    print!("{}", " ".repeat(FIELD_MARGIN));

    if let Some(prefix) = &field.prefix {
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("{prefix} ");
        print!("{}", Theme::reset());
        used += width(prefix) + 1;
    }

    let bracket = if field.invalid {
        &theme.colors.error_fg
    } else if field.focused {
        &theme.colors.focus_border
    } else {
        &theme.colors.input_border
    };

    print!("{}[{}", Theme::fg(bracket), Theme::reset());

    if field.input.placeholder {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", field.input.text);
    print!("{}", Theme::reset());

    let mut inner = width(&field.input.text);
    if field.focused && !field.input.placeholder {
        print!("{}_{}", Theme::fg(&theme.colors.accent), Theme::reset());
        inner += 1;
    }
    // One spare cell keeps the cursor inside the brackets on a full input.
    let box_width = field.input.width + 1;
    print!("{}", " ".repeat(box_width.saturating_sub(inner)));
    print!("{}]{}", Theme::fg(bracket), Theme::reset());
    used += box_width.max(inner) + 2;

    if let Some(suffix) = &field.suffix {
        print!(" ");
        if suffix.focused {
            print!("{}", Theme::fg(&theme.colors.button_fg));
            print!("{}", Theme::bg(&theme.colors.button_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.accent));
        }
        print!("[{}]", suffix.label);
        print!("{}", Theme::reset());
        used += width(&suffix.label) + 3;
    }

    used
}
