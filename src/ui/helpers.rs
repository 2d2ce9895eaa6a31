//! Shared rendering utilities.

/// Positions the cursor at a specific row and column (both 1-indexed).
///
/// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text`, counted in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending in `...` when shortened.
///
/// ```rust
/// use air_fryer_form::ui::helpers::truncate;
///
/// assert_eq!(truncate("Air Fryer Interest Form", 12), "Air Fryer...");
/// assert_eq!(truncate("short", 12), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Left padding that centers `text_width` within `cols`.
#[must_use]
pub const fn centered_padding(text_width: usize, cols: usize) -> usize {
    cols.saturating_sub(text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_characters_not_bytes() {
        assert_eq!(width("••••"), 4);
    }

    #[test]
    fn truncate_tiny_widths() {
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn centered_padding_never_underflows() {
        assert_eq!(centered_padding(10, 20), 5);
        assert_eq!(centered_padding(30, 20), 0);
    }
}
