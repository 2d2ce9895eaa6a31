//! Focus state for keyboard navigation.
//!
//! The form has a single focus ring: the six fields in form order, followed
//! by the PIN visibility toggle and the submit control. Moving past either end
//! wraps around.
//!
//! # Example
//!
//! ```rust
//! use air_fryer_form::app::modes::Focus;
//! use air_fryer_form::FieldName;
//!
//! assert_eq!(Focus::Submit.next(), Focus::Field(FieldName::FirstName));
//! assert_eq!(Focus::Field(FieldName::FirstName).prev(), Focus::Submit);
//! ```

use crate::domain::FieldName;

/// The control currently receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// One of the six text inputs.
    Field(FieldName),

    /// The "Show"/"Hide" button attached to the PIN input.
    PinToggle,

    /// The submit control.
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(FieldName::FirstName)
    }
}

impl Focus {
    /// Number of focusable controls.
    pub const RING_LEN: usize = FieldName::COUNT + 2;

    const fn position(self) -> usize {
        match self {
            Self::Field(field) => field.index(),
            Self::PinToggle => FieldName::COUNT,
            Self::Submit => FieldName::COUNT + 1,
        }
    }

    const fn at(position: usize) -> Self {
        match position {
            p if p < FieldName::COUNT => Self::Field(FieldName::ALL[p]),
            p if p == FieldName::COUNT => Self::PinToggle,
            _ => Self::Submit,
        }
    }

    /// The next control in the ring.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::at((self.position() + 1) % Self::RING_LEN)
    }

    /// The previous control in the ring.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::at((self.position() + Self::RING_LEN - 1) % Self::RING_LEN)
    }

    /// The focused field, if focus is on a text input.
    #[must_use]
    pub const fn field(self) -> Option<FieldName> {
        match self {
            Self::Field(field) => Some(field),
            Self::PinToggle | Self::Submit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_the_whole_ring_in_form_order() {
        let mut focus = Focus::default();
        let mut visited = vec![focus];
        for _ in 1..Focus::RING_LEN {
            focus = focus.next();
            visited.push(focus);
        }

        let mut expected: Vec<Focus> = FieldName::ALL.into_iter().map(Focus::Field).collect();
        expected.push(Focus::PinToggle);
        expected.push(Focus::Submit);
        assert_eq!(visited, expected);
        assert_eq!(focus.next(), Focus::default());
    }

    #[test]
    fn prev_undoes_next() {
        let mut focus = Focus::default();
        for _ in 0..Focus::RING_LEN {
            assert_eq!(focus.next().prev(), focus);
            focus = focus.next();
        }
    }

    #[test]
    fn pin_toggle_sits_between_pin_and_submit() {
        assert_eq!(Focus::Field(FieldName::Pin).next(), Focus::PinToggle);
        assert_eq!(Focus::PinToggle.next(), Focus::Submit);
        assert_eq!(Focus::PinToggle.field(), None);
    }
}
