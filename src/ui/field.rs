//! Field presentation adapter.
//!
//! [`present`] turns a field's props (value, error, touched flag, focus and
//! decoration) into a [`FieldRender`] description. It is a pure function of
//! its input: it never validates, it only decides what is shown. In
//! particular the error line exists only when the field is touched *and* an
//! error was supplied.
//!
//! # Example
//!
//! ```rust
//! use air_fryer_form::ui::field::{present, Decoration, FieldProps, InputKind};
//!
//! let props = FieldProps {
//!     id: "priceGuess",
//!     label: "Guess the Air Fryer's Cost",
//!     value: "",
//!     error: Some("Please enter a valid price"),
//!     touched: false,
//!     focused: true,
//!     decoration: Decoration {
//!         prefix: Some("$"),
//!         placeholder: Some("0.00"),
//!         ..Decoration::new(InputKind::Decimal)
//!     },
//! };
//!
//! let render = present(&props);
//! assert!(render.error.is_none());
//! assert!(render.input.placeholder);
//! assert_eq!(render.input.text, "0.00");
//! ```

/// Glyph drawn for each character of a password input.
pub const MASK_GLYPH: char = '•';

/// Input box width used when a field sets no maximum length.
pub const DEFAULT_INPUT_WIDTH: usize = 32;

/// The kind of input control, mirroring HTML input types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Email,
    Decimal,
    /// Value is drawn as [`MASK_GLYPH`]s.
    Password,
}

/// Trailing control drawn after the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// PIN show/hide button; `showing` is the current visibility.
    PinToggle { showing: bool, focused: bool },
}

/// Presentation options for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub kind: InputKind,
    pub placeholder: Option<&'static str>,
    pub max_length: Option<usize>,
    pub prefix: Option<&'static str>,
    pub suffix: Option<Suffix>,
}

impl Decoration {
    /// A bare decoration of the given kind.
    #[must_use]
    pub const fn new(kind: InputKind) -> Self {
        Self {
            kind,
            placeholder: None,
            max_length: None,
            prefix: None,
            suffix: None,
        }
    }
}

/// Everything [`present`] needs to describe one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub touched: bool,
    pub focused: bool,
    pub decoration: Decoration,
}

/// The input line of a rendered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    /// Text to draw: the (possibly masked) value, or the placeholder.
    pub text: String,
    /// Whether `text` is the placeholder rather than a value.
    pub placeholder: bool,
    /// Whether `text` is masked.
    pub masked: bool,
    /// Width of the input box in cells.
    pub width: usize,
}

/// Rendered suffix control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRender {
    pub label: String,
    pub focused: bool,
}

/// Render description of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRender {
    pub id: String,
    pub label: String,
    pub input: InputLine,
    pub prefix: Option<String>,
    pub suffix: Option<SuffixRender>,
    /// Error line; present only when touched and an error exists.
    pub error: Option<String>,
    /// Same condition as `error`; drives the invalid styling.
    pub invalid: bool,
    pub focused: bool,
}

/// Describes how a field should be drawn.
#[must_use]
pub fn present(props: &FieldProps<'_>) -> FieldRender {
    let decoration = &props.decoration;
    let masked = decoration.kind == InputKind::Password;

    let placeholder_len = decoration.placeholder.map_or(0, |p| p.chars().count());
    let width = decoration
        .max_length
        .unwrap_or(DEFAULT_INPUT_WIDTH)
        .max(placeholder_len);

    let (text, placeholder) = if props.value.is_empty() {
        (decoration.placeholder.unwrap_or_default().to_string(), decoration.placeholder.is_some())
    } else if masked {
        (MASK_GLYPH.to_string().repeat(props.value.chars().count()), false)
    } else {
        (props.value.to_string(), false)
    };

    let error = props
        .error
        .filter(|_| props.touched)
        .map(ToString::to_string);

    FieldRender {
        id: props.id.to_string(),
        label: props.label.to_string(),
        input: InputLine {
            text: tail(&text, width),
            placeholder,
            masked: masked && !placeholder,
            width,
        },
        prefix: decoration.prefix.map(ToString::to_string),
        suffix: decoration.suffix.map(|suffix| match suffix {
            Suffix::PinToggle { showing, focused } => SuffixRender {
                label: if showing { "Hide" } else { "Show" }.to_string(),
                focused,
            },
        }),
        invalid: error.is_some(),
        error,
        focused: props.focused,
    }
}

/// Keeps the last `width` characters so the end being typed stays visible.
fn tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}
