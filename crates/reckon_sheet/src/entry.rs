//! One line of the calculation list.

use reckon_foundation::Value;

/// Display radix for an entry's numeric answer.
///
/// Only affects rendering; values themselves are radix-free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadixMode {
    /// Decimal (the default).
    #[default]
    Dec,
    /// Hexadecimal, `0x` prefixed.
    Hex,
    /// Binary, `0b` prefixed.
    Bin,
    /// Octal, `0o` prefixed.
    Oct,
}

impl RadixMode {
    /// The next mode in cycling order (Dec, Hex, Bin, Oct, Dec, ...).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dec => Self::Hex,
            Self::Hex => Self::Bin,
            Self::Bin => Self::Oct,
            Self::Oct => Self::Dec,
        }
    }

    /// Renders a value in this radix.
    ///
    /// Only integer-valued numbers have a non-decimal rendering; negatives
    /// show their 64-bit two's complement, matching the bitwise operators.
    /// Everything else falls back to the value's ordinary display form.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn format(self, value: &Value) -> String {
        let Ok(n) = value.expect_int() else {
            return value.to_string();
        };
        let bits = n as u64;
        match self {
            Self::Dec => value.to_string(),
            Self::Hex => format!("0x{bits:X}"),
            Self::Bin => format!("0b{bits:b}"),
            Self::Oct => format!("0o{bits:o}"),
        }
    }
}

/// One editable line: its text, display radix, and the results of the
/// most recent recalculation pass.
#[derive(Clone, Debug, Default)]
pub struct Entry {
    text: String,
    radix: RadixMode,
    answer: Option<String>,
    hint: Option<String>,
}

impl Entry {
    /// Creates an entry with the given text and a decimal radix.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The entry's source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the entry's source text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The entry's display radix.
    #[must_use]
    pub const fn radix(&self) -> RadixMode {
        self.radix
    }

    /// Sets the entry's display radix.
    pub fn set_radix(&mut self, radix: RadixMode) {
        self.radix = radix;
    }

    /// The rendered answer from the latest pass, if the entry evaluated.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// The latest pass's hint: an error message or an operand marker.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub(crate) fn set_outcome(&mut self, answer: Option<String>, hint: Option<String>) {
        self.answer = answer;
        self.hint = hint;
    }
}
