//! Error types for numedit.

/// Errors produced when converting edited text into a numeric value.
///
/// These never escape the widgets: a failed parse leaves the bound value
/// untouched and the text pending in the edit buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text was empty (or only whitespace).
    #[error("cannot parse a number from empty text")]
    Empty,
    /// The text is not a number.
    #[error("'{text}' is not a valid number")]
    Invalid {
        /// The rejected text.
        text: String,
    },
    /// The text parsed to NaN or an infinity.
    #[error("'{text}' is not a finite number")]
    NonFinite {
        /// The rejected text.
        text: String,
    },
}

/// A specialized Result type for numeric parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
