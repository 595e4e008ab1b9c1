//! Error handling for the JSON codec.
//!
//! Two independent error kinds exist: [`ParsingError`] is raised by the
//! parser when the input text does not match the grammar, and
//! [`TypeMismatch`] is raised by [`Node`](crate::Node) accessors when the
//! caller asks for a representation the value does not hold.
//!
//! [`Error`] unifies both (plus I/O) for entry points that read streams.

use thiserror::Error;

/// Fatal error raised while parsing JSON text.
///
/// A parse never recovers: the first error aborts the whole load and no
/// partial document is returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParsingError {
    /// End of input reached before the closing `]`
    #[error("Array is not closed")]
    ArrayNotClosed,

    /// End of input reached before the closing `}`
    #[error("Dict is not closed")]
    DictNotClosed,

    /// End of input reached before the closing `"`
    #[error("string is not closed")]
    StringNotClosed,

    /// Unsupported character after a backslash inside a string
    #[error("string parsing error after \\: unsupported escape `\\{0}`")]
    InvalidEscape(char),

    /// Buffer could be interpreted neither as a double nor as an i32
    #[error("Parsing num error: `{0}`")]
    InvalidNumber(String),

    /// Malformed `true`/`false` literal or bad trailing character
    #[error("Bool parsing error")]
    InvalidBool,

    /// Malformed `null` literal or bad trailing character
    #[error("Error parsing null value")]
    InvalidNull,

    /// Character that cannot start or continue a value at this point
    #[error("Error parsing json: unexpected character `{0}`")]
    UnexpectedChar(char),

    /// Input ended where a value was expected
    #[error("Error parsing json: unexpected end of input")]
    UnexpectedEof,

    /// A `-` in the middle of a number (strict sign mode)
    #[error("Parsing num error: misplaced sign in `{0}`")]
    MisplacedSign(String),

    /// Arrays/objects nested deeper than the configured limit (depth, limit)
    #[error("nesting too deep: {0} exceeds limit {1}")]
    NestingTooDeep(u64, u64),

    /// Non-whitespace content after the root value, at the given offset
    #[error("unexpected trailing content at offset {0}")]
    TrailingContent(usize),

    /// Stream input is not UTF-8; the offset is the first bad byte
    #[error("invalid UTF-8 at byte {0}")]
    InvalidUtf8(usize),
}

impl ParsingError {
    /// Stable name of the error kind, used by the corpus format and CLI.
    pub fn name(&self) -> &'static str {
        match self {
            ParsingError::ArrayNotClosed => "ArrayNotClosed",
            ParsingError::DictNotClosed => "DictNotClosed",
            ParsingError::StringNotClosed => "StringNotClosed",
            ParsingError::InvalidEscape(_) => "InvalidEscape",
            ParsingError::InvalidNumber(_) => "InvalidNumber",
            ParsingError::InvalidBool => "InvalidBool",
            ParsingError::InvalidNull => "InvalidNull",
            ParsingError::UnexpectedChar(_) => "UnexpectedChar",
            ParsingError::UnexpectedEof => "UnexpectedEof",
            ParsingError::MisplacedSign(_) => "MisplacedSign",
            ParsingError::NestingTooDeep(_, _) => "NestingTooDeep",
            ParsingError::TrailingContent(_) => "TrailingContent",
            ParsingError::InvalidUtf8(_) => "InvalidUtf8",
        }
    }
}

/// An accessor was called on a node holding a different variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("value has type {found}, not {expected}")]
pub struct TypeMismatch {
    /// Type the caller asked for
    pub expected: &'static str,
    /// Type actually stored in the node
    pub found: &'static str,
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text is not valid JSON
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// Accessor used against the wrong variant
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParsingError>;

/// Result type for general crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_legacy_wording() {
        assert_eq!(ParsingError::ArrayNotClosed.to_string(), "Array is not closed");
        assert_eq!(ParsingError::DictNotClosed.to_string(), "Dict is not closed");
        assert_eq!(ParsingError::StringNotClosed.to_string(), "string is not closed");
        assert_eq!(ParsingError::InvalidBool.to_string(), "Bool parsing error");
        assert_eq!(ParsingError::InvalidNull.to_string(), "Error parsing null value");
    }

    #[test]
    fn test_names() {
        assert_eq!(ParsingError::InvalidEscape('u').name(), "InvalidEscape");
        assert_eq!(ParsingError::NestingTooDeep(3, 2).name(), "NestingTooDeep");
        assert_eq!(ParsingError::TrailingContent(4).name(), "TrailingContent");
        assert_eq!(ParsingError::InvalidUtf8(0).name(), "InvalidUtf8");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = TypeMismatch {
            expected: "string",
            found: "int",
        };
        assert_eq!(err.to_string(), "value has type int, not string");
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = ParsingError::UnexpectedEof.into();
        assert!(matches!(err, Error::Parsing(ParsingError::UnexpectedEof)));

        let err: Error = TypeMismatch {
            expected: "bool",
            found: "null",
        }
        .into();
        assert!(matches!(err, Error::TypeMismatch(_)));
    }
}
