//! Error types for lexing, parsing, and serialization.

use thiserror::Error;

/// Errors that can occur while scanning raw text into tokens.
///
/// Lexing is fail-fast: the first error aborts the scan and no partial
/// token sequence is returned. Positions are byte offsets into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("invalid character {character:?} at byte {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The input ended inside a string literal. The position is the
    /// opening quote.
    #[error("unterminated string starting at byte {position}")]
    UnterminatedString { position: usize },
}

/// Errors that can occur while assembling tokens into a value tree.
///
/// Every variant carries what the grammar called for and, where one
/// exists, the token actually found. Positions are indices into the
/// token sequence, not source offsets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token at `index` did not match the grammar.
    #[error("expected {expected}, found {found} at token {index}")]
    Unexpected {
        expected: &'static str,
        found: String,
        index: usize,
    },

    /// The token sequence ended before the value was complete.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },

    /// A number token whose lexeme does not convert to a float. The
    /// bundled lexer only emits convertible lexemes, so this can only
    /// surface for hand-built token sequences.
    #[error("invalid number literal {lexeme:?}")]
    InvalidNumber { lexeme: String },

    /// Containers nested beyond the supported depth.
    #[error("containers nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Errors that can occur while rendering a value tree back to text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// Reserved for value models with non-string keys; the current
    /// `Value::Object` representation cannot produce it.
    #[error("object keys must be strings")]
    NonStringKey,
}

/// Umbrella error for the full decode/encode pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Convenience alias used throughout minijson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
