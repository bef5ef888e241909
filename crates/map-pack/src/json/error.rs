//! Token layer error type.

use thiserror::Error;

/// Errors raised by the JSON tokenizer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("invalid JSON at position {0}")]
    Invalid(usize),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("invalid string escape at position {0}")]
    InvalidEscape(usize),
}
