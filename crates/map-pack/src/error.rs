//! Codec error types.

use thiserror::Error;

use crate::json::{JsonError, JsonToken};

/// Errors raised while encoding a mapping.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapEncodeError {
    /// A key or value has a runtime type no tag was registered for.
    #[error("no tag registered for runtime type {0}")]
    UnregisteredType(&'static str),
    /// A registered leaf writer failed.
    #[error("leaf encoding failed: {0}")]
    Leaf(String),
}

/// Errors raised while decoding a tagged document.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapDecodeError {
    /// The token stream violated the document automaton; carries the
    /// offending token and the automaton state for diagnostics.
    #[error("unexpected {token} (state = {state})")]
    UnexpectedToken { token: JsonToken, state: u8 },
    /// A type tag in the stream has no registered codec.
    #[error("no type registered for tag {0:?}")]
    UnknownTag(String),
    /// A non-null key or value leaf appeared with no type tag in scope.
    #[error("missing type tag for a non-null {0} leaf")]
    MissingTypeTag(&'static str),
    /// The underlying JSON was malformed.
    #[error(transparent)]
    Json(#[from] JsonError),
    /// A registered leaf reader failed.
    #[error("leaf decoding failed: {0}")]
    Leaf(String),
}
