//! A minimal string-leaf codec: a named resource carried as its IRI text.
//!
//! Also the counterexample to "every leaf is an object": the map codec
//! never inspects a leaf's shape, so a type is free to encode as a bare
//! string.

use crate::error::{MapDecodeError, MapEncodeError};
use crate::json::{JsonToken, JsonTokenReader, JsonTokenWriter};

/// A resource identifier, serialized as nothing but its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(pub String);

impl Iri {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn write_iri(iri: &Iri, writer: &mut JsonTokenWriter) -> Result<(), MapEncodeError> {
    writer.write_str(&iri.0);
    Ok(())
}

pub fn read_iri(reader: &mut JsonTokenReader<'_>) -> Result<Iri, MapDecodeError> {
    match reader.next()? {
        JsonToken::Str(text) => Ok(Iri(text)),
        token => Err(MapDecodeError::Leaf(format!(
            "expected a string leaf for an IRI, found {token}"
        ))),
    }
}
