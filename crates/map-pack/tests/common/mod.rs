//! Shared fixtures for the codec matrices: two object-leaf record types, a
//! string-leaf IRI type, and the registry the tests run against.

#![allow(dead_code)]

use std::sync::Arc;

use map_pack::iri::{read_iri, write_iri, Iri};
use map_pack::json::{JsonToken, JsonTokenReader, JsonTokenWriter};
use map_pack::{MapContainer, MapDecodeError, MapEncodeError, TypeRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rec {
    pub label: String,
    pub note: String,
}

impl Rec {
    pub fn new(label: &str, note: &str) -> Self {
        Self {
            label: label.into(),
            note: note.into(),
        }
    }
}

/// A second runtime type: same shape as [`Rec`] plus a numeric attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WideRec {
    pub label: String,
    pub note: String,
    pub weight: i64,
}

impl WideRec {
    pub fn new(label: &str, note: &str, weight: i64) -> Self {
        Self {
            label: label.into(),
            note: note.into(),
            weight,
        }
    }
}

fn write_rec(rec: &Rec, writer: &mut JsonTokenWriter) -> Result<(), MapEncodeError> {
    writer.start_object();
    writer.field("label");
    writer.write_str(&rec.label);
    writer.field("note");
    writer.write_str(&rec.note);
    writer.end_object();
    Ok(())
}

fn read_rec(reader: &mut JsonTokenReader<'_>) -> Result<Rec, MapDecodeError> {
    expect_start_object(reader)?;
    let mut label = String::new();
    let mut note = String::new();
    loop {
        match reader.next()? {
            JsonToken::EndObject => break,
            JsonToken::FieldName(name) => match name.as_str() {
                "label" => label = expect_str(reader)?,
                "note" => note = expect_str(reader)?,
                _ => reader.skip_value()?,
            },
            token => {
                return Err(MapDecodeError::Leaf(format!(
                    "unexpected {token} in record"
                )))
            }
        }
    }
    Ok(Rec { label, note })
}

fn write_wide(rec: &WideRec, writer: &mut JsonTokenWriter) -> Result<(), MapEncodeError> {
    writer.start_object();
    writer.field("label");
    writer.write_str(&rec.label);
    writer.field("note");
    writer.write_str(&rec.note);
    writer.field("weight");
    writer.write_integer(rec.weight);
    writer.end_object();
    Ok(())
}

fn read_wide(reader: &mut JsonTokenReader<'_>) -> Result<WideRec, MapDecodeError> {
    expect_start_object(reader)?;
    let mut label = String::new();
    let mut note = String::new();
    let mut weight = 0_i64;
    loop {
        match reader.next()? {
            JsonToken::EndObject => break,
            JsonToken::FieldName(name) => match name.as_str() {
                "label" => label = expect_str(reader)?,
                "note" => note = expect_str(reader)?,
                "weight" => weight = expect_number(reader)? as i64,
                _ => reader.skip_value()?,
            },
            token => {
                return Err(MapDecodeError::Leaf(format!(
                    "unexpected {token} in record"
                )))
            }
        }
    }
    Ok(WideRec {
        label,
        note,
        weight,
    })
}

fn expect_start_object(reader: &mut JsonTokenReader<'_>) -> Result<(), MapDecodeError> {
    match reader.next()? {
        JsonToken::StartObject => Ok(()),
        token => Err(MapDecodeError::Leaf(format!(
            "expected an object leaf, found {token}"
        ))),
    }
}

fn expect_str(reader: &mut JsonTokenReader<'_>) -> Result<String, MapDecodeError> {
    match reader.next()? {
        JsonToken::Str(text) => Ok(text),
        token => Err(MapDecodeError::Leaf(format!(
            "expected a string, found {token}"
        ))),
    }
}

fn expect_number(reader: &mut JsonTokenReader<'_>) -> Result<f64, MapDecodeError> {
    match reader.next()? {
        JsonToken::Number(number) => Ok(number),
        token => Err(MapDecodeError::Leaf(format!(
            "expected a number, found {token}"
        ))),
    }
}

/// Registry with the three fixture types: `"rec"` and `"wide"` encode as
/// objects, `"iri"` as a bare string.
pub fn registry() -> Arc<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    registry.register::<Rec, _, _>("rec", write_rec, read_rec);
    registry.register::<WideRec, _, _>("wide", write_wide, read_wide);
    registry.register::<Iri, _, _>("iri", write_iri, read_iri);
    Arc::new(registry)
}

/// Same entry set, order-insensitive: equal sizes, and every key of
/// `expected` present in `actual` with an equal value.
pub fn assert_entries_match<A: MapContainer, B: MapContainer>(expected: &A, actual: &B) {
    assert_eq!(expected.size(), actual.size(), "mapping sizes differ");
    for (key, value) in expected.pairs() {
        match actual.pairs().find(|(actual_key, _)| *actual_key == key) {
            Some((_, actual_value)) => {
                assert_eq!(actual_value, value, "value differs for key {key:?}")
            }
            None => panic!("mapping is missing key {key:?}"),
        }
    }
}
