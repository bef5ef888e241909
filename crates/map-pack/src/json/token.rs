use std::fmt;

/// One event of a JSON token stream.
///
/// Object member names surface as [`JsonToken::FieldName`], separate from
/// string values, so a consumer can drive a state machine without tracking
/// nesting itself.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonToken {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName(String),
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for JsonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonToken::StartObject => write!(f, "start of object"),
            JsonToken::EndObject => write!(f, "end of object"),
            JsonToken::StartArray => write!(f, "start of array"),
            JsonToken::EndArray => write!(f, "end of array"),
            JsonToken::FieldName(name) => write!(f, "field name {name:?}"),
            JsonToken::Str(text) => write!(f, "string {text:?}"),
            JsonToken::Number(number) => write!(f, "number {number}"),
            JsonToken::Bool(flag) => write!(f, "boolean {flag}"),
            JsonToken::Null => write!(f, "null"),
        }
    }
}
