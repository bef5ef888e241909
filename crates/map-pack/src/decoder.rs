//! `MapDecoder` — reconstructs a mapping from the tagged document form.
//!
//! Decoding is a two-level finite automaton over the token stream. The
//! document automaton walks the header and the elements array:
//!
//! - `0` — end of the document reached
//! - `1` — inside the object representing the mapping (initial)
//! - `2` — saw the main key tag field name
//! - `3` — saw the main value tag field name
//! - `4` — saw the elements field name
//! - `6` — inside the elements array
//!
//! An unrecognized field name has its value read and discarded on the spot.
//! Each element object is consumed by a nested
//! automaton with local states of the same shape (`4`/`5` marking the key
//! and value leaf fields), whose tag overrides shadow the document's main
//! tags for that one entry. Tag strings are resolved against the registry
//! the moment they are read; leaf nodes are handed, unconsumed, to the
//! resolved codec, which must consume exactly one value node. Any token
//! that fits no transition aborts with the token and state in the error.

use std::sync::Arc;

use crate::container::MapContainer;
use crate::encoder::{ELEMENTS_FIELD, KEY_FIELD, KEY_TYPE_FIELD, VALUE_FIELD, VALUE_TYPE_FIELD};
use crate::error::MapDecodeError;
use crate::item::ItemBox;
use crate::json::{JsonToken, JsonTokenReader};
use crate::registry::{LeafCodec, TypeRegistry};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
enum DocState {
    Done = 0,
    Body = 1,
    MainKeyTag = 2,
    MainValueTag = 3,
    ElementsField = 4,
    InElements = 6,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
enum ElemState {
    Body = 1,
    KeyTag = 2,
    ValueTag = 3,
    KeyLeaf = 4,
    ValueLeaf = 5,
}

pub struct MapDecoder {
    registry: Arc<TypeRegistry>,
}

impl MapDecoder {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// Decodes one tagged document into a fresh `M`.
    pub fn decode<M: MapContainer>(&self, input: &[u8]) -> Result<M, MapDecodeError> {
        let mut reader = JsonTokenReader::new(input);
        match reader.next()? {
            JsonToken::StartObject => {}
            token => {
                return Err(MapDecodeError::UnexpectedToken {
                    token,
                    state: DocState::Body as u8,
                })
            }
        }
        let mut map = M::default();
        let mut main_key: Option<&LeafCodec> = None;
        let mut main_value: Option<&LeafCodec> = None;
        let mut state = DocState::Body;
        while state != DocState::Done {
            let token = reader.next()?;
            state = match (token, state) {
                (JsonToken::EndObject, DocState::Body) => DocState::Done,
                (JsonToken::FieldName(name), DocState::Body) => match name.as_str() {
                    KEY_TYPE_FIELD => DocState::MainKeyTag,
                    VALUE_TYPE_FIELD => DocState::MainValueTag,
                    ELEMENTS_FIELD => DocState::ElementsField,
                    // unrecognized field: its value is read and ignored
                    _ => {
                        reader.skip_value()?;
                        DocState::Body
                    }
                },
                (JsonToken::Str(tag), DocState::MainKeyTag) => {
                    main_key = Some(self.resolve(&tag)?);
                    DocState::Body
                }
                (JsonToken::Str(tag), DocState::MainValueTag) => {
                    main_value = Some(self.resolve(&tag)?);
                    DocState::Body
                }
                (JsonToken::StartArray, DocState::ElementsField) => DocState::InElements,
                (JsonToken::StartObject, DocState::InElements) => {
                    self.read_element(&mut reader, main_key, main_value, &mut map)?;
                    DocState::InElements
                }
                (JsonToken::EndArray, DocState::InElements) => DocState::Body,
                (token, state) => {
                    return Err(MapDecodeError::UnexpectedToken {
                        token,
                        state: state as u8,
                    })
                }
            };
        }
        Ok(map)
    }

    /// Consumes one element object, including its closing brace, and inserts
    /// the entry. Key and value default to absent if their field never
    /// appears; a tag override must precede the leaf it applies to, because
    /// it swaps the local codec used when that leaf is materialized.
    fn read_element<'r, M: MapContainer>(
        &'r self,
        reader: &mut JsonTokenReader<'_>,
        main_key: Option<&'r LeafCodec>,
        main_value: Option<&'r LeafCodec>,
        map: &mut M,
    ) -> Result<(), MapDecodeError> {
        let mut local_key = main_key;
        let mut local_value = main_value;
        let mut key: Option<ItemBox> = None;
        let mut value: Option<ItemBox> = None;
        let mut state = ElemState::Body;
        loop {
            match state {
                ElemState::KeyLeaf => {
                    key = read_leaf(reader, local_key, "key", state)?;
                    state = ElemState::Body;
                    continue;
                }
                ElemState::ValueLeaf => {
                    value = read_leaf(reader, local_value, "value", state)?;
                    state = ElemState::Body;
                    continue;
                }
                _ => {}
            }
            let token = reader.next()?;
            state = match (token, state) {
                (JsonToken::EndObject, ElemState::Body) => {
                    map.put(key, value);
                    return Ok(());
                }
                (JsonToken::FieldName(name), ElemState::Body) => match name.as_str() {
                    KEY_TYPE_FIELD => ElemState::KeyTag,
                    VALUE_TYPE_FIELD => ElemState::ValueTag,
                    KEY_FIELD => ElemState::KeyLeaf,
                    VALUE_FIELD => ElemState::ValueLeaf,
                    _ => {
                        reader.skip_value()?;
                        ElemState::Body
                    }
                },
                (JsonToken::Str(tag), ElemState::KeyTag) => {
                    local_key = Some(self.resolve(&tag)?);
                    ElemState::Body
                }
                (JsonToken::Str(tag), ElemState::ValueTag) => {
                    local_value = Some(self.resolve(&tag)?);
                    ElemState::Body
                }
                (token, state) => {
                    return Err(MapDecodeError::UnexpectedToken {
                        token,
                        state: state as u8,
                    })
                }
            };
        }
    }

    fn resolve(&self, tag: &str) -> Result<&LeafCodec, MapDecodeError> {
        self.registry
            .codec(tag)
            .ok_or_else(|| MapDecodeError::UnknownTag(tag.to_string()))
    }
}

/// Materializes one key or value leaf. A null literal leaves the side
/// absent; anything else goes through the codec in scope, which consumes
/// exactly one value node of whatever shape it encodes as.
fn read_leaf(
    reader: &mut JsonTokenReader<'_>,
    codec: Option<&LeafCodec>,
    side: &'static str,
    state: ElemState,
) -> Result<Option<ItemBox>, MapDecodeError> {
    match reader.peek()? {
        JsonToken::Null => {
            reader.next()?;
            Ok(None)
        }
        token @ (JsonToken::FieldName(_) | JsonToken::EndObject | JsonToken::EndArray) => {
            Err(MapDecodeError::UnexpectedToken {
                token,
                state: state as u8,
            })
        }
        _ => match codec {
            Some(codec) => codec.read_leaf(reader).map(Some),
            None => Err(MapDecodeError::MissingTypeTag(side)),
        },
    }
}
