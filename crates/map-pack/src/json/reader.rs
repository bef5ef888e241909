//! `JsonTokenReader` — forward-only pull tokenizer over a byte slice.
//!
//! Scans the input with a plain byte cursor and hands out one [`JsonToken`]
//! per call. A small context stack distinguishes object member names from
//! string values; commas and colons are consumed silently so the token
//! stream carries structure only.

use super::error::JsonError;
use super::token::JsonToken;

#[derive(Clone, Copy, PartialEq)]
enum Ctx {
    Object,
    Array,
}

#[derive(Clone, Copy, PartialEq)]
enum Expect {
    Value,
    FirstKey,
    NextKey,
    FirstValue,
    NextValue,
    Done,
}

pub struct JsonTokenReader<'a> {
    data: &'a [u8],
    x: usize,
    stack: Vec<Ctx>,
    expect: Expect,
    peeked: Option<JsonToken>,
}

impl<'a> JsonTokenReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            x: 0,
            stack: Vec::new(),
            expect: Expect::Value,
            peeked: None,
        }
    }

    /// Current byte offset, for diagnostics.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> Result<JsonToken, JsonError> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }
        self.advance()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<JsonToken, JsonError> {
        if let Some(token) = &self.peeked {
            return Ok(token.clone());
        }
        let token = self.advance()?;
        self.peeked = Some(token.clone());
        Ok(token)
    }

    /// Consumes exactly one value node of any shape.
    pub fn skip_value(&mut self) -> Result<(), JsonError> {
        let mut depth = match self.next()? {
            JsonToken::StartObject | JsonToken::StartArray => 1usize,
            JsonToken::FieldName(_) | JsonToken::EndObject | JsonToken::EndArray => {
                return Err(JsonError::Invalid(self.x));
            }
            _ => return Ok(()),
        };
        while depth > 0 {
            match self.next()? {
                JsonToken::StartObject | JsonToken::StartArray => depth += 1,
                JsonToken::EndObject | JsonToken::EndArray => depth -= 1,
                _ => {}
            }
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<JsonToken, JsonError> {
        self.skip_whitespace();
        match self.expect {
            Expect::Value => self.read_value(),
            Expect::FirstKey => {
                if self.peek_byte()? == b'}' {
                    self.x += 1;
                    self.end_container();
                    return Ok(JsonToken::EndObject);
                }
                self.read_field_name()
            }
            Expect::NextKey => match self.peek_byte()? {
                b'}' => {
                    self.x += 1;
                    self.end_container();
                    Ok(JsonToken::EndObject)
                }
                b',' => {
                    self.x += 1;
                    self.skip_whitespace();
                    self.read_field_name()
                }
                _ => Err(JsonError::Invalid(self.x)),
            },
            Expect::FirstValue => {
                if self.peek_byte()? == b']' {
                    self.x += 1;
                    self.end_container();
                    return Ok(JsonToken::EndArray);
                }
                self.read_value()
            }
            Expect::NextValue => match self.peek_byte()? {
                b']' => {
                    self.x += 1;
                    self.end_container();
                    Ok(JsonToken::EndArray)
                }
                b',' => {
                    self.x += 1;
                    self.skip_whitespace();
                    self.read_value()
                }
                _ => Err(JsonError::Invalid(self.x)),
            },
            Expect::Done => Err(JsonError::Invalid(self.x)),
        }
    }

    fn read_value(&mut self) -> Result<JsonToken, JsonError> {
        match self.peek_byte()? {
            b'{' => {
                self.x += 1;
                self.stack.push(Ctx::Object);
                self.expect = Expect::FirstKey;
                Ok(JsonToken::StartObject)
            }
            b'[' => {
                self.x += 1;
                self.stack.push(Ctx::Array);
                self.expect = Expect::FirstValue;
                Ok(JsonToken::StartArray)
            }
            b'"' => {
                let text = self.read_string()?;
                self.after_value();
                Ok(JsonToken::Str(text))
            }
            b'n' => {
                self.read_literal(b"null")?;
                self.after_value();
                Ok(JsonToken::Null)
            }
            b't' => {
                self.read_literal(b"true")?;
                self.after_value();
                Ok(JsonToken::Bool(true))
            }
            b'f' => {
                self.read_literal(b"false")?;
                self.after_value();
                Ok(JsonToken::Bool(false))
            }
            ch if ch == b'-' || ch.is_ascii_digit() => {
                let number = self.read_number()?;
                self.after_value();
                Ok(JsonToken::Number(number))
            }
            _ => Err(JsonError::Invalid(self.x)),
        }
    }

    fn read_field_name(&mut self) -> Result<JsonToken, JsonError> {
        if self.peek_byte()? != b'"' {
            return Err(JsonError::Invalid(self.x));
        }
        let name = self.read_string()?;
        self.skip_whitespace();
        if self.peek_byte()? != b':' {
            return Err(JsonError::Invalid(self.x));
        }
        self.x += 1;
        self.expect = Expect::Value;
        Ok(JsonToken::FieldName(name))
    }

    fn end_container(&mut self) {
        self.stack.pop();
        self.after_value();
    }

    fn after_value(&mut self) {
        self.expect = match self.stack.last() {
            Some(Ctx::Object) => Expect::NextKey,
            Some(Ctx::Array) => Expect::NextValue,
            None => Expect::Done,
        };
    }

    fn peek_byte(&self) -> Result<u8, JsonError> {
        self.data.get(self.x).copied().ok_or(JsonError::UnexpectedEof)
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    /// Caller has verified the opening quote.
    fn read_string(&mut self) -> Result<String, JsonError> {
        let start = self.x + 1;
        let end = find_ending_quote(self.data, start)?;
        let text = decode_string_body(&self.data[start..end], start)?;
        self.x = end + 1;
        Ok(text)
    }

    fn read_literal(&mut self, literal: &'static [u8]) -> Result<(), JsonError> {
        let end = self.x + literal.len();
        if end > self.data.len() || &self.data[self.x..end] != literal {
            return Err(JsonError::Invalid(self.x));
        }
        self.x = end;
        Ok(())
    }

    fn read_number(&mut self) -> Result<f64, JsonError> {
        let start = self.x;
        let data = self.data;
        let len = data.len();
        let mut x = self.x;
        if x < len && data[x] == b'-' {
            x += 1;
        }
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x < len && data[x] == b'.' {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        let text = std::str::from_utf8(&data[start..x]).map_err(|_| JsonError::InvalidUtf8)?;
        let number = text.parse::<f64>().map_err(|_| JsonError::Invalid(start))?;
        self.x = x;
        Ok(number)
    }
}

fn find_ending_quote(data: &[u8], start: usize) -> Result<usize, JsonError> {
    let mut x = start;
    while x < data.len() {
        match data[x] {
            b'"' => return Ok(x),
            b'\\' => x += 2,
            _ => x += 1,
        }
    }
    Err(JsonError::UnexpectedEof)
}

/// Decode a string body (between the quotes), handling escape sequences.
fn decode_string_body(bytes: &[u8], position: usize) -> Result<String, JsonError> {
    // Fast path: no backslash
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| JsonError::InvalidUtf8);
    }
    // Wrap in quotes and let serde_json unescape
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    serde_json::from_slice(&quoted).map_err(|_| JsonError::InvalidEscape(position))
}
