//! `JsonTokenWriter` — event-oriented JSON writer.
//!
//! The mirror image of the token reader: callers emit structural events and
//! scalar values, and the writer takes care of commas, colons, and string
//! escaping while streaming UTF-8 JSON into a byte buffer.

use map_pack_buffers::Writer;

#[derive(Clone, Copy)]
enum Frame {
    Object { has_fields: bool },
    Array { has_items: bool },
}

pub struct JsonTokenWriter {
    writer: Writer,
    stack: Vec<Frame>,
}

impl Default for JsonTokenWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonTokenWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
            stack: Vec::new(),
        }
    }

    /// Discards any pending output and open containers.
    pub fn reset(&mut self) {
        self.writer.reset();
        self.stack.clear();
    }

    /// Returns the accumulated document bytes.
    pub fn flush(&mut self) -> Vec<u8> {
        self.stack.clear();
        self.writer.flush()
    }

    pub fn start_object(&mut self) {
        self.value_separator();
        self.writer.u8(b'{');
        self.stack.push(Frame::Object { has_fields: false });
    }

    pub fn end_object(&mut self) {
        self.stack.pop();
        self.writer.u8(b'}');
    }

    pub fn start_array(&mut self) {
        self.value_separator();
        self.writer.u8(b'[');
        self.stack.push(Frame::Array { has_items: false });
    }

    pub fn end_array(&mut self) {
        self.stack.pop();
        self.writer.u8(b']');
    }

    /// Writes an object member name; the member's value must follow.
    pub fn field(&mut self, name: &str) {
        if let Some(Frame::Object { has_fields }) = self.stack.last_mut() {
            if *has_fields {
                self.writer.u8(b',');
            }
            *has_fields = true;
        }
        write_json_string(&mut self.writer, name);
        self.writer.u8(b':');
    }

    pub fn write_str(&mut self, text: &str) {
        self.value_separator();
        write_json_string(&mut self.writer, text);
    }

    pub fn write_null(&mut self) {
        self.value_separator();
        self.writer.ascii("null");
    }

    pub fn write_boolean(&mut self, flag: bool) {
        self.value_separator();
        self.writer.ascii(if flag { "true" } else { "false" });
    }

    /// Non-finite floats have no JSON form and are written as null.
    pub fn write_number(&mut self, number: f64) {
        self.value_separator();
        if number.is_finite() {
            self.writer.ascii(&number.to_string());
        } else {
            self.writer.ascii("null");
        }
    }

    pub fn write_integer(&mut self, int: i64) {
        self.value_separator();
        self.writer.ascii(&int.to_string());
    }

    fn value_separator(&mut self) {
        if let Some(Frame::Array { has_items }) = self.stack.last_mut() {
            if *has_items {
                self.writer.u8(b',');
            }
            *has_items = true;
        }
    }
}

/// Write a JSON-encoded string (with escaping).
fn write_json_string(writer: &mut Writer, text: &str) {
    let bytes = text.as_bytes();
    // Fast path: printable ASCII without quotes or backslashes
    let plain = bytes
        .iter()
        .all(|&b| (32..127).contains(&b) && b != b'"' && b != b'\\');
    if plain {
        writer.u8(b'"');
        writer.buf(bytes);
        writer.u8(b'"');
        return;
    }
    // Fall back to serde_json for proper escaping
    let quoted = serde_json::to_string(text).unwrap_or_else(|_| String::from("\"\""));
    writer.ascii(&quoted);
}
