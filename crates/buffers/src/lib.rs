//! Byte buffer primitives for the map-pack codec.
//!
//! The only abstraction here is [`Writer`], the append-only sink the JSON
//! token writer produces documents through.

mod writer;

pub use writer::Writer;
