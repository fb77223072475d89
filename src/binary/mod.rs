//! Binary VDF codec.
//!
//! Reads and writes the tagged binary key-value format: nested maps,
//! NUL-terminated strings and little-endian `u32` numbers.

mod config;
mod cursor;
mod decoder;
mod encoder;
mod types;

pub use config::{DEFAULT_MAX_DEPTH, DecodeConfig, EncodeConfig};
pub use cursor::Cursor;
pub use decoder::{
    MapItem, decode, decode_item, decode_map, decode_partial, decode_with_config,
};
pub use encoder::{encode, encode_cstring, encode_into, encode_key_tag, encode_with_config};
pub use types::Tag;
