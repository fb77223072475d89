//! Encoder and decoder for the binary VDF (Valve Data Format) key-value format.
//!
//! A binary VDF document is a tree of maps whose entries are nested maps,
//! NUL-terminated strings or little-endian `u32` numbers, each introduced by
//! a one-byte tag.
//!
//! # Features
//!
//! - **Zero-copy decoding**: keys and strings borrow from the input buffer
//! - **Bounds-checked reads**: truncated or malformed input is an error, never a panic
//! - **Insertion-ordered maps**: decode then encode reproduces the same bytes
//! - **Depth limits** on both directions so hostile nesting fails cleanly
//! - Optional `serde` feature to serialize trees (e.g. to JSON)
//!
//! # Example
//!
//! ```
//! use binary_vdf::{Entries, decode, encode};
//!
//! let mut settings = Entries::new();
//! settings.insert("volume", 7u32);
//!
//! let mut root = Entries::new();
//! root.insert("name", "demo");
//! root.insert("settings", settings);
//!
//! let bytes = encode(&root)?;
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded, root);
//! assert_eq!(decoded["settings"]["volume"].as_number(), Some(7));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

extern crate alloc;

pub mod binary;
pub mod error;
pub mod value;

pub use binary::{
    Cursor, DEFAULT_MAX_DEPTH, DecodeConfig, EncodeConfig, MapItem, Tag, decode, decode_partial,
    decode_with_config, encode, encode_cstring, encode_into, encode_key_tag, encode_with_config,
};
pub use error::{DecodeError, EncodeError, Result};
pub use value::{Entries, Key, Value, VdfStr};
