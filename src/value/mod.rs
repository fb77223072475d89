//! Core data structures for VDF representation.

mod impls;
#[cfg(feature = "serde")]
mod ser;
mod string;
mod types;


pub use string::VdfStr;
pub use types::{Entries, Key, Value};
