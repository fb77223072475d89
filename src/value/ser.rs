//! `serde::Serialize` for VDF trees.
//!
//! Maps serialize as maps in insertion order, numbers as `u32`, and strings
//! as UTF-8 text (invalid sequences are replaced with U+FFFD).
//!
//! The replacement is lossy for keys too: two distinct non-UTF-8 keys such as
//! `b"\xff"` and `b"\xfe"` both become `"\u{fffd}"`, so the output holds
//! duplicate object keys and a JSON reader keeps only one of them. Use the
//! binary encoder when such a tree must survive a round trip.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::string::VdfStr;
use super::types::{Entries, Value};

impl Serialize for VdfStr<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Map(map) => map.serialize(serializer),
            Value::Str(s) => s.serialize(serializer),
            Value::Number(n) => serializer.serialize_u32(*n),
        }
    }
}

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
