//! Trait implementations for VDF types.

use alloc::string::String;
use alloc::vec::Vec;

use super::string::VdfStr;
use super::types::{Entries, Key, Value};
use core::fmt;
use core::fmt::Write as _;
use core::ops::Index;

// ============================================================================
// Pretty-print helper functions
// ============================================================================

/// Write a quoted and escaped string to the formatter.
///
/// Escapes special characters: `\n`, `\t`, `\r`, `\\`, `"`.
/// Invalid UTF-8 is rendered as U+FFFD.
fn write_quoted_str(f: &mut fmt::Formatter<'_>, s: &VdfStr<'_>) -> fmt::Result {
    f.write_char('"')?;
    for c in s.to_string_lossy().chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Write indentation (tabs) to the formatter.
fn write_indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_char('\t')?;
    }
    Ok(())
}

/// Helper struct for pretty-printing Entries with a specific indent level.
struct PrettyEntries<'e, 'a> {
    entries: &'e Entries<'a>,
    indent: usize,
}

impl fmt::Display for PrettyEntries<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (key, value) in self.entries.iter() {
            write_indent(f, self.indent + 1)?;
            write_quoted_str(f, key)?;
            if let Value::Map(inner) = value {
                // Map value: key on one line, braces on the following lines
                writeln!(f)?;
                write_indent(f, self.indent + 1)?;
                write!(
                    f,
                    "{}",
                    PrettyEntries {
                        entries: inner,
                        indent: self.indent + 1
                    }
                )?;
                writeln!(f)?;
            } else {
                write!(f, "\t{}", value)?;
                writeln!(f)?;
            }
        }
        write_indent(f, self.indent)?;
        write!(f, "}}")
    }
}

// ============================================================================
// From implementations for Value
// ============================================================================

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(VdfStr::from(s))
    }
}

impl<'a> From<String> for Value<'a> {
    fn from(s: String) -> Self {
        Value::Str(VdfStr::from(s))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Value::Str(VdfStr::from(bytes))
    }
}

impl<'a> From<Vec<u8>> for Value<'a> {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Str(VdfStr::from(bytes))
    }
}

impl<'a> From<VdfStr<'a>> for Value<'a> {
    fn from(s: VdfStr<'a>) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(n: u32) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<Entries<'a>> for Value<'a> {
    fn from(map: Entries<'a>) -> Self {
        Value::Map(map)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Map(map) => write!(f, "{}", map),
            Value::Str(s) => write_quoted_str(f, s),
            Value::Number(n) => write!(f, "\"{}\"", n),
        }
    }
}

impl fmt::Display for Entries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            PrettyEntries {
                entries: self,
                indent: 0
            }
        )
    }
}

// ============================================================================
// Iterator implementations for Entries
// ============================================================================

impl<'a> IntoIterator for Entries<'a> {
    type Item = (Key<'a>, Value<'a>);
    type IntoIter = indexmap::map::IntoIter<Key<'a>, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'e, 'a> IntoIterator for &'e Entries<'a> {
    type Item = (&'e Key<'a>, &'e Value<'a>);
    type IntoIter = indexmap::map::Iter<'e, Key<'a>, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, K, V> FromIterator<(K, V)> for Entries<'a>
where
    K: Into<Key<'a>>,
    V: Into<Value<'a>>,
{
    /// Collects pairs into a map; later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Entries::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, K, V> Extend<(K, V)> for Entries<'a>
where
    K: Into<Key<'a>>,
    V: Into<Value<'a>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

// ============================================================================
// Index implementations for Value and Entries
// ============================================================================

impl<'a> Index<&str> for Value<'a> {
    type Output = Value<'a>;

    /// Returns a reference to the value at the given key.
    ///
    /// # Panics
    ///
    /// Panics if this is not a map or if the key doesn't exist.
    /// Use `get()` for non-panicking access.
    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).expect("key not found in Value")
    }
}

impl<'a> Index<&str> for Entries<'a> {
    type Output = Value<'a>;

    /// Returns a reference to the value at the given key.
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist. Use `get()` for non-panicking access.
    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).expect("key not found in Entries")
    }
}
