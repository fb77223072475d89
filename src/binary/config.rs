//! Limits applied while decoding and encoding.

/// Default maximum map nesting depth for both directions.
///
/// Real documents rarely nest more than a handful of levels; the limit only
/// exists so hostile input cannot exhaust the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Decode configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Maximum nesting depth of maps. The top-level map is depth 0, so a
    /// value of 0 only accepts documents without nested maps.
    pub max_depth: usize,
}

impl DecodeConfig {
    /// Creates a configuration with default limits.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Maximum nesting depth of maps, counted as in [`DecodeConfig`].
    pub max_depth: usize,
}

impl EncodeConfig {
    /// Creates a configuration with default limits.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self::new()
    }
}
