//! Encoder and decoder configuration.

/// Default bound on nested records and groups while decoding.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Options for the binary encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit map entries sorted by key instead of in insertion order.
    ///
    /// Two equal messages then always produce identical bytes, which is
    /// what content hashing needs.
    pub canonical_maps: bool,
}

impl EncodeOptions {
    pub fn canonical() -> Self {
        Self {
            canonical_maps: true,
        }
    }
}

/// Options for the binary decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of sub-messages (and skipped groups) below the
    /// top-level record.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
