/// What decode does with bytes left over after the declared payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytes {
    /// Stop after the payload and ignore anything after it. Lets callers
    /// embed a tens blob in a larger container.
    #[default]
    Ignore,
    /// Fail with `TensError::TrailingBytes`.
    Reject,
}

/// Decode-side configuration.
///
/// The format itself has no knobs; these only control how strictly input is
/// validated. `DecodeOptions::default()` matches the reference reader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub trailing_bytes: TrailingBytes,
    /// Reject bool bytes other than `0x00`/`0x01` instead of reading any
    /// non-zero byte as `true`.
    pub strict_bool: bool,
    /// Upper bound on the element count a header may declare.
    pub max_elements: Option<usize>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects trailing bytes and non-canonical bools.
    pub fn strict() -> Self {
        DecodeOptions {
            trailing_bytes: TrailingBytes::Reject,
            strict_bool: true,
            max_elements: None,
        }
    }

    pub fn with_trailing_bytes(mut self, policy: TrailingBytes) -> Self {
        self.trailing_bytes = policy;
        self
    }

    pub fn with_strict_bool(mut self, strict: bool) -> Self {
        self.strict_bool = strict;
        self
    }

    pub fn with_max_elements(mut self, limit: usize) -> Self {
        self.max_elements = Some(limit);
        self
    }
}
