//! Opaque chip identifiers.

use std::fmt::{self, Display};

/// An opaque identifier for a chip.
///
/// Chips are owned by the board layer; the finder only ever reads a chip's
/// identity and color. Identifiers are unique within one board session and
/// never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChipId(u32);

impl ChipId {
    /// Creates a chip identifier from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl Display for ChipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chip#{}", self.0)
    }
}
