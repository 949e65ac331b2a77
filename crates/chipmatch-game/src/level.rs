//! Level parameters.

use chipmatch_core::{ChipColor, GridSize};

/// A single pre-placed chip in a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipPlacement {
    /// The column of the chip.
    pub x: u32,
    /// The row of the chip.
    pub y: u32,
    /// The chip's color.
    pub color: ChipColor,
}

/// The parameters of one level, supplied by the host.
///
/// A level describes the board size, how many palette colors the level
/// uses, the time limit, and optionally an explicit starting layout. Slots
/// not covered by [`chips`](Self::chips) are filled randomly when a
/// [`Game`](crate::Game) starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDescription {
    /// Board width in slots.
    pub width: u32,
    /// Board height in slots.
    pub height: u32,
    /// How many palette colors the level draws from (a prefix of
    /// [`ChipColor::ALL`]).
    pub color_count: u8,
    /// Time limit in seconds.
    pub time: u32,
    /// Pre-placed chips; may be empty for a fully random board.
    pub chips: Vec<ChipPlacement>,
}

impl LevelDescription {
    /// Creates a level with no pre-placed chips.
    #[must_use]
    pub const fn new(width: u32, height: u32, color_count: u8, time: u32) -> Self {
        Self {
            width,
            height,
            color_count,
            time,
            chips: Vec::new(),
        }
    }

    /// Returns the board bounds of this level.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }
}
