//! Board and session management for grid-based tile-matching games.
//!
//! This crate wraps the combination finder in the state a running game
//! needs:
//!
//! - [`LevelDescription`] - the level parameters supplied by the host.
//! - [`Board`] - the sole owner of the slot index and chip color store,
//!   mutated only through explicit place/remove/move/swap operations.
//! - [`Stage`] and [`StageRegistry`] - an explicit registry of board
//!   processing stages (clear, fall, refill) that the host enables and
//!   disables by name.
//! - [`Game`] - a play session: swap-or-cancel handling, cascade
//!   resolution, and scoring.
//!
//! # Examples
//!
//! ```
//! use chipmatch_game::{Game, LevelDescription};
//!
//! let level = LevelDescription::new(6, 6, 4, 60);
//! let mut game = Game::new(&level, 42)?;
//!
//! // The board starts full and with no combinations left on it.
//! assert_eq!(game.board().chip_count(), 36);
//! assert!(game.board().analyze()?.is_empty());
//! # Ok::<(), chipmatch_game::GameError>(())
//! ```

pub mod board;
pub mod game;
pub mod level;
pub mod stage;

use chipmatch_core::{Position, SlotIndexError};
use chipmatch_finder::FindError;

// Re-export commonly used types
pub use self::{
    board::Board,
    game::{Game, SwapOutcome},
    level::{ChipPlacement, LevelDescription},
    stage::{ClearCombinationsStage, FallStage, RefillStage, Stage, StageOutcome, StageRegistry},
};

/// An error produced by board or session operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// A position lies outside the board.
    #[display("position {position} is outside the {size} grid")]
    #[from(skip)]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// The board bounds.
        size: chipmatch_core::GridSize,
    },
    /// An operation needed a chip in a slot that is empty.
    #[display("no chip at {_0}")]
    #[from(skip)]
    EmptySlot(#[error(not(source))] Position),
    /// A swap was requested between two non-adjacent slots.
    #[display("{first} and {second} are not orthogonally adjacent")]
    #[from(skip)]
    NotAdjacent {
        /// One end of the swap.
        first: Position,
        /// The other end of the swap.
        second: Position,
    },
    /// A level placement referenced a color outside the level's palette.
    #[display("color index {index} exceeds the level's color count {color_count}")]
    #[from(skip)]
    InvalidColorIndex {
        /// The offending palette index.
        index: u8,
        /// The level's palette size.
        color_count: u8,
    },
    /// A level's color count is unplayable.
    ///
    /// At least two colors are required for refills to settle; at most the
    /// full palette is available.
    #[display(
        "color count {color_count} is unplayable (must be 2 to {})",
        chipmatch_core::ChipColor::ALL.len()
    )]
    #[from(skip)]
    InvalidColorCount {
        /// The level's palette size.
        color_count: u8,
    },
    /// A slot index mutation failed.
    #[display("slot index error: {_0}")]
    Slot(SlotIndexError),
    /// A combination search failed.
    #[display("combination search error: {_0}")]
    Find(FindError),
}
