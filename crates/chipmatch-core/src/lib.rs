//! Core data structures for grid-based tile-matching games.
//!
//! This crate provides the value types shared by the combination finder and
//! the board/session layer:
//!
//! 1. **Coordinates** - [`Position`] (a grid slot address) and [`GridSize`]
//!    (board bounds, including the neighbor-mask computation that keeps all
//!    traversal in bounds).
//! 2. **Directions** - [`Neighbors`], a bitmask over the eight compass
//!    directions; combination search uses only the orthogonal four.
//! 3. **Chips** - [`ChipId`] (an opaque identifier) and [`ChipColor`] (the
//!    closed palette).
//! 4. **Slot index** - [`SlotIndex`], the coordinate-to-chip mapping owned by
//!    the board and borrowed read-only during a search pass.
//!
//! # Examples
//!
//! ```
//! use chipmatch_core::{GridSize, Neighbors, Position};
//!
//! let size = GridSize::new(3, 3);
//! let corner = Position::new(0, 0);
//!
//! // Only two of the four orthogonal neighbors stay in bounds.
//! assert_eq!(size.neighbor_mask(corner), Neighbors::RIGHT | Neighbors::TOP);
//! ```

pub mod chip;
pub mod color;
pub mod neighbors;
pub mod position;
pub mod slot_index;

// Re-export commonly used types
pub use self::{
    chip::ChipId,
    color::ChipColor,
    neighbors::{DirectionError, Neighbors},
    position::{GridSize, Position},
    slot_index::{SlotIndex, SlotIndexError},
};
