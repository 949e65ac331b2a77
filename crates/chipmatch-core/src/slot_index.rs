//! The coordinate-to-chip mapping for one board.

use std::collections::{HashMap, hash_map};

use crate::{ChipId, Position};

/// A mapping from grid position to the chip occupying that slot.
///
/// The board/session layer is the sole owner of a `SlotIndex` and mutates it
/// only through [`place`](Self::place) and [`remove`](Self::remove); the
/// combination finder borrows it read-only for the duration of one scan
/// pass.
///
/// # Examples
///
/// ```
/// use chipmatch_core::{ChipId, Position, SlotIndex};
///
/// let mut slots = SlotIndex::new();
/// slots.place(Position::new(0, 0), ChipId::new(7))?;
/// assert_eq!(slots.occupant(Position::new(0, 0)), Some(ChipId::new(7)));
/// assert_eq!(slots.remove(Position::new(0, 0)), Some(ChipId::new(7)));
/// # Ok::<(), chipmatch_core::SlotIndexError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotIndex {
    slots: HashMap<Position, ChipId>,
}

impl SlotIndex {
    /// Creates an empty slot index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the chip occupying `pos`, if any.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<ChipId> {
        self.slots.get(&pos).copied()
    }

    /// Places `chip` into the slot at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotIndexError::SlotOccupied`] if the slot already holds a
    /// chip; the index is left unchanged. Displacing a chip requires an
    /// explicit [`remove`](Self::remove) first.
    pub fn place(&mut self, pos: Position, chip: ChipId) -> Result<(), SlotIndexError> {
        match self.slots.entry(pos) {
            hash_map::Entry::Occupied(entry) => Err(SlotIndexError::SlotOccupied {
                position: pos,
                occupant: *entry.get(),
            }),
            hash_map::Entry::Vacant(entry) => {
                entry.insert(chip);
                Ok(())
            }
        }
    }

    /// Removes and returns the chip at `pos`, if any.
    pub fn remove(&mut self, pos: Position) -> Option<ChipId> {
        self.slots.remove(&pos)
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` iff no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns an iterator over `(position, chip)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, ChipId)> + '_ {
        self.slots.iter().map(|(pos, chip)| (*pos, *chip))
    }

    /// Removes every chip from the index.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

/// An error produced by slot index mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SlotIndexError {
    /// The target slot already holds a chip.
    #[display("slot {position} is already occupied by {occupant}")]
    SlotOccupied {
        /// The contested slot.
        position: Position,
        /// The chip already in the slot.
        occupant: ChipId,
    },
}
