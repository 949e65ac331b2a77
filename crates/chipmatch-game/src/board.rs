//! The board: chips, slots, and their colors.

use std::collections::HashMap;

use chipmatch_core::{ChipColor, ChipId, GridSize, Position, SlotIndex};
use chipmatch_finder::{ColorLookup, Combination, FindError, analyze};

use crate::{GameError, LevelDescription};

/// One board of chips.
///
/// The board is the single owner of the [`SlotIndex`] and of the chip color
/// store; every mutation goes through an explicit operation
/// ([`spawn_chip`](Self::spawn_chip), [`remove_chip`](Self::remove_chip),
/// [`move_chip`](Self::move_chip), [`swap`](Self::swap)). Subsystems that
/// only read the board borrow the index via [`slots`](Self::slots) and the
/// colors via the [`ColorLookup`] impl.
///
/// # Examples
///
/// ```
/// use chipmatch_core::{ChipColor, GridSize, Position};
/// use chipmatch_game::Board;
///
/// let mut board = Board::new(GridSize::new(3, 3));
/// let chip = board.spawn_chip(Position::new(0, 0), ChipColor::Red)?;
/// assert_eq!(board.chip_at(Position::new(0, 0)), Some(chip));
/// assert_eq!(board.color_at(Position::new(0, 0)), Some(ChipColor::Red));
/// # Ok::<(), chipmatch_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    slots: SlotIndex,
    colors: HashMap<ChipId, ChipColor>,
    next_chip: u32,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            slots: SlotIndex::new(),
            colors: HashMap::new(),
            next_chip: 0,
        }
    }

    /// Creates a board holding a level's pre-placed chips.
    ///
    /// Slots the level leaves open stay empty; the refill stage fills them
    /// when the game starts.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for a placement outside the
    /// level's grid, [`GameError::InvalidColorIndex`] for a color outside
    /// the level's palette prefix, and [`GameError::Slot`] when two
    /// placements collide.
    pub fn from_level(level: &LevelDescription) -> Result<Self, GameError> {
        let mut board = Self::new(level.size());
        for placement in &level.chips {
            if placement.color.index() >= level.color_count {
                return Err(GameError::InvalidColorIndex {
                    index: placement.color.index(),
                    color_count: level.color_count,
                });
            }
            board.spawn_chip(Position::new(placement.x, placement.y), placement.color)?;
        }
        Ok(board)
    }

    /// Returns the board bounds.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the slot index for read-only traversal.
    #[must_use]
    pub const fn slots(&self) -> &SlotIndex {
        &self.slots
    }

    /// Returns the chip occupying `pos`, if any.
    #[must_use]
    pub fn chip_at(&self, pos: Position) -> Option<ChipId> {
        self.slots.occupant(pos)
    }

    /// Returns the color of the chip occupying `pos`, if any.
    #[must_use]
    pub fn color_at(&self, pos: Position) -> Option<ChipColor> {
        self.chip_at(pos).and_then(|chip| self.chip_color(chip))
    }

    /// Returns the color of `chip`, if the chip is on the board.
    #[must_use]
    pub fn chip_color(&self, chip: ChipId) -> Option<ChipColor> {
        self.colors.get(&chip).copied()
    }

    /// Returns the number of chips on the board.
    #[must_use]
    pub fn chip_count(&self) -> usize {
        self.slots.len()
    }

    /// Creates a new chip of `color` in the slot at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when `pos` is outside the board
    /// and [`GameError::Slot`] when the slot is occupied.
    pub fn spawn_chip(&mut self, pos: Position, color: ChipColor) -> Result<ChipId, GameError> {
        self.check_bounds(pos)?;
        let chip = ChipId::new(self.next_chip);
        self.slots.place(pos, chip)?;
        self.next_chip += 1;
        self.colors.insert(chip, color);
        Ok(chip)
    }

    /// Removes and returns the chip at `pos`, if any.
    pub fn remove_chip(&mut self, pos: Position) -> Option<ChipId> {
        let chip = self.slots.remove(pos)?;
        self.colors.remove(&chip);
        Some(chip)
    }

    /// Moves the chip at `from` into the empty slot at `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when either position is outside
    /// the board, [`GameError::EmptySlot`] when `from` holds no chip, and
    /// [`GameError::Slot`] when `to` is occupied; the board is unchanged on
    /// error.
    pub fn move_chip(&mut self, from: Position, to: Position) -> Result<(), GameError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        let chip = self.chip_at(from).ok_or(GameError::EmptySlot(from))?;
        self.slots.place(to, chip)?;
        self.slots.remove(from);
        Ok(())
    }

    /// Exchanges the chips in two orthogonally adjacent slots.
    ///
    /// This is the raw board mutation; deciding whether the swap produces a
    /// combination (and cancelling it otherwise) is the session's job, see
    /// [`Game::try_swap`](crate::Game::try_swap).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`], [`GameError::NotAdjacent`], or
    /// [`GameError::EmptySlot`]; the board is unchanged on error.
    pub fn swap(&mut self, first: Position, second: Position) -> Result<(), GameError> {
        self.check_bounds(first)?;
        self.check_bounds(second)?;
        if !first.is_adjacent_to(second) {
            return Err(GameError::NotAdjacent { first, second });
        }
        let first_chip = self.chip_at(first).ok_or(GameError::EmptySlot(first))?;
        let second_chip = self.chip_at(second).ok_or(GameError::EmptySlot(second))?;

        self.slots.remove(first);
        self.slots.remove(second);
        self.slots.place(first, second_chip)?;
        self.slots.place(second, first_chip)?;
        Ok(())
    }

    /// Scans the board and returns every combination that qualifies for
    /// removal.
    ///
    /// # Errors
    ///
    /// Propagates [`FindError`] from the finder; with a board as the single
    /// owner of both stores this indicates an internal inconsistency.
    pub fn analyze(&self) -> Result<Vec<Combination>, FindError> {
        analyze(&self.slots, &self.colors, self.size)
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GameError> {
        if self.size.contains(pos) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                position: pos,
                size: self.size,
            })
        }
    }
}

impl ColorLookup for Board {
    fn color_of(&self, chip: ChipId) -> Option<ChipColor> {
        self.chip_color(chip)
    }
}
