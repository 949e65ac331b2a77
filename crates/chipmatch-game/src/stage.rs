//! Board processing stages and their registry.
//!
//! A [`Stage`] is one step of board processing (clearing combinations,
//! letting chips fall, refilling empty slots). Stages live in a
//! [`StageRegistry`] that the host controls directly: stages run in
//! registration order and can be enabled or disabled individually by name,
//! or all at once. There is no runtime discovery of stages; everything the
//! registry runs was registered explicitly.

use std::fmt::Debug;

use chipmatch_core::{ChipColor, Position};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{Board, GameError};

/// Points awarded per chip removed by the clear stage.
pub const POINTS_PER_CHIP: u32 = 10;

/// The result of running one stage (or one registry pass).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageOutcome {
    /// Whether the stage mutated the board.
    pub changed: bool,
    /// Points awarded by the stage.
    pub points: u32,
}

impl StageOutcome {
    /// Folds another outcome into this one.
    pub fn merge(&mut self, other: Self) {
        self.changed |= other.changed;
        self.points += other.points;
    }
}

/// One step of board processing.
pub trait Stage: Debug {
    /// Returns the stage's registry name.
    fn name(&self) -> &'static str;

    /// Runs the stage against the board.
    ///
    /// # Errors
    ///
    /// Returns an error when the stage detects an invalid board state.
    fn run(&mut self, board: &mut Board) -> Result<StageOutcome, GameError>;
}

/// A boxed stage.
pub type BoxedStage = Box<dyn Stage>;

#[derive(Debug)]
struct StageEntry {
    stage: BoxedStage,
    enabled: bool,
}

/// An explicit, ordered registry of processing stages.
///
/// # Examples
///
/// ```
/// use chipmatch_core::GridSize;
/// use chipmatch_game::{Board, ClearCombinationsStage, StageRegistry};
///
/// let mut registry = StageRegistry::new();
/// registry.register(Box::new(ClearCombinationsStage));
/// assert_eq!(registry.names(), ["clear-combinations"]);
///
/// let mut board = Board::new(GridSize::new(3, 3));
/// let outcome = registry.run_once(&mut board)?;
/// assert!(!outcome.changed);
/// # Ok::<(), chipmatch_game::GameError>(())
/// ```
#[derive(Debug, Default)]
pub struct StageRegistry {
    entries: Vec<StageEntry>,
}

impl StageRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage, enabled, at the end of the run order.
    pub fn register(&mut self, stage: BoxedStage) {
        self.entries.push(StageEntry {
            stage,
            enabled: true,
        });
    }

    /// Enables or disables the stage called `name`.
    ///
    /// Returns `false` when no stage has that name.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.stage.name() == name)
        else {
            return false;
        };
        entry.enabled = enabled;
        true
    }

    /// Enables or disables every registered stage.
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for entry in &mut self.entries {
            entry.enabled = enabled;
        }
    }

    /// Returns whether the stage called `name` is enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| entry.stage.name() == name)
            .map(|entry| entry.enabled)
    }

    /// Returns the registered stage names in run order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|entry| entry.stage.name())
            .collect()
    }

    /// Runs every enabled stage once, in registration order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first stage error.
    pub fn run_once(&mut self, board: &mut Board) -> Result<StageOutcome, GameError> {
        let mut outcome = StageOutcome::default();
        for entry in &mut self.entries {
            if !entry.enabled {
                continue;
            }
            let stage_outcome = entry.stage.run(board)?;
            if stage_outcome.changed {
                log::debug!(
                    "stage {:?} changed the board (+{} points)",
                    entry.stage.name(),
                    stage_outcome.points
                );
            }
            outcome.merge(stage_outcome);
        }
        Ok(outcome)
    }
}

/// Removes every qualifying combination and awards points for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClearCombinationsStage;

impl Stage for ClearCombinationsStage {
    fn name(&self) -> &'static str {
        "clear-combinations"
    }

    fn run(&mut self, board: &mut Board) -> Result<StageOutcome, GameError> {
        let combinations = board.analyze()?;
        let mut outcome = StageOutcome::default();
        for combination in &combinations {
            for pos in combination.positions() {
                board.remove_chip(*pos);
            }
            let removed = u32::try_from(combination.len()).unwrap_or(u32::MAX);
            outcome.changed = true;
            outcome.points += POINTS_PER_CHIP * removed;
        }
        Ok(outcome)
    }
}

/// Compacts every column downward: chips fall into the lowest empty slots,
/// preserving their vertical order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallStage;

impl Stage for FallStage {
    fn name(&self) -> &'static str {
        "fall"
    }

    fn run(&mut self, board: &mut Board) -> Result<StageOutcome, GameError> {
        let size = board.size();
        let mut outcome = StageOutcome::default();
        for x in 0..size.width() {
            let mut write_y = 0;
            for y in 0..size.height() {
                let pos = Position::new(x, y);
                if board.chip_at(pos).is_none() {
                    continue;
                }
                if y != write_y {
                    board.move_chip(pos, Position::new(x, write_y))?;
                    outcome.changed = true;
                }
                write_y += 1;
            }
        }
        Ok(outcome)
    }
}

/// Fills every empty slot with a randomly colored chip.
///
/// Colors are drawn from the first `color_count` palette entries with a
/// [`Pcg64Mcg`] generator, so a session seed reproduces the same refills.
#[derive(Debug, Clone)]
pub struct RefillStage {
    color_count: u8,
    rng: Pcg64Mcg,
}

impl RefillStage {
    /// Creates a refill stage drawing from `color_count` palette colors.
    ///
    /// # Panics
    ///
    /// Panics if `color_count` is zero or exceeds the palette.
    #[must_use]
    pub fn new(color_count: u8, seed: u64) -> Self {
        assert!(
            color_count >= 1 && usize::from(color_count) <= ChipColor::ALL.len(),
            "color count {color_count} is outside the palette"
        );
        Self {
            color_count,
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl Stage for RefillStage {
    fn name(&self) -> &'static str {
        "refill"
    }

    fn run(&mut self, board: &mut Board) -> Result<StageOutcome, GameError> {
        let mut outcome = StageOutcome::default();
        for pos in board.size().positions() {
            if board.chip_at(pos).is_some() {
                continue;
            }
            let color = ChipColor::from_index(self.rng.random_range(0..self.color_count));
            board.spawn_chip(pos, color)?;
            outcome.changed = true;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use chipmatch_core::GridSize;

    use super::*;

    fn column_board() -> Board {
        // One column with gaps: chips at y = 1 and y = 3.
        let mut board = Board::new(GridSize::new(1, 4));
        board.spawn_chip(Position::new(0, 1), ChipColor::Red).unwrap();
        board.spawn_chip(Position::new(0, 3), ChipColor::Blue).unwrap();
        board
    }

    #[test]
    fn test_fall_compacts_columns_preserving_order() {
        let mut board = column_board();
        let red = board.chip_at(Position::new(0, 1)).unwrap();
        let blue = board.chip_at(Position::new(0, 3)).unwrap();

        let outcome = FallStage.run(&mut board).unwrap();
        assert!(outcome.changed);
        assert_eq!(board.chip_at(Position::new(0, 0)), Some(red));
        assert_eq!(board.chip_at(Position::new(0, 1)), Some(blue));
        assert_eq!(board.chip_at(Position::new(0, 2)), None);
        assert_eq!(board.chip_at(Position::new(0, 3)), None);

        // A second run has nothing left to do.
        let outcome = FallStage.run(&mut board).unwrap();
        assert!(!outcome.changed);
    }

    #[test]
    fn test_refill_fills_every_empty_slot_reproducibly() {
        let mut first = column_board();
        let mut second = column_board();

        RefillStage::new(3, 7).run(&mut first).unwrap();
        RefillStage::new(3, 7).run(&mut second).unwrap();

        assert_eq!(first.chip_count(), 4);
        for pos in first.size().positions() {
            assert_eq!(first.color_at(pos), second.color_at(pos));
            let color = first.color_at(pos).unwrap();
            assert!(color.index() < 3);
        }
    }

    #[test]
    fn test_clear_stage_scores_removed_chips() {
        let mut board = Board::new(GridSize::new(3, 2));
        for x in 0..3 {
            board.spawn_chip(Position::new(x, 0), ChipColor::Red).unwrap();
        }
        board.spawn_chip(Position::new(0, 1), ChipColor::Blue).unwrap();

        let outcome = ClearCombinationsStage.run(&mut board).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.points, 3 * POINTS_PER_CHIP);
        assert_eq!(board.chip_count(), 1);
    }

    #[test]
    fn test_registry_toggles_stages() {
        let mut registry = StageRegistry::new();
        registry.register(Box::new(ClearCombinationsStage));
        registry.register(Box::new(FallStage));
        assert_eq!(registry.names(), ["clear-combinations", "fall"]);

        assert!(registry.set_enabled("fall", false));
        assert_eq!(registry.is_enabled("fall"), Some(false));
        assert!(!registry.set_enabled("no-such-stage", true));

        let mut board = column_board();
        let outcome = registry.run_once(&mut board).unwrap();
        // Fall is disabled and nothing matches, so the board is untouched.
        assert!(!outcome.changed);
        assert_eq!(board.chip_at(Position::new(0, 0)), None);

        registry.set_all_enabled(false);
        assert_eq!(registry.is_enabled("clear-combinations"), Some(false));
        registry.set_all_enabled(true);
        assert_eq!(registry.is_enabled("fall"), Some(true));
    }
}
