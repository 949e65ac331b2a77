//! The play session.

use chipmatch_core::{ChipColor, Position};

use crate::{
    Board, ClearCombinationsStage, FallStage, GameError, LevelDescription, RefillStage,
    StageRegistry,
};

/// The result of a player swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SwapOutcome {
    /// The swap produced at least one combination; cascades were resolved.
    Matched {
        /// Points gained by the swap, including cascades.
        points: u32,
    },
    /// The swap produced no combination and was undone.
    Cancelled,
}

/// One play session: a board, its processing stages, and the score.
///
/// A session is created from a [`LevelDescription`] and a seed. Pre-placed
/// chips are laid out first, then the stage pipeline (clear, fall, refill)
/// runs until the board is stable, so play starts on a full board with no
/// combinations waiting on it and a score of zero.
///
/// # Examples
///
/// ```
/// use chipmatch_game::{Game, LevelDescription};
///
/// let level = LevelDescription::new(5, 5, 4, 60);
/// let game = Game::new(&level, 1)?;
/// assert_eq!(game.score(), 0);
/// assert_eq!(game.board().chip_count(), 25);
/// # Ok::<(), chipmatch_game::GameError>(())
/// ```
#[derive(Debug)]
pub struct Game {
    board: Board,
    stages: StageRegistry,
    score: u32,
}

impl Game {
    /// Creates a session for `level`, seeding the refill generator with
    /// `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidColorCount`] when the level's color count
    /// is below two (a single color keeps matching forever after every
    /// refill) or exceeds the palette. Propagates board construction errors
    /// from the level (out-of-bounds or colliding placements, colors outside
    /// the level palette).
    pub fn new(level: &LevelDescription, seed: u64) -> Result<Self, GameError> {
        if level.color_count < 2 || usize::from(level.color_count) > ChipColor::ALL.len() {
            return Err(GameError::InvalidColorCount {
                color_count: level.color_count,
            });
        }
        let board = Board::from_level(level)?;
        let mut stages = StageRegistry::new();
        stages.register(Box::new(ClearCombinationsStage));
        stages.register(Box::new(FallStage));
        stages.register(Box::new(RefillStage::new(level.color_count, seed)));

        let mut game = Self {
            board,
            stages,
            score: 0,
        };
        // Settle the starting layout; the warm-up awards no score.
        game.resolve()?;
        game.score = 0;
        Ok(game)
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the stage registry.
    #[must_use]
    pub const fn stages(&self) -> &StageRegistry {
        &self.stages
    }

    /// Returns the stage registry for host-side toggling.
    pub const fn stages_mut(&mut self) -> &mut StageRegistry {
        &mut self.stages
    }

    /// Attempts a player swap of two adjacent chips.
    ///
    /// The chips are exchanged and the board analyzed; if no qualifying
    /// combination touches either swapped slot, the swap is undone and
    /// [`SwapOutcome::Cancelled`] is returned with the board exactly as it
    /// was. Otherwise cascades are resolved and the points gained are
    /// reported (and added to [`score`](Self::score)).
    ///
    /// # Errors
    ///
    /// Returns the board's swap errors ([`GameError::OutOfBounds`],
    /// [`GameError::NotAdjacent`], [`GameError::EmptySlot`]) without
    /// touching the board.
    pub fn try_swap(&mut self, first: Position, second: Position) -> Result<SwapOutcome, GameError> {
        self.board.swap(first, second)?;

        let combinations = self.board.analyze()?;
        let touches_swap = combinations
            .iter()
            .any(|c| c.contains_position(first) || c.contains_position(second));
        if !touches_swap {
            log::debug!("swap {first} <-> {second} produced no combination, cancelling");
            self.board.swap(second, first)?;
            return Ok(SwapOutcome::Cancelled);
        }

        let points = self.resolve()?;
        Ok(SwapOutcome::Matched { points })
    }

    /// Runs the stage pipeline until no enabled stage changes the board,
    /// adding the points gained to the score.
    ///
    /// # Errors
    ///
    /// Propagates the first stage error.
    pub fn resolve(&mut self) -> Result<u32, GameError> {
        let mut points = 0;
        loop {
            let outcome = self.stages.run_once(&mut self.board)?;
            points += outcome.points;
            if !outcome.changed {
                break;
            }
        }
        self.score += points;
        Ok(points)
    }
}
