//! Flood-fill combination search.

use std::collections::{HashMap, VecDeque};

use chipmatch_core::{ChipColor, ChipId, DirectionError, GridSize, Neighbors, Position, SlotIndex};
use tinyvec::ArrayVec;

use crate::VisitedSet;

/// Read-only access to a chip's color.
///
/// This is the seam between the search and whatever store owns the chips:
/// the board layer implements it directly, and a plain
/// `HashMap<ChipId, ChipColor>` works for tests and standalone callers.
pub trait ColorLookup {
    /// Returns the color of `chip`, or `None` if the chip is unknown.
    fn color_of(&self, chip: ChipId) -> Option<ChipColor>;
}

impl ColorLookup for HashMap<ChipId, ChipColor> {
    fn color_of(&self, chip: ChipId) -> Option<ChipColor> {
        self.get(&chip).copied()
    }
}

impl<T: ColorLookup + ?Sized> ColorLookup for &T {
    fn color_of(&self, chip: ChipId) -> Option<ChipColor> {
        (**self).color_of(chip)
    }
}

/// A maximal connected group of same-colored chips found from one seed.
///
/// Chips and their positions are stored in discovery order (the order the
/// flood fill accepted them into its frontier), which is deterministic for a
/// given board but not spatially meaningful. A combination never contains
/// duplicates and all of its chips share one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    chips: Vec<ChipId>,
    positions: Vec<Position>,
    color: ChipColor,
}

impl Combination {
    /// Returns the discovered chips in discovery order.
    #[must_use]
    pub fn chips(&self) -> &[ChipId] {
        &self.chips
    }

    /// Returns the chip positions, parallel to [`chips`](Self::chips).
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the color shared by every chip in the combination.
    #[must_use]
    pub const fn color(&self) -> ChipColor {
        self.color
    }

    /// Returns the number of chips in the combination.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// Returns `true` iff the combination contains no chips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Returns `true` iff the combination claims the slot at `pos`.
    #[must_use]
    pub fn contains_position(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// An error produced by the combination search.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum FindError {
    /// A chip present in the slot index has no color entry.
    ///
    /// The slot index and the color store are supposed to describe the same
    /// board snapshot; disagreement is a defect in the calling layer, not a
    /// condition the search can recover from.
    #[display("{chip} at {position} has no color entry")]
    #[from(skip)]
    UnknownChipColor {
        /// The chip without a color.
        chip: ChipId,
        /// The slot holding the chip.
        position: Position,
    },
    /// A direction mask could not be converted to an offset.
    #[display("direction conversion failed: {_0}")]
    Direction(DirectionError),
}

/// Finds the maximal connected group of chips sharing the seed's color.
///
/// The search is an iterative breadth-first flood fill over 4-connectivity:
/// a neighbor is expanded only when it is inside `size` (checked via
/// [`GridSize::neighbor_mask`] before any lookup), not yet in `visited`,
/// occupied in `slots`, and the seed's color. Every accepted position is
/// marked visited the moment it enters the frontier, so no position is ever
/// enqueued twice; `visited` only ever grows. Neighbor enumeration follows
/// [`Neighbors::SCAN_ORDER`], making discovery order reproducible.
///
/// Returns `Ok(None)` when there is nothing to find at `seed`: the position
/// is outside the grid, unoccupied, or already claimed by an earlier seed of
/// the same pass. Callers scanning a whole board skip such seeds and
/// continue.
///
/// Runs in O(width × height) time and auxiliary space in the worst case.
///
/// # Errors
///
/// Returns [`FindError::UnknownChipColor`] when a chip in the slot index has
/// no entry in `colors`.
pub fn find(
    slots: &SlotIndex,
    colors: &impl ColorLookup,
    size: GridSize,
    seed: Position,
    visited: &mut VisitedSet,
) -> Result<Option<Combination>, FindError> {
    if !size.contains(seed) || visited.contains(seed) {
        return Ok(None);
    }
    let Some(seed_chip) = slots.occupant(seed) else {
        return Ok(None);
    };
    let color = colors
        .color_of(seed_chip)
        .ok_or(FindError::UnknownChipColor {
            chip: seed_chip,
            position: seed,
        })?;

    visited.mark(seed);
    let mut chips = vec![seed_chip];
    let mut positions = vec![seed];
    let mut frontier = VecDeque::from([seed]);

    while let Some(pos) = frontier.pop_front() {
        let mask = size.neighbor_mask(pos);
        for dir in open_directions(mask) {
            let (dx, dy) = dir.to_offset()?;
            // The mask check keeps the step inside the grid; `shifted` can
            // only fail at the numeric limit of the coordinate space.
            let Some(next) = pos.shifted(dx, dy) else {
                continue;
            };
            if visited.contains(next) {
                continue;
            }
            let Some(chip) = slots.occupant(next) else {
                continue;
            };
            let chip_color = colors.color_of(chip).ok_or(FindError::UnknownChipColor {
                chip,
                position: next,
            })?;
            if chip_color != color {
                continue;
            }
            visited.mark(next);
            chips.push(chip);
            positions.push(next);
            frontier.push_back(next);
        }
    }

    log::trace!(
        "found {} connected {color} chip(s) from seed {seed}",
        chips.len()
    );
    Ok(Some(Combination {
        chips,
        positions,
        color,
    }))
}

/// Decomposes `mask` into single orthogonal directions in scan order.
fn open_directions(mask: Neighbors) -> ArrayVec<[Neighbors; 4]> {
    let mut dirs = ArrayVec::new();
    for dir in Neighbors::SCAN_ORDER {
        if mask.contains(dir) {
            dirs.push(dir);
        }
    }
    dirs
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::Field;

    #[test]
    fn test_find_simple_line_combinations() {
        let field = Field::parse(
            "YYY
             BBB
             RRR",
        );
        let mut visited = VisitedSet::new();

        for (y, color) in [
            (0, ChipColor::Red),
            (1, ChipColor::Blue),
            (2, ChipColor::Yellow),
        ] {
            let combination = field
                .find(Position::new(0, y), &mut visited)
                .unwrap()
                .unwrap();
            assert_eq!(combination.len(), 3);
            assert_eq!(combination.color(), color);
            for x in 0..3 {
                assert!(combination.contains_position(Position::new(x, y)));
            }
        }
    }

    #[test]
    fn test_find_one_big_combination() {
        let field = Field::parse(
            "RRR
             RRR
             RRR",
        );
        for seed in [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)] {
            let mut visited = VisitedSet::new();
            let combination = field.find(seed, &mut visited).unwrap().unwrap();
            assert_eq!(combination.len(), 9);
            assert_eq!(combination.color(), ChipColor::Red);
        }
    }

    #[test]
    fn test_find_isolated_chip() {
        // Red chips sit in three mutually non-adjacent cells.
        let field = Field::parse(
            "YRY
             BYB
             RYR",
        );
        let mut visited = VisitedSet::new();
        let combination = field
            .find(Position::new(0, 0), &mut visited)
            .unwrap()
            .unwrap();
        assert_eq!(combination.len(), 1);
        assert_eq!(combination.chips(), &[field.chip_at(Position::new(0, 0))]);
    }

    #[test]
    fn test_find_skips_missing_visited_and_out_of_bounds_seeds() {
        let field = Field::parse(
            "R.
             RR",
        );
        let mut visited = VisitedSet::new();

        // Unoccupied seed.
        assert_eq!(field.find(Position::new(1, 1), &mut visited), Ok(None));
        // Out-of-bounds seed.
        assert_eq!(field.find(Position::new(5, 5), &mut visited), Ok(None));

        // A seed claimed by a previous call in the same pass.
        let first = field.find(Position::new(0, 0), &mut visited).unwrap();
        assert_eq!(first.unwrap().len(), 3);
        assert_eq!(field.find(Position::new(1, 0), &mut visited), Ok(None));
    }

    #[test]
    fn test_find_on_empty_grid() {
        let field = Field::parse("...\n...\n...");
        let mut visited = VisitedSet::new();
        assert_eq!(field.find(Position::new(1, 1), &mut visited), Ok(None));
        assert!(visited.is_empty());
    }

    #[test]
    fn test_find_missing_color_entry_is_an_error() {
        let field = Field::parse("RR.");
        let slots = field.slots();
        let colors: HashMap<ChipId, ChipColor> = HashMap::new();
        let mut visited = VisitedSet::new();

        let err = find(slots, &colors, field.size(), Position::new(0, 0), &mut visited).unwrap_err();
        assert!(matches!(err, FindError::UnknownChipColor { .. }));
    }

    #[test]
    fn test_discovery_order_follows_scan_order() {
        // From the center of a plus shape, neighbors are discovered
        // left, bottom, right, top.
        let field = Field::parse(
            ".R.
             RRR
             .R.",
        );
        let mut visited = VisitedSet::new();
        let combination = field
            .find(Position::new(1, 1), &mut visited)
            .unwrap()
            .unwrap();
        assert_eq!(
            combination.positions(),
            &[
                Position::new(1, 1),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
            ]
        );
    }

    fn arb_field() -> impl Strategy<Value = Field> {
        (1..6_u32, 1..6_u32)
            .prop_flat_map(|(w, h)| {
                let cells = proptest::collection::vec(
                    proptest::option::of(0..3_u8),
                    (w * h) as usize,
                );
                (Just((w, h)), cells)
            })
            .prop_map(|((w, h), cells)| Field::from_cells(GridSize::new(w, h), &cells))
    }

    proptest! {
        #[test]
        fn prop_result_is_single_colored_and_duplicate_free(
            field in arb_field(),
            sx in 0..6_u32,
            sy in 0..6_u32,
        ) {
            let seed = Position::new(sx, sy);
            let mut visited = VisitedSet::new();
            if let Some(combination) = field.find(seed, &mut visited).unwrap() {
                let color = combination.color();
                for &chip in combination.chips() {
                    prop_assert_eq!(field.colors().color_of(chip), Some(color));
                }
                let mut chips = combination.chips().to_vec();
                chips.sort_unstable();
                chips.dedup();
                prop_assert_eq!(chips.len(), combination.len());
            }
        }

        #[test]
        fn prop_visited_grows_monotonically(
            field in arb_field(),
            seeds in proptest::collection::vec((0..6_u32, 0..6_u32), 1..10),
        ) {
            let mut visited = VisitedSet::new();
            for (sx, sy) in seeds {
                let before: Vec<Position> = field
                    .size()
                    .positions()
                    .filter(|pos| visited.contains(*pos))
                    .collect();
                field.find(Position::new(sx, sy), &mut visited).unwrap();
                for pos in before {
                    prop_assert!(visited.contains(pos));
                }
            }
        }

        #[test]
        fn prop_find_is_idempotent_with_fresh_visited(
            field in arb_field(),
            sx in 0..6_u32,
            sy in 0..6_u32,
        ) {
            let seed = Position::new(sx, sy);
            let mut first_visited = VisitedSet::new();
            let mut second_visited = VisitedSet::new();
            let first = field.find(seed, &mut first_visited).unwrap();
            let second = field.find(seed, &mut second_visited).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first_visited, second_visited);
        }
    }
}
