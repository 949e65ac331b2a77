//! Full-board scan pass.

use chipmatch_core::{GridSize, SlotIndex};

use crate::{ColorLookup, Combination, FindError, VisitedSet, find, is_valid_combination};

/// Scans the whole board and returns every combination that qualifies for
/// removal.
///
/// Seeds [`find`] once per position in [`GridSize::positions`] order with a
/// single shared [`VisitedSet`], so chips claimed by an earlier combination
/// in the same pass are skipped rather than re-expanded; each slot is
/// processed a bounded number of times and the pass runs in
/// O(width × height).
///
/// Combinations rejected by [`is_valid_combination`] are absent from the
/// report; the caller takes no action for them. The pass borrows `slots` and
/// `colors` read-only for its duration and the board must not be mutated
/// while it runs.
///
/// # Errors
///
/// Returns [`FindError::UnknownChipColor`] when a chip in the slot index has
/// no entry in `colors`.
///
/// # Examples
///
/// ```
/// use chipmatch_finder::{analyze, testing::Field};
///
/// let field = Field::parse(
///     "YYY
///      BBB
///      RRR",
/// );
/// let combinations = analyze(field.slots(), field.colors(), field.size())?;
/// assert_eq!(combinations.len(), 3);
/// # Ok::<(), chipmatch_finder::FindError>(())
/// ```
pub fn analyze(
    slots: &SlotIndex,
    colors: &impl ColorLookup,
    size: GridSize,
) -> Result<Vec<Combination>, FindError> {
    let mut visited = VisitedSet::new();
    let mut combinations = Vec::new();
    for seed in size.positions() {
        let Some(combination) = find(slots, colors, size, seed, &mut visited)? else {
            continue;
        };
        if is_valid_combination(&combination, size) {
            log::debug!(
                "combination of {} {} chip(s) seeded at {seed}",
                combination.len(),
                combination.color()
            );
            combinations.push(combination);
        }
    }
    Ok(combinations)
}
