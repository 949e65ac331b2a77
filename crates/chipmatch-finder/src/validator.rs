//! The combination removal policy.

use std::collections::HashSet;

use chipmatch_core::{GridSize, Position};

use crate::Combination;

/// The minimum number of chips a combination needs to qualify for removal.
pub const MIN_COMBINATION_LEN: usize = 3;

/// Decides whether a discovered combination qualifies for removal.
///
/// Two rules apply:
///
/// 1. A combination with fewer than [`MIN_COMBINATION_LEN`] chips never
///    qualifies.
/// 2. The combination must contain a straight run: at least three of its
///    positions consecutive in one row or one column. A connected group can
///    meet the size threshold without containing any run (an L-triomino is
///    the smallest example); such groups are "three groups but no
///    combination" and do not qualify.
///
/// Pure predicate: never fails and has no side effects. `size` bounds the
/// board the combination was found on; every position is expected to lie
/// inside it.
///
/// # Examples
///
/// ```
/// use chipmatch_core::Position;
/// use chipmatch_finder::{VisitedSet, is_valid_combination, testing::Field};
///
/// let field = Field::parse(
///     "BBB
///      RRB",
/// );
/// let mut visited = VisitedSet::new();
/// let reds = field.find(Position::new(0, 0), &mut visited)?.unwrap();
/// assert!(!is_valid_combination(&reds, field.size()));
/// let blues = field.find(Position::new(2, 0), &mut visited)?.unwrap();
/// assert!(is_valid_combination(&blues, field.size()));
/// # Ok::<(), chipmatch_finder::FindError>(())
/// ```
#[must_use]
pub fn is_valid_combination(combination: &Combination, size: GridSize) -> bool {
    if combination.len() < MIN_COMBINATION_LEN {
        return false;
    }
    debug_assert!(
        combination.positions().iter().all(|pos| size.contains(*pos)),
        "combination escapes the {size} grid"
    );

    let occupied: HashSet<Position> = combination.positions().iter().copied().collect();
    combination.positions().iter().any(|pos| {
        let horizontal = (1..MIN_COMBINATION_LEN as i32)
            .all(|step| pos.shifted(step, 0).is_some_and(|p| occupied.contains(&p)));
        let vertical = (1..MIN_COMBINATION_LEN as i32)
            .all(|step| pos.shifted(0, step).is_some_and(|p| occupied.contains(&p)));
        horizontal || vertical
    })
}
