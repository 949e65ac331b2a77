//! The per-pass visited set.

use std::collections::HashSet;

use chipmatch_core::Position;

/// The set of positions already claimed during one scan pass.
///
/// One `VisitedSet` is shared across every seed of a pass so that chips
/// claimed by an earlier combination are never re-expanded. Entries are only
/// ever added during a pass; the set must be cleared (or replaced) before
/// the next pass over a mutated board, since stale entries would suppress
/// rediscovery.
///
/// # Examples
///
/// ```
/// use chipmatch_core::Position;
/// use chipmatch_finder::VisitedSet;
///
/// let mut visited = VisitedSet::new();
/// assert!(visited.mark(Position::new(0, 0)));
/// assert!(!visited.mark(Position::new(0, 0)));
/// assert!(visited.contains(Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    positions: HashSet<Position>,
}

impl VisitedSet {
    /// Creates an empty visited set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `pos` as visited, returning `true` if it was not already.
    pub fn mark(&mut self, pos: Position) -> bool {
        self.positions.insert(pos)
    }

    /// Returns `true` iff `pos` has been visited.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Returns the number of visited positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` iff nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Forgets every visited position, readying the set for a new pass.
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
