//! Grid coordinates and board bounds.

use std::fmt::{self, Display};

use crate::Neighbors;

/// A slot address on the board.
///
/// Coordinates are 0-indexed, with `x` increasing rightward and `y`
/// increasing upward. Positions are plain values: equality and hashing are
/// by coordinate, and a position carries no knowledge of any particular
/// board's bounds.
///
/// # Examples
///
/// ```
/// use chipmatch_core::Position;
///
/// let a = Position::new(1, 2);
/// let b = Position::new(1, 3);
/// assert!(a.is_adjacent_to(b));
/// assert!(!a.is_adjacent_to(a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate (column).
    #[must_use]
    pub const fn x(self) -> u32 {
        self.x
    }

    /// Returns the y coordinate (row).
    #[must_use]
    pub const fn y(self) -> u32 {
        self.y
    }

    /// Offsets this position by `(dx, dy)`.
    ///
    /// Returns `None` when the result would leave the unsigned coordinate
    /// space. Callers that pre-check bounds with
    /// [`GridSize::neighbor_mask`] never observe `None` for unit offsets.
    #[must_use]
    pub const fn shifted(self, dx: i32, dy: i32) -> Option<Self> {
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };
        Some(Self::new(x, y))
    }

    /// Returns `true` iff `self` and `other` differ by exactly one unit on
    /// exactly one axis.
    ///
    /// Diagonal neighbors and identical positions are not adjacent. The
    /// relation is symmetric.
    #[must_use]
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Board bounds: a `width × height` rectangle of slots.
///
/// # Examples
///
/// ```
/// use chipmatch_core::{GridSize, Position};
///
/// let size = GridSize::new(4, 3);
/// assert!(size.contains(Position::new(3, 2)));
/// assert!(!size.contains(Position::new(4, 0)));
/// assert_eq!(size.positions().count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Creates a grid size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Returns `true` iff `pos` lies inside `[0, width) × [0, height)`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the orthogonal directions in which a unit step from `pos`
    /// stays inside the grid.
    ///
    /// LEFT requires `x > 0`, BOTTOM requires `y > 0`, RIGHT requires
    /// `x + 1 < width`, TOP requires `y + 1 < height`. Total for all
    /// inputs: positions outside the grid and zero-sized grids produce a
    /// (possibly empty) mask rather than an error.
    #[must_use]
    pub fn neighbor_mask(self, pos: Position) -> Neighbors {
        let mut mask = Neighbors::empty();
        if pos.x() > 0 {
            mask |= Neighbors::LEFT;
        }
        if pos.y() > 0 {
            mask |= Neighbors::BOTTOM;
        }
        if pos.x() < self.width.saturating_sub(1) {
            mask |= Neighbors::RIGHT;
        }
        if pos.y() < self.height.saturating_sub(1) {
            mask |= Neighbors::TOP;
        }
        mask
    }

    /// Returns an iterator over every position in the grid, row-major with
    /// `y` ascending in the outer loop and `x` in the inner loop.
    ///
    /// This is the canonical seed order for a full-board scan pass.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_adjacency_orthogonal_only() {
        let center = Position::new(2, 2);
        assert!(center.is_adjacent_to(Position::new(1, 2)));
        assert!(center.is_adjacent_to(Position::new(3, 2)));
        assert!(center.is_adjacent_to(Position::new(2, 1)));
        assert!(center.is_adjacent_to(Position::new(2, 3)));
        assert!(!center.is_adjacent_to(Position::new(3, 3)));
        assert!(!center.is_adjacent_to(Position::new(1, 1)));
        assert!(!center.is_adjacent_to(center));
        assert!(!center.is_adjacent_to(Position::new(4, 2)));
    }

    #[test]
    fn test_shifted_checked() {
        assert_eq!(Position::new(0, 0).shifted(-1, 0), None);
        assert_eq!(Position::new(0, 0).shifted(0, -1), None);
        assert_eq!(Position::new(1, 1).shifted(-1, 1), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_neighbor_mask_corners() {
        let size = GridSize::new(3, 3);
        assert_eq!(
            size.neighbor_mask(Position::new(0, 0)),
            Neighbors::RIGHT | Neighbors::TOP
        );
        assert_eq!(
            size.neighbor_mask(Position::new(2, 2)),
            Neighbors::LEFT | Neighbors::BOTTOM
        );
        assert_eq!(size.neighbor_mask(Position::new(1, 1)), Neighbors::ORTHOGONAL);
    }

    #[test]
    fn test_neighbor_mask_degenerate_grids() {
        assert_eq!(
            GridSize::new(0, 0).neighbor_mask(Position::new(0, 0)),
            Neighbors::empty()
        );
        assert_eq!(
            GridSize::new(1, 1).neighbor_mask(Position::new(0, 0)),
            Neighbors::empty()
        );
        // A 1-wide column only ever has vertical neighbors.
        let column = GridSize::new(1, 5);
        assert_eq!(
            column.neighbor_mask(Position::new(0, 2)),
            Neighbors::BOTTOM | Neighbors::TOP
        );
    }

    #[test]
    fn test_positions_order() {
        let collected: Vec<_> = GridSize::new(2, 2).positions().collect();
        assert_eq!(
            collected,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_adjacency_symmetric(ax in 0..100_u32, ay in 0..100_u32, bx in 0..100_u32, by in 0..100_u32) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(a.is_adjacent_to(b), b.is_adjacent_to(a));
            prop_assert!(!a.is_adjacent_to(a));
        }

        #[test]
        fn prop_neighbor_mask_stays_in_bounds(
            x in 0..64_u32,
            y in 0..64_u32,
            width in 1..64_u32,
            height in 1..64_u32,
        ) {
            let size = GridSize::new(width, height);
            let pos = Position::new(x % width, y % height);
            let mask = size.neighbor_mask(pos);
            for dir in mask.iter() {
                let (dx, dy) = dir.to_offset().unwrap();
                let next = pos.shifted(dx, dy).unwrap();
                prop_assert!(size.contains(next));
            }
        }
    }
}
