//! Direction masks for grid adjacency.

bitflags::bitflags! {
    /// A set of compass directions around a grid slot.
    ///
    /// The mask models all eight directions because diagonal adjacency is
    /// used by board features outside the combination search; the search
    /// itself only ever consults the orthogonal four (see
    /// [`Neighbors::ORTHOGONAL`] and [`Neighbors::SCAN_ORDER`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use chipmatch_core::Neighbors;
    ///
    /// let mask = Neighbors::LEFT | Neighbors::TOP;
    /// assert!(mask.contains(Neighbors::LEFT));
    /// assert_eq!(Neighbors::RIGHT.to_offset(), Ok((1, 0)));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Neighbors: u8 {
        /// The slot directly above (`y + 1`).
        const TOP = 0b0000_0001;
        /// The slot above and to the right.
        const TOP_RIGHT = 0b0000_0010;
        /// The slot directly to the right (`x + 1`).
        const RIGHT = 0b0000_0100;
        /// The slot below and to the right.
        const BOTTOM_RIGHT = 0b0000_1000;
        /// The slot directly below (`y - 1`).
        const BOTTOM = 0b0001_0000;
        /// The slot below and to the left.
        const BOTTOM_LEFT = 0b0010_0000;
        /// The slot directly to the left (`x - 1`).
        const LEFT = 0b0100_0000;
        /// The slot above and to the left.
        const TOP_LEFT = 0b1000_0000;
    }
}

impl Neighbors {
    /// The four orthogonal directions.
    pub const ORTHOGONAL: Self = Self::LEFT
        .union(Self::BOTTOM)
        .union(Self::RIGHT)
        .union(Self::TOP);

    /// The fixed orthogonal enumeration order of the combination search.
    ///
    /// Traversal (and therefore result) order depends on this order; it is
    /// not semantically meaningful to callers, but it is kept stable so
    /// search results are reproducible.
    pub const SCAN_ORDER: [Self; 4] = [Self::LEFT, Self::BOTTOM, Self::RIGHT, Self::TOP];

    /// Converts a single direction into a coordinate delta `(dx, dy)`.
    ///
    /// The empty mask maps to `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::Composite`] when more than one direction
    /// bit is set. Composite masks must be decomposed (e.g. with
    /// [`Neighbors::iter`]) before conversion; passing one anyway is a
    /// caller bug, not a recoverable runtime condition.
    pub fn to_offset(self) -> Result<(i32, i32), DirectionError> {
        if self.is_empty() {
            return Ok((0, 0));
        }
        if self.bits().count_ones() > 1 {
            return Err(DirectionError::Composite(self));
        }
        let dx = i32::from(self.intersects(Self::TOP_RIGHT | Self::RIGHT | Self::BOTTOM_RIGHT))
            - i32::from(self.intersects(Self::TOP_LEFT | Self::LEFT | Self::BOTTOM_LEFT));
        let dy = i32::from(self.intersects(Self::TOP_LEFT | Self::TOP | Self::TOP_RIGHT))
            - i32::from(self.intersects(Self::BOTTOM_LEFT | Self::BOTTOM | Self::BOTTOM_RIGHT));
        Ok((dx, dy))
    }
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::empty()
    }
}

/// An error produced when converting a direction mask to an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DirectionError {
    /// More than one direction bit was set.
    #[display("composite direction mask {_0:?} cannot be converted to a single offset")]
    Composite(#[error(not(source))] Neighbors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_exact() {
        assert_eq!(Neighbors::empty().to_offset(), Ok((0, 0)));
        assert_eq!(Neighbors::TOP.to_offset(), Ok((0, 1)));
        assert_eq!(Neighbors::TOP_RIGHT.to_offset(), Ok((1, 1)));
        assert_eq!(Neighbors::RIGHT.to_offset(), Ok((1, 0)));
        assert_eq!(Neighbors::BOTTOM_RIGHT.to_offset(), Ok((1, -1)));
        assert_eq!(Neighbors::BOTTOM.to_offset(), Ok((0, -1)));
        assert_eq!(Neighbors::BOTTOM_LEFT.to_offset(), Ok((-1, -1)));
        assert_eq!(Neighbors::LEFT.to_offset(), Ok((-1, 0)));
        assert_eq!(Neighbors::TOP_LEFT.to_offset(), Ok((-1, 1)));
    }

    #[test]
    fn test_composite_mask_rejected() {
        let mask = Neighbors::LEFT | Neighbors::TOP;
        assert_eq!(mask.to_offset(), Err(DirectionError::Composite(mask)));
        assert!(Neighbors::ORTHOGONAL.to_offset().is_err());
    }

    #[test]
    fn test_scan_order_is_orthogonal() {
        let mut union = Neighbors::empty();
        for dir in Neighbors::SCAN_ORDER {
            assert_eq!(dir.bits().count_ones(), 1);
            union |= dir;
        }
        assert_eq!(union, Neighbors::ORTHOGONAL);
    }
}
