//! Chip color palette.

use std::fmt::{self, Display};

/// A chip color from the closed game palette.
///
/// Levels usually restrict themselves to a prefix of the palette via their
/// color count; [`ChipColor::ALL`] lists the palette in index order.
///
/// # Examples
///
/// ```
/// use chipmatch_core::ChipColor;
///
/// assert_eq!(ChipColor::from_index(0), ChipColor::Red);
/// assert_eq!(ChipColor::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChipColor {
    /// A red chip.
    Red,
    /// A green chip.
    Green,
    /// A blue chip.
    Blue,
    /// A yellow chip.
    Yellow,
    /// A purple chip.
    Purple,
}

impl ChipColor {
    /// The full palette in index order.
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
    ];

    /// Returns the palette entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid palette index.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Red,
            1 => Self::Green,
            2 => Self::Blue,
            3 => Self::Yellow,
            4 => Self::Purple,
            _ => panic!("invalid chip color index: {index}"),
        }
    }

    /// Returns this color's palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Yellow => 3,
            Self::Purple => 4,
        }
    }
}

impl Display for ChipColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for color in ChipColor::ALL {
            assert_eq!(ChipColor::from_index(color.index()), color);
        }
    }

    #[test]
    #[should_panic(expected = "invalid chip color index")]
    fn test_rejects_out_of_palette_index() {
        let _ = ChipColor::from_index(5);
    }
}
