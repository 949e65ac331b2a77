//! Test utilities for combination detection.
//!
//! This module provides [`Field`], a board fixture built from a compact
//! string picture. It backs the tests of this crate and is exported so
//! downstream crates can use it in their own dev-dependencies.
//!
//! # Example
//!
//! ```
//! use chipmatch_core::Position;
//! use chipmatch_finder::{VisitedSet, testing::Field};
//!
//! let field = Field::parse(
//!     "BB.
//!      RRR",
//! );
//! let mut visited = VisitedSet::new();
//! let combination = field.find(Position::new(0, 0), &mut visited)?.unwrap();
//! assert_eq!(combination.len(), 3);
//! # Ok::<(), chipmatch_finder::FindError>(())
//! ```

use std::collections::HashMap;

use chipmatch_core::{ChipColor, ChipId, GridSize, Position, SlotIndex};

use crate::{Combination, FindError, VisitedSet, find};

/// A self-contained board fixture: a slot index, a color store, and the
/// grid bounds, all built from a string picture.
///
/// Each non-blank line of the picture is one row; the first line is the
/// topmost row (highest `y`). Cells are `R`, `G`, `B`, `Y`, `P` for the
/// palette colors and `.` for an empty slot. Rows may be indented; leading
/// and trailing whitespace is ignored.
///
/// # Panics
///
/// Construction panics on unknown cell characters or ragged row widths;
/// fixtures are test inputs and malformed ones are authoring mistakes.
#[derive(Debug, Clone)]
pub struct Field {
    slots: SlotIndex,
    colors: HashMap<ChipId, ChipColor>,
    size: GridSize,
}

impl Field {
    /// Builds a field from a string picture.
    #[must_use]
    pub fn parse(picture: &str) -> Self {
        let rows: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = u32::try_from(rows.len()).expect("picture has too many rows");
        let width = rows
            .first()
            .map_or(0, |row| u32::try_from(row.len()).expect("row too wide"));

        let mut field = Self {
            slots: SlotIndex::new(),
            colors: HashMap::new(),
            size: GridSize::new(width, height),
        };
        // The first picture line is the top row.
        for (row_index, row) in rows.iter().enumerate() {
            let row_width = u32::try_from(row.len()).expect("row too wide");
            assert_eq!(
                row_width, width,
                "ragged row {row_index:?} in field picture"
            );
            let row_y = u32::try_from(row_index).expect("picture has too many rows");
            let y = height - 1 - row_y;
            for (x, cell) in row.chars().enumerate() {
                let color = match cell {
                    '.' => continue,
                    'R' => ChipColor::Red,
                    'G' => ChipColor::Green,
                    'B' => ChipColor::Blue,
                    'Y' => ChipColor::Yellow,
                    'P' => ChipColor::Purple,
                    other => panic!("unknown cell character {other:?} in field picture"),
                };
                let x = u32::try_from(x).expect("row too wide");
                field.put(Position::new(x, y), color);
            }
        }
        field
    }

    /// Builds a field from row-major cells (`y = 0` first), where each cell
    /// is an optional palette index.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not cover `size` exactly.
    #[must_use]
    pub fn from_cells(size: GridSize, cells: &[Option<u8>]) -> Self {
        assert_eq!(
            u32::try_from(cells.len()).expect("too many cells"),
            size.width() * size.height(),
            "cell count does not match {size}"
        );
        let mut field = Self {
            slots: SlotIndex::new(),
            colors: HashMap::new(),
            size,
        };
        for (pos, cell) in size.positions().zip(cells) {
            if let Some(index) = cell {
                field.put(pos, ChipColor::from_index(*index));
            }
        }
        field
    }

    fn put(&mut self, pos: Position, color: ChipColor) {
        let chip = ChipId::new(u32::try_from(self.colors.len()).expect("too many chips"));
        self.slots
            .place(pos, chip)
            .expect("field picture placed two chips in one slot");
        self.colors.insert(chip, color);
    }

    /// Returns the slot index.
    #[must_use]
    pub fn slots(&self) -> &SlotIndex {
        &self.slots
    }

    /// Returns the chip color store.
    #[must_use]
    pub fn colors(&self) -> &HashMap<ChipId, ChipColor> {
        &self.colors
    }

    /// Returns the grid bounds.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the chip at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is empty.
    #[must_use]
    pub fn chip_at(&self, pos: Position) -> ChipId {
        self.slots
            .occupant(pos)
            .unwrap_or_else(|| panic!("no chip at {pos}"))
    }

    /// Runs [`find`] against this field.
    ///
    /// # Errors
    ///
    /// Propagates any [`FindError`] from the search.
    pub fn find(
        &self,
        seed: Position,
        visited: &mut VisitedSet,
    ) -> Result<Option<Combination>, FindError> {
        find(&self.slots, &self.colors, self.size, seed, visited)
    }
}
