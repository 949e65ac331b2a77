//! Combination detection for grid-based tile-matching boards.
//!
//! Given a read-only [`SlotIndex`](chipmatch_core::SlotIndex) and a chip
//! color accessor, this crate discovers connected groups of same-colored
//! chips (4-adjacency flood fill) and decides which of them qualify for
//! removal:
//!
//! - [`find`] - flood fill from one seed position, producing a
//!   [`Combination`].
//! - [`is_valid_combination`] - the removal policy (minimum size plus a
//!   straight-run shape requirement).
//! - [`analyze`] - a full-board pass sharing one [`VisitedSet`] across all
//!   seeds.
//!
//! # Examples
//!
//! ```
//! use chipmatch_finder::{analyze, testing::Field};
//!
//! let field = Field::parse(
//!     "YYY
//!      BBB
//!      RRR",
//! );
//! let combinations = analyze(field.slots(), field.colors(), field.size())?;
//! assert_eq!(combinations.len(), 3);
//! # Ok::<(), chipmatch_finder::FindError>(())
//! ```

pub mod combination;
pub mod pass;
pub mod testing;
pub mod validator;
pub mod visited;

// Re-export commonly used items
pub use self::{
    combination::{ColorLookup, Combination, FindError, find},
    pass::analyze,
    validator::{MIN_COMBINATION_LEN, is_valid_combination},
    visited::VisitedSet,
};
