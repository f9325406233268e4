use alloc::collections::BTreeSet;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Set of mine ids handed to board generation.
pub type MineIds = BTreeSet<CellId>;

/// Strategy that picks which cell ids carry a mine.
///
/// Board generation only ever talks to this trait, so tests and seeded boards can supply a
/// deterministic placement instead of a random one.
pub trait MineSampler {
    /// Returns `count` distinct ids in `1..=max`, including every id in `forced`.
    fn sample(&mut self, count: CellCount, max: CellCount, forced: &MineIds) -> Result<MineIds>;
}
