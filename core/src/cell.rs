use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Hidden,
    Revealed,
    ExplodedMine,
    Flagged,
}

impl CellStatus {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Revealed and exploded cells never change again.
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Revealed | Self::ExplodedMine)
    }
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Snapshot of one board position. Copies handed out by the engine are detached from its state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub id: CellId,
    pub x: Coord,
    pub y: Coord,
    pub has_mine: bool,
    pub adjacent_mine_count: u8,
    pub status: CellStatus,
}

impl Cell {
    pub(crate) fn new(size: Coord, coords: Coord2, has_mine: bool) -> Self {
        Self {
            id: cell_id(size, coords),
            x: coords.0,
            y: coords.1,
            has_mine,
            adjacent_mine_count: 0,
            status: CellStatus::Hidden,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }
}
