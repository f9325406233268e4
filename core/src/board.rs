use alloc::vec::Vec;
use ndarray::{Array2, ShapeError};
use serde::{Deserialize, Serialize, Serializer};

use crate::*;

/// Neighbour lookup on a square grid of cells.
pub trait NeighborhoodExt {
    /// Moore neighbourhood of `coords` in visitation order.
    ///
    /// Every cell on a board has between 3 and 8 neighbours; anything else means the grid was
    /// built wrong and fails with [`GameError::InternalConsistency`].
    fn checked_neighbors(&self, coords: Coord2) -> Result<Neighbors>;
}

impl NeighborhoodExt for Array2<Cell> {
    fn checked_neighbors(&self, coords: Coord2) -> Result<Neighbors> {
        // grids are only ever built from a `Coord` side
        let side = self.nrows() as Coord;
        let neighbors = neighbors_of(coords, side);
        if !(3..=8).contains(&neighbors.len()) {
            return Err(GameError::InternalConsistency {
                id: cell_id(side, coords),
                neighbors: neighbors.len(),
            });
        }
        Ok(neighbors)
    }
}

/// Everything a renderer needs to draw one game.
///
/// Cells are stored on an `[x, y]` grid in standard layout, so iterating the grid walks the
/// cells in id order. Serialized, `cells` is that flat sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BoardRepr")]
pub struct Board {
    pub(crate) size: Coord,
    #[serde(serialize_with = "serialize_cells")]
    pub(crate) cells: Array2<Cell>,
    pub(crate) mine_count: CellCount,
    pub(crate) mines_found_count: CellCount,
    pub(crate) mines_remaining_count: i64,
    pub(crate) is_game_over: bool,
    pub(crate) is_game_won: bool,
}

impl Board {
    /// Board with no cells, as seen before the first game is started.
    pub fn empty() -> Self {
        Self {
            size: 0,
            cells: Array2::from_shape_fn((0, 0), |_| Cell::new(0, (0, 0), false)),
            mine_count: 0,
            mines_found_count: 0,
            mines_remaining_count: 0,
            is_game_over: false,
            is_game_won: false,
        }
    }

    /// Places the mines picked by `sampler` and computes every adjacency count.
    pub fn generate<S: MineSampler>(settings: &Settings, sampler: &mut S) -> Result<Self> {
        let size = settings.size;
        let forced: MineIds = settings.forced_mine_positions.iter().copied().collect();
        let mines = sampler.sample(settings.mine_count, settings.total_cells(), &forced)?;

        if let Some(stray) = mines.iter().find(|&&id| cell_coords(size, id).is_none()) {
            log::warn!(
                "Mine id={} is outside of a {}x{} board and will not be placed",
                stray,
                size,
                size
            );
        }

        let side = usize::from(size);
        let cells = Array2::from_shape_fn((side, side), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            Cell::new(size, coords, mines.contains(&cell_id(size, coords)))
        });

        let mut board = Self {
            size,
            cells,
            mine_count: settings.mine_count,
            mines_found_count: 0,
            mines_remaining_count: settings.mine_count.into(),
            is_game_over: false,
            is_game_won: false,
        };
        board.calc_adjacent_mines()?;

        log::debug!(
            "New {}x{} board with {} mines",
            size,
            size,
            board.placed_mine_count()
        );
        Ok(board)
    }

    fn calc_adjacent_mines(&mut self) -> Result<()> {
        for x in 0..self.size {
            for y in 0..self.size {
                let count = self
                    .neighbors((x, y))?
                    .into_iter()
                    .filter(|&pos| self.cells[pos.to_nd_index()].has_mine)
                    .count();
                // at most 8 neighbours, checked above
                self.cells[(x, y).to_nd_index()].adjacent_mine_count = count as u8;
            }
        }
        Ok(())
    }

    /// See [`NeighborhoodExt::checked_neighbors`].
    pub fn neighbors(&self, coords: Coord2) -> Result<Neighbors> {
        self.cells.checked_neighbors(coords)
    }

    pub fn validate_id(&self, id: CellId) -> Result<Coord2> {
        cell_coords(self.size, id).ok_or(GameError::CellNotFound(id))
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    /// Cells in id order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        let coords = cell_coords(self.size, id)?;
        self.cells.get(coords.to_nd_index())
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Mine count the game was started with.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Mines actually present on the grid.
    pub fn placed_mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.has_mine).count() as CellCount
    }

    /// Number of flagged cells.
    pub fn mines_found_count(&self) -> CellCount {
        self.mines_found_count
    }

    /// May go negative when more cells are flagged than there are mines.
    pub fn mines_remaining_count(&self) -> i64 {
        self.mines_remaining_count
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn is_game_won(&self) -> bool {
        self.is_game_won
    }

    pub fn is_finished(&self) -> bool {
        self.is_game_over || self.is_game_won
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn update_mine_counters(&mut self) {
        let flagged = self
            .cells
            .iter()
            .filter(|cell| matches!(cell.status, CellStatus::Flagged))
            .count() as CellCount;
        self.mines_found_count = flagged;
        self.mines_remaining_count = i64::from(self.mine_count) - i64::from(flagged);
    }

    /// Won once every mined cell carries a flag. Flags on safe cells do not count against it.
    pub(crate) fn check_win_condition(&mut self) {
        let (flagged, mined) = self
            .cells
            .iter()
            .filter(|cell| cell.has_mine)
            .fold((0, 0), |(flagged, mined), cell| {
                let is_flagged = matches!(cell.status, CellStatus::Flagged);
                (flagged + usize::from(is_flagged), mined + 1)
            });
        self.is_game_won = flagged == mined;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

fn serialize_cells<S: Serializer>(
    cells: &Array2<Cell>,
    serializer: S,
) -> core::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(cells.iter())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardRepr {
    size: Coord,
    cells: Vec<Cell>,
    mine_count: CellCount,
    mines_found_count: CellCount,
    mines_remaining_count: i64,
    is_game_over: bool,
    is_game_won: bool,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ShapeError;

    fn try_from(repr: BoardRepr) -> core::result::Result<Self, Self::Error> {
        let side = usize::from(repr.size);
        Ok(Self {
            size: repr.size,
            cells: Array2::from_shape_vec((side, side), repr.cells)?,
            mine_count: repr.mine_count,
            mines_found_count: repr.mines_found_count,
            mines_remaining_count: repr.mines_remaining_count,
            is_game_over: repr.is_game_over,
            is_game_won: repr.is_game_won,
        })
    }
}
