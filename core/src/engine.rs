use alloc::vec;

use crate::*;

/// Owns the settings and the board of a single game session.
///
/// Commands take `&mut self` and run to completion, so one engine serves exactly one session.
/// Reads hand out either a shared reference or an owned [`Board`] snapshot, neither of which can
/// be used to change the game.
#[derive(Clone, Debug)]
pub struct MinesweeperEngine<S = RandomSampler> {
    settings: Settings,
    board: Board,
    sampler: S,
}

impl MinesweeperEngine<RandomSampler> {
    /// Engine placing mines at random, reproducibly for a given `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_sampler(RandomSampler::new(seed))
    }
}

impl<S: MineSampler> MinesweeperEngine<S> {
    pub fn with_sampler(sampler: S) -> Self {
        Self {
            settings: Settings::default(),
            board: Board::empty(),
            sampler,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merges `patch` into the current settings. Nothing is validated until the next
    /// [`init_new_game`](Self::init_new_game).
    pub fn set_settings(&mut self, patch: impl Into<SettingsPatch>) {
        self.settings.merge(patch.into());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Detached copy of the current board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn cell(&self, id: CellId) -> Result<Cell> {
        self.board.cell(id).copied().ok_or(GameError::CellNotFound(id))
    }

    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    /// Replaces the board with a freshly generated one. On error the previous board is kept.
    pub fn init_new_game(&mut self) -> Result<()> {
        self.board = Board::generate(&self.settings, &mut self.sampler)?;
        Ok(())
    }

    pub fn reveal_field(&mut self, id: CellId) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        if self.board.is_finished() {
            log::debug!("Ignoring reveal of id={} on a finished game", id);
            return Ok(NoChange);
        }

        let coords = self.board.validate_id(id)?;
        let cell = self.board.cell_mut(coords);

        if !cell.status.is_hidden() {
            return Ok(NoChange);
        }

        if cell.has_mine {
            cell.status = CellStatus::ExplodedMine;
            self.board.is_game_over = true;
            log::info!("Mine hit at id={}, game over", id);
            return Ok(HitMine);
        }

        let revealed = self.flood_reveal(coords)?;
        log::trace!("Revealing id={} opened {} cells", id, revealed);
        Ok(Revealed)
    }

    /// Reveals `start` and, through every zero-count cell reached, its non-mined neighbours.
    ///
    /// Depth-first with an explicit stack. Neighbours are pushed in reverse so they pop in
    /// visitation order, which keeps the order identical to the recursive formulation.
    fn flood_reveal(&mut self, start: Coord2) -> Result<CellCount> {
        let mut revealed = 0;
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = self.board.cell_mut(coords);
            if !cell.status.is_hidden() {
                continue;
            }

            cell.status = CellStatus::Revealed;
            revealed += 1;

            if cell.adjacent_mine_count == 0 {
                let neighbors = self.board.neighbors(coords)?;
                to_visit.extend(
                    neighbors
                        .into_iter()
                        .rev()
                        .filter(|&pos| !self.board.cells[pos.to_nd_index()].has_mine),
                );
            }
        }

        Ok(revealed)
    }

    pub fn mark_field(&mut self, id: CellId) -> Result<MarkOutcome> {
        use CellStatus::*;
        use MarkOutcome::*;

        if self.board.is_finished() {
            log::debug!("Ignoring mark of id={} on a finished game", id);
            return Ok(NoChange);
        }

        let coords = self.board.validate_id(id)?;
        let cell = self.board.cell_mut(coords);

        Ok(match cell.status {
            Hidden => {
                cell.status = Flagged;
                self.board.update_mine_counters();
                self.board.check_win_condition();
                if self.board.is_game_won {
                    log::info!("All mines flagged, game won");
                }
                Changed
            }
            Flagged => {
                cell.status = Hidden;
                self.board.update_mine_counters();
                Changed
            }
            Revealed | ExplodedMine => NoChange,
        })
    }
}

impl Default for MinesweeperEngine<RandomSampler> {
    fn default() -> Self {
        Self::new(0)
    }
}
