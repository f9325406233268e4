use thiserror::Error;

use crate::{CellCount, CellId};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot place {mines} unique mines on a board of {cells} cells")]
    InvalidConfiguration { mines: CellCount, cells: CellCount },
    #[error("Gave up after {attempts} draws placing {requested} mines among {max} cells")]
    GenerationExhausted {
        attempts: CellCount,
        requested: CellCount,
        max: CellCount,
    },
    #[error("Could not find cell with id={0}")]
    CellNotFound(CellId),
    #[error("Cell id={id} has {neighbors} neighbors, expected between 3 and 8")]
    InternalConsistency { id: CellId, neighbors: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
