//! Rules engine for Minesweeper: board generation, mine placement, flood-fill reveal, flagging
//! and win/loss evaluation.
//!
//! A renderer owns one [`MinesweeperEngine`] per session, feeds it [`Settings`], calls
//! [`MinesweeperEngine::init_new_game`] and then forwards clicks to
//! [`MinesweeperEngine::reveal_field`] and [`MinesweeperEngine::mark_field`]. Everything the
//! renderer needs to draw is on the [`Board`].

#![no_std]

extern crate alloc;
#[cfg(test)]
#[macro_use]
extern crate std;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use sampler::*;
pub use settings::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod sampler;
mod settings;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}
