use std::io::{self, Write};

use minesweeper_core::*;
use rand::Rng;
use rand::seq::IndexedRandom;

const START_LINES: [&str; 5] = [
    "What are you waitin' for? Christmas?!",
    "Do, or do not. There is no try.",
    "Hmm, I'm going in!",
    "You wanna dance?",
    "Let's rock!",
];

const WON_LINES: [&str; 5] = [
    "Hail to the King, Baby!",
    "Lucky son of a bitch.",
    "Aahhh... much better.",
    "Yeah, piece of cake!",
    "Shake it, baby!",
];

const GAME_OVER_LINES: [&str; 5] = [
    "Are you crazy? Is that your problem?",
    "Heh, heh, heh... What a mess!",
    "Damn, that was annoying!",
    "Ugh, this sucks.",
    "Holy cow!",
];

#[derive(Copy, Clone, Debug, PartialEq)]
struct StatusLines {
    start: &'static str,
    won: &'static str,
    game_over: &'static str,
}

impl StatusLines {
    fn pick<R: Rng>(rng: &mut R) -> Self {
        Self {
            start: START_LINES.choose(rng).copied().unwrap_or_default(),
            won: WON_LINES.choose(rng).copied().unwrap_or_default(),
            game_over: GAME_OVER_LINES.choose(rng).copied().unwrap_or_default(),
        }
    }
}

/// Text renderer for a [`Board`]. Rows run along `x`, so reading left to right follows the ids.
#[derive(Clone, Debug)]
pub(crate) struct BoardView {
    show_ids: bool,
    lines: StatusLines,
}

impl BoardView {
    pub(crate) fn new<R: Rng>(show_ids: bool, rng: &mut R) -> Self {
        Self {
            show_ids,
            lines: StatusLines::pick(rng),
        }
    }

    /// Picks fresh status lines, done for every new game.
    pub(crate) fn reroll<R: Rng>(&mut self, rng: &mut R) {
        self.lines = StatusLines::pick(rng);
    }

    pub(crate) fn toggle_ids(&mut self) {
        self.show_ids = !self.show_ids;
    }

    fn headline(&self, board: &Board) -> (&'static str, &'static str) {
        if board.is_game_over() {
            ("GAME OVER", self.lines.game_over)
        } else if board.is_game_won() {
            ("YOU WON", self.lines.won)
        } else {
            ("Minesweeper", self.lines.start)
        }
    }

    fn glyph(&self, cell: &Cell, board: &Board) -> String {
        use CellStatus::*;
        match cell.status {
            Hidden if board.is_game_over() && cell.has_mine => "x".into(),
            Hidden if self.show_ids => cell.id.to_string(),
            Hidden => ".".into(),
            Flagged => "F".into(),
            ExplodedMine => "*".into(),
            Revealed if cell.adjacent_mine_count == 0 => " ".into(),
            Revealed => cell.adjacent_mine_count.to_string(),
        }
    }

    pub(crate) fn render<W: Write>(&self, board: &Board, out: &mut W) -> io::Result<()> {
        let (headline, subline) = self.headline(board);
        writeln!(out, "{headline}")?;
        writeln!(out, "{subline}")?;
        writeln!(
            out,
            "Mines found: {}, remaining: {}",
            board.mines_found_count(),
            board.mines_remaining_count()
        )?;

        let size = board.size();
        if size == 0 {
            return Ok(());
        }

        let id_width = board.total_cells().to_string().len();
        let width = id_width.max(2) + 1;

        write!(out, "{:>id_width$} |", "")?;
        for y in 0..size {
            write!(out, "{:>width$}", format!("+{y}"))?;
        }
        writeln!(out)?;

        for x in 0..size {
            write!(out, "{:>id_width$} |", cell_id(size, (x, 0)))?;
            for y in 0..size {
                if let Some(cell) = board.cell_at((x, y)) {
                    write!(out, "{:>width$}", self.glyph(cell, board))?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
