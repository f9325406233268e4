use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use minesweeper_core::*;

use command::Command;
use view::BoardView;

mod command;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Play Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// Side length of the square board
    #[arg(long, default_value_t = 10)]
    size: Coord,

    /// Number of mines to place
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a mine onto this cell id, can be repeated
    #[arg(long = "mine", value_name = "ID")]
    forced_mines: Vec<CellId>,

    /// Take the settings from a query string like `size=5&mineCount=4&forcedMinePositions=3`
    #[arg(long)]
    query: Option<String>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show the id of every hidden cell
    #[arg(long)]
    show_ids: bool,

    /// Print a JSON snapshot of the board after every command
    #[arg(long)]
    json: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let from_flags = || {
            Settings::new(self.size, self.mines).with_forced_mines(self.forced_mines.iter().copied())
        };

        match self.query.as_deref() {
            Some(query) => Settings::from_query(query).unwrap_or_else(|| {
                log::warn!("Could not parse settings from {:?}, using flags", query);
                from_flags()
            }),
            None => from_flags(),
        }
    }
}

struct Session<W> {
    engine: MinesweeperEngine,
    view: BoardView,
    json: bool,
    out: W,
}

impl<W: Write> Session<W> {
    fn render(&mut self) -> anyhow::Result<()> {
        self.view.render(self.engine.board(), &mut self.out)?;
        if self.json {
            serde_json::to_writer(&mut self.out, self.engine.board())?;
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Runs one command, `false` once the player wants to leave.
    fn apply(&mut self, command: Command) -> anyhow::Result<bool> {
        let changed = match command {
            Command::Reveal { id } => self.engine.reveal_field(id).map(|o| o.has_update()),
            Command::Flag { id } => self.engine.mark_field(id).map(|o| o.has_update()),
            Command::New => {
                self.engine.init_new_game().context("could not start a new game")?;
                self.view.reroll(&mut rand::rng());
                Ok(true)
            }
            Command::Ids => {
                self.view.toggle_ids();
                Ok(true)
            }
            Command::Quit => return Ok(false),
        };

        match changed {
            Ok(true) => self.render()?,
            Ok(false) => writeln!(self.out, "Nothing changed")?,
            Err(err @ GameError::CellNotFound(_)) => writeln!(self.out, "{err}")?,
            Err(err) => return Err(err.into()),
        }
        Ok(true)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let settings = args.settings();
    log::debug!("settings: {:?}", settings);

    let mut engine = MinesweeperEngine::new(seed);
    engine.set_settings(settings);
    engine
        .init_new_game()
        .context("could not start a new game")?;

    let mut session = Session {
        engine,
        view: BoardView::new(args.show_ids, &mut rand::rng()),
        json: args.json,
        out: io::stdout().lock(),
    };
    session.render()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;
        match Command::parse_line(&line) {
            Ok(Some(command)) => {
                if !session.apply(command)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => write!(session.out, "{err}")?,
        }
    }

    Ok(())
}
