use clap::Parser;
use minesweeper_core::CellId;

/// One line of player input.
#[derive(Parser, Debug, PartialEq)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub(crate) enum Command {
    /// Reveal a cell (left click)
    #[command(visible_alias = "r")]
    Reveal { id: CellId },
    /// Toggle the flag on a cell (right click)
    #[command(visible_alias = "f")]
    Flag { id: CellId },
    /// Start a new game with the same settings
    #[command(visible_alias = "n")]
    New,
    /// Toggle showing cell ids on the board
    Ids,
    /// Leave the game
    #[command(visible_alias = "q", alias = "exit")]
    Quit,
}

impl Command {
    /// Parses a line, `Ok(None)` for blank input.
    pub(crate) fn parse_line(line: &str) -> Result<Option<Self>, clap::Error> {
        let mut words = line.split_whitespace().peekable();
        if words.peek().is_none() {
            return Ok(None);
        }
        Self::try_parse_from(words).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(
            Command::parse_line("reveal 12").unwrap(),
            Some(Command::Reveal { id: 12 })
        );
        assert_eq!(
            Command::parse_line("  f 3 ").unwrap(),
            Some(Command::Flag { id: 3 })
        );
        assert_eq!(Command::parse_line("new").unwrap(), Some(Command::New));
        assert_eq!(Command::parse_line("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(Command::parse_line("   ").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse_line("reveal").is_err());
        assert!(Command::parse_line("reveal abc").is_err());
        assert!(Command::parse_line("dance").is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Command::command().debug_assert();
    }
}
