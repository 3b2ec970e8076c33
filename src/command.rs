use std::str::FromStr;

use thiserror::Error;

use crate::board::TileId;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// Raw tile index, checked by the game rather than the parser.
    Play(u8),
    Jump(usize),
    Sort,
    Dump,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("'{0}' needs a move number")]
    MissingMoveNumber(String),

    #[error("'{0}' is not a move number")]
    InvalidMoveNumber(String),

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head.to_ascii_lowercase().as_str() {
            "jump" | "j" | "goto" => {
                let Some(arg) = words.next() else {
                    return Err(CommandError::MissingMoveNumber(head.to_string()));
                };
                if arg == "start" {
                    return Ok(Command::Jump(0));
                }
                arg.parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidMoveNumber(arg.to_string()))
            }
            "sort" | "s" => Ok(Command::Sort),
            "dump" => Ok(Command::Dump),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => match head.parse::<u8>() {
                Ok(index) => Ok(Command::Play(index)),
                Err(_) => TileId::from_str(head)
                    .map(|tile| Command::Play(tile.into()))
                    .map_err(|_| CommandError::Unknown(s.trim().to_string())),
            },
        }
    }
}

pub const HELP: &str = "\
commands:
  a1..c3 or 0..8   mark a tile (column letter, row number)
  jump N | j N     go back to move N (jump start for the empty board)
  sort             reverse the move list
  dump             print the session as RON
  help             show this list
  quit             leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tiles() {
        assert_eq!("b2".parse(), Ok(Command::Play(4)));
        assert_eq!("  7 ".parse(), Ok(Command::Play(7)));
        assert_eq!("9".parse(), Ok(Command::Play(9)));
    }

    #[test]
    fn parses_jumps() {
        assert_eq!("jump 3".parse(), Ok(Command::Jump(3)));
        assert_eq!("J 0".parse(), Ok(Command::Jump(0)));
        assert_eq!("goto start".parse(), Ok(Command::Jump(0)));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::MissingMoveNumber("jump".into()))
        );
        assert_eq!(
            "j -1".parse::<Command>(),
            Err(CommandError::InvalidMoveNumber("-1".into()))
        );
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("sort".parse(), Ok(Command::Sort));
        assert_eq!("DUMP".parse(), Ok(Command::Dump));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "d4".parse::<Command>(),
            Err(CommandError::Unknown("d4".into()))
        );
        assert_eq!(
            "undo".parse::<Command>(),
            Err(CommandError::Unknown("undo".into()))
        );
    }
}
