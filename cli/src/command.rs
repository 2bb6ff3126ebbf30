use sweeper_core::{Action, Coord, PointerButton, TILE_SIZE, translate_pointer};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  r x y           - reveal tile at column x, row y
  f x y           - toggle flag at column x, row y
  c px py [l|r]   - click at pixel position (tiles are 40 pixels wide)
  q               - give up and return to the menu
  h               - show this help";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'h' for help.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid coordinate '{0}'")]
    InvalidCoord(String),
    #[error("Click is outside the playable area")]
    OffGrid,
}

fn coord(text: &str) -> Result<Coord, CommandError> {
    text.parse()
        .map_err(|_| CommandError::InvalidCoord(text.to_string()))
}

fn pixel(text: &str) -> Result<u32, CommandError> {
    text.parse()
        .map_err(|_| CommandError::InvalidCoord(text.to_string()))
}

/// Parses one line typed during a game.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Err(CommandError::Usage("r x y | f x y | c px py [l|r] | q | h"));
    };

    match (first.to_lowercase().as_str(), &parts[1..]) {
        ("q" | "quit", _) => Ok(Command::Quit),
        ("h" | "help", _) => Ok(Command::Help),
        ("r" | "reveal", [x, y]) => Ok(Command::Act(Action::Reveal((coord(x)?, coord(y)?)))),
        ("r" | "reveal", _) => Err(CommandError::Usage("r x y")),
        ("f" | "flag", [x, y]) => Ok(Command::Act(Action::ToggleFlag((coord(x)?, coord(y)?)))),
        ("f" | "flag", _) => Err(CommandError::Usage("f x y")),
        ("c" | "click", [px, py, rest @ ..]) if rest.len() <= 1 => {
            let button = match rest.first().map(|b| b.to_lowercase()).as_deref() {
                None | Some("l" | "left") => PointerButton::Left,
                Some("r" | "right") => PointerButton::Right,
                Some(_) => return Err(CommandError::Usage("c px py [l|r]")),
            };
            translate_pointer((pixel(px)?, pixel(py)?), button, TILE_SIZE)
                .map(Command::Act)
                .ok_or(CommandError::OffGrid)
        }
        ("c" | "click", _) => Err(CommandError::Usage("c px py [l|r]")),
        (other, _) => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tile_commands() {
        assert_eq!(parse("r 3 4"), Ok(Command::Act(Action::Reveal((3, 4)))));
        assert_eq!(parse("F 0 2"), Ok(Command::Act(Action::ToggleFlag((0, 2)))));
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("help"), Ok(Command::Help));
    }

    #[test]
    fn clicks_go_through_pointer_translation() {
        assert_eq!(parse("c 85 10"), Ok(Command::Act(Action::Reveal((2, 0)))));
        assert_eq!(
            parse("click 0 79 r"),
            Ok(Command::Act(Action::ToggleFlag((0, 1))))
        );
        assert_eq!(parse("c 99999 0"), Err(CommandError::OffGrid));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse("r 1"), Err(CommandError::Usage("r x y")));
        assert_eq!(parse("r a 1"), Err(CommandError::InvalidCoord("a".into())));
        assert_eq!(parse("r -1 1"), Err(CommandError::InvalidCoord("-1".into())));
        assert_eq!(parse("boom"), Err(CommandError::Unknown("boom".into())));
        assert!(matches!(parse(""), Err(CommandError::Usage(_))));
    }
}
