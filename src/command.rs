use crate::direction::Direction;
use crate::error::GameError;
use std::str::FromStr;

/// Everything the game loop accepts from the outside
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Quit,
}

impl Command {
    /// Direction of a move command, `None` for quit
    #[inline]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::Quit => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Command::MoveUp,
            Direction::Down => Command::MoveDown,
            Direction::Left => Command::MoveLeft,
            Direction::Right => Command::MoveRight,
        }
    }
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(direction) = s.parse::<Direction>() {
            return Ok(direction.into());
        }
        match s.to_ascii_lowercase().as_str() {
            "w" => Ok(Command::MoveUp),
            "s" => Ok(Command::MoveDown),
            "a" => Ok(Command::MoveLeft),
            "d" => Ok(Command::MoveRight),
            "q" | "quit" | "esc" => Ok(Command::Quit),
            _ => Err(GameError::InvalidCommand(s.to_string())),
        }
    }
}
