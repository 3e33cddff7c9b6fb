use std::fmt;

/// Custom error types for the game
#[derive(Debug)]
pub enum GameError {
    /// IO operation failed (terminal, stdin or stdout)
    IoError(std::io::Error),
    /// Configuration can not produce a playable grid
    InvalidConfig(String),
    /// Unknown command in a headless script
    InvalidCommand(String),
    /// Invalid direction string
    InvalidDirection(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IoError(err) => write!(f, "IO error: {}", err),
            GameError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            GameError::InvalidCommand(cmd) => write!(f, "Invalid command: {}", cmd),
            GameError::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, GameError>;
