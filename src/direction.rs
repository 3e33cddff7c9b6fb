use crate::error::GameError;
use std::str::FromStr;

/// 4 fixed directions on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl FromStr for Direction {
    type Err = GameError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_bytes() {
            b"up" => Ok(Direction::Up),
            b"down" => Ok(Direction::Down),
            b"left" => Ok(Direction::Left),
            b"right" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl Direction {
    /// All possible directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta of one step
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_names() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_str().parse::<Direction>().unwrap(), dir);
        }
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert!(matches!(err, GameError::InvalidDirection(ref s) if s == "north"));
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }
}
