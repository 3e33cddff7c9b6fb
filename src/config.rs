use crate::cli::Args;
use crate::error::{GameError, Result};
use std::ops::RangeInclusive;

/// Display characters, one per entity variant plus the empty cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: char,
    pub player: char,
    pub anthill: char,
    pub ant: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: '☐',
            player: 'P',
            anthill: 'A',
            ant: 'a',
        }
    }
}

impl Glyphs {
    fn all(&self) -> [char; 4] {
        [self.empty, self.player, self.anthill, self.ant]
    }
}

/// Immutable game settings, fixed for a whole run
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub glyphs: Glyphs,
    /// Chance per anthill per accepted player move
    pub spawn_probability: f64,
    /// How many anthills are placed at start
    pub anthills: RangeInclusive<usize>,
    /// Initial spawn stock of each anthill; `None` leaves anthills uncapped
    pub quantity: Option<RangeInclusive<u32>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 25,
            glyphs: Glyphs::default(),
            spawn_probability: 0.2,
            anthills: 1..=4,
            quantity: None,
        }
    }
}

impl GameConfig {
    /// Reject settings that can not produce a playable grid
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(GameError::InvalidConfig(format!(
                "spawn probability {} is outside [0, 1]",
                self.spawn_probability
            )));
        }
        if self.anthills.is_empty() {
            return Err(GameError::InvalidConfig(format!(
                "anthill range {}..={} is empty",
                self.anthills.start(),
                self.anthills.end()
            )));
        }
        if let Some(quantity) = &self.quantity {
            if quantity.is_empty() {
                return Err(GameError::InvalidConfig(format!(
                    "quantity range {}..={} is empty",
                    quantity.start(),
                    quantity.end()
                )));
            }
        }
        // player + every anthill need their own cell
        let cells = self.rows.saturating_mul(self.cols);
        if self.anthills.end().saturating_add(1) > cells {
            return Err(GameError::InvalidConfig(format!(
                "{} anthills and a player do not fit on {} cells",
                self.anthills.end(),
                cells
            )));
        }
        let glyphs = self.glyphs.all();
        for (i, a) in glyphs.iter().enumerate() {
            if glyphs[i + 1..].contains(a) {
                return Err(GameError::InvalidConfig(format!(
                    "glyph '{}' is used twice",
                    a
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<&Args> for GameConfig {
    type Error = GameError;

    fn try_from(args: &Args) -> Result<Self> {
        let config = Self {
            rows: args.rows,
            cols: args.cols,
            glyphs: Glyphs {
                empty: args.empty_glyph,
                player: args.player_glyph,
                anthill: args.anthill_glyph,
                ant: args.ant_glyph,
            },
            spawn_probability: args.spawn_probability,
            anthills: args.min_anthills..=args.max_anthills,
            quantity: args.max_quantity.map(|max| args.min_quantity..=max),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.rows, config.cols), (10, 25));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = GameConfig {
            spawn_probability: 1.5,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_overcrowded_grid() {
        let config = GameConfig {
            rows: 2,
            cols: 2,
            anthills: 1..=4,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_duplicate_glyphs() {
        let config = GameConfig {
            glyphs: Glyphs {
                ant: 'A',
                ..Glyphs::default()
            },
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "anthill",
            "--rows",
            "5",
            "--cols",
            "7",
            "--max-anthills",
            "2",
            "--spawn-probability",
            "1.0",
        ]);
        let config = GameConfig::try_from(&args).unwrap();

        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 7);
        assert_eq!(config.anthills, 1..=2);
        assert_eq!(config.spawn_probability, 1.0);
        assert_eq!(config.glyphs, Glyphs::default());
        assert_eq!(config.quantity, None);
    }

    #[test]
    fn test_from_args_opt_in_quantity_cap() {
        let args = Args::parse_from(["anthill", "--min-quantity", "2", "--max-quantity", "6"]);
        let config = GameConfig::try_from(&args).unwrap();
        assert_eq!(config.quantity, Some(2..=6));

        let args = Args::parse_from(["anthill", "--min-quantity", "5", "--max-quantity", "1"]);
        assert!(GameConfig::try_from(&args).is_err());
    }

    #[test]
    fn test_from_args_rejects_inverted_range() {
        let args = Args::parse_from(["anthill", "--min-anthills", "3", "--max-anthills", "2"]);
        assert!(GameConfig::try_from(&args).is_err());
    }
}
