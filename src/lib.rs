//! # Anthill
//!
//! A turn-based chase on a terminal grid: the player walks around while
//! anthills release ants that run away from them.
//!
//! This library provides the grid occupancy model, movement rules, the ants'
//! flee heuristic, anthill spawning and the turn loop. Keyboard and screen
//! handling live behind the [`frontend::Frontend`] trait.

pub mod cli;
pub mod command;
pub mod config;
pub mod direction;
pub mod entity;
pub mod error;
pub mod frontend;
pub mod grid;
pub mod logging;
pub mod simulation;

pub use cli::Args;
pub use command::Command;
pub use config::{GameConfig, Glyphs};
pub use direction::Direction;
pub use entity::{Entity, EntityId, EntityKind, Position};
pub use error::{GameError, Result};
pub use grid::Grid;
pub use simulation::{Game, MoveOutcome, Phase, Summary};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Command, Direction, Entity, EntityId, EntityKind, Game, GameConfig, GameError,
        Glyphs, Grid, MoveOutcome, Phase, Position, Result, Summary,
    };
}
