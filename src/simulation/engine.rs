use crate::command::Command;
use crate::config::GameConfig;
use crate::entity::{Entity, EntityId, EntityKind, Position};
use crate::error::{GameError, Result};
use crate::frontend::Frontend;
use crate::grid::{Grid, Rows};
use crate::simulation::flee;
use crate::simulation::movement::{self, MoveOutcome};
use crate::simulation::spawner::Spawner;
use colored::Colorize;
use tracing::{debug, info, trace};

/// Where the game loop currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Resolving,
    Rendering,
    Exited,
}

/// Counters kept over a whole run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub turns: u64,
    pub player_moves: u64,
    pub ants_spawned: u64,
}

/// What happened during one resolved turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: MoveOutcome,
    pub spawned: Vec<EntityId>,
}

/// Owns the grid and drives the turn loop
pub struct Game {
    config: GameConfig,
    grid: Grid,
    player: EntityId,
    anthills: Vec<EntityId>,
    ants: Vec<EntityId>,
    spawner: Spawner,
    rng: fastrand::Rng,
    phase: Phase,
    summary: Summary,
}

impl Game {
    /// Random layout: player on any cell, anthills on distinct free cells
    pub fn new(config: GameConfig, mut rng: fastrand::Rng) -> Result<Self> {
        config.validate()?;

        let player = Position::new(rng.usize(..config.rows), rng.usize(..config.cols));
        let count = rng.usize(config.anthills.clone());

        let mut game = Self::empty(config, player, rng)?;
        for _ in 0..count {
            let Some(pos) = game.grid.random_empty_cell(&mut game.rng) else {
                break;
            };
            let quantity = game.config.quantity.clone().map(|range| game.rng.u32(range));
            game.add_anthill(pos, quantity)?;
        }

        info!(
            rows = game.config.rows,
            cols = game.config.cols,
            anthills = game.anthills.len(),
            "game started"
        );
        Ok(game)
    }

    /// Fixed layout, for scripted scenarios
    pub fn with_layout(
        config: GameConfig,
        player: Position,
        anthills: &[(Position, Option<u32>)],
        rng: fastrand::Rng,
    ) -> Result<Self> {
        config.validate()?;
        let mut game = Self::empty(config, player, rng)?;
        for &(pos, quantity) in anthills {
            game.add_anthill(pos, quantity)?;
        }
        Ok(game)
    }

    fn empty(config: GameConfig, player: Position, rng: fastrand::Rng) -> Result<Self> {
        let mut grid = Grid::new(config.rows, config.cols, config.glyphs.empty);
        let player = grid
            .place(Entity::new(EntityKind::Player, player, config.glyphs.player))
            .ok_or_else(|| {
                GameError::InvalidConfig(format!(
                    "player at ({}, {}) is off the grid",
                    player.row, player.col
                ))
            })?;
        let spawner = Spawner::new(config.spawn_probability, config.glyphs.ant);

        Ok(Self {
            config,
            grid,
            player,
            anthills: Vec::new(),
            ants: Vec::new(),
            spawner,
            rng,
            phase: Phase::AwaitingInput,
            summary: Summary::default(),
        })
    }

    fn add_anthill(&mut self, pos: Position, quantity: Option<u32>) -> Result<EntityId> {
        let hill = Entity::new(
            EntityKind::Anthill { quantity },
            pos,
            self.config.glyphs.anthill,
        );
        let id = self.grid.place(hill).ok_or_else(|| {
            GameError::InvalidConfig(format!(
                "anthill at ({}, {}) is off the grid or on a taken cell",
                pos.row, pos.col
            ))
        })?;
        self.anthills.push(id);
        Ok(id)
    }

    /// Drop an ant onto a free cell outside of the spawn cycle
    pub fn insert_ant(&mut self, pos: Position) -> Option<EntityId> {
        if !self.grid.is_free(pos) {
            return None;
        }
        let id = self
            .grid
            .place(Entity::new(EntityKind::Ant, pos, self.config.glyphs.ant))?;
        self.ants.push(id);
        Some(id)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    #[inline]
    pub fn player_pos(&self) -> Position {
        self.grid.entity(self.player).pos
    }

    pub fn anthills(&self) -> &[EntityId] {
        &self.anthills
    }

    pub fn ants(&self) -> &[EntityId] {
        &self.ants
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Current frame
    pub fn snapshot(&self) -> Rows<'_> {
        self.grid.render()
    }

    /// Resolve one command. Returns `None` once the game has exited.
    ///
    /// Moves the player; if that worked every anthill gets a spawn trial;
    /// then every ant that was on the grid before this turn flees once.
    /// Leaves the loop in `Rendering`.
    pub fn resolve(&mut self, command: Command) -> Option<TurnReport> {
        if self.phase == Phase::Exited {
            return None;
        }
        self.phase = Phase::Resolving;

        let Some(direction) = command.direction() else {
            self.phase = Phase::Exited;
            info!(turns = self.summary.turns, "game exited");
            return None;
        };
        self.summary.turns += 1;

        let player = movement::try_move(&mut self.grid, self.player, direction);
        debug!(direction = direction.as_str(), outcome = ?player, "player move");

        let fleeing = self.ants.len();
        let mut spawned = Vec::new();
        if player.is_moved() {
            self.summary.player_moves += 1;
            let target = self.player_pos();
            for &hill in &self.anthills {
                if let Some(ant) =
                    self.spawner
                        .maybe_spawn(&mut self.grid, hill, target, &mut self.rng)
                {
                    spawned.push(ant);
                }
            }
            self.summary.ants_spawned += spawned.len() as u64;
        }

        let target = self.player_pos();
        for &ant in &self.ants[..fleeing] {
            if let Some(to) = flee::flee(&mut self.grid, ant, target, &mut self.rng) {
                trace!(ant = ant.0, row = to.row, col = to.col, "ant fled");
            }
        }
        self.ants.extend_from_slice(&spawned);

        self.phase = Phase::Rendering;
        Some(TurnReport { player, spawned })
    }

    /// The frame for this turn has been shown
    pub fn rendered(&mut self) {
        if self.phase == Phase::Rendering {
            self.phase = Phase::AwaitingInput;
        }
    }

    /// Drive the loop until the front-end sends quit
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<Summary> {
        frontend.draw(self.snapshot())?;

        while self.phase != Phase::Exited {
            let command = frontend.next_command()?;
            if self.resolve(command).is_none() {
                break;
            }
            frontend.draw(self.snapshot())?;
            self.rendered();
        }

        Ok(self.summary)
    }

    /// Print the end-of-game summary
    pub fn print_summary(&self) {
        println!(
            "\n{}\n{} {} {} {} {}",
            "===".bright_blue().bold(),
            "🐜 Game over".green().bold(),
            "|".dimmed(),
            format!("turns={}", self.summary.turns).cyan(),
            format!("moves={}", self.summary.player_moves).cyan(),
            format!("spawned={}", self.summary.ants_spawned).cyan(),
        );
    }
}
