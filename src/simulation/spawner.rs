use crate::entity::{Entity, EntityId, EntityKind, Position};
use crate::grid::Grid;
use crate::simulation::flee;
use tracing::{info, trace};

/// Spawn policy shared by every anthill; the stock itself lives on each anthill
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spawner {
    probability: f64,
    ant_glyph: char,
}

impl Spawner {
    pub fn new(probability: f64, ant_glyph: char) -> Self {
        Self {
            probability,
            ant_glyph,
        }
    }

    /// Run one spawn trial for `anthill`. Exhausted anthills skip the trial.
    pub fn maybe_spawn(
        &self,
        grid: &mut Grid,
        anthill: EntityId,
        player: Position,
        rng: &mut fastrand::Rng,
    ) -> Option<EntityId> {
        if !grid.entity(anthill).can_spawn() {
            return None;
        }
        if rng.f64() >= self.probability {
            return None;
        }
        self.spawn(grid, anthill, player, rng)
    }

    /// Put a new ant on the anthill's cell, or on a random empty cell if
    /// something already stands there, then let it take its first flee step.
    /// Silently does nothing when the grid is full.
    pub fn spawn(
        &self,
        grid: &mut Grid,
        anthill: EntityId,
        player: Position,
        rng: &mut fastrand::Rng,
    ) -> Option<EntityId> {
        let home = grid.entity(anthill).pos;
        let at = if grid.cell(home).is_some_and(|c| c.occupant().is_none()) {
            home
        } else {
            grid.random_empty_cell(rng)?
        };

        let ant = grid.place(Entity::new(EntityKind::Ant, at, self.ant_glyph))?;
        grid.entity_mut(anthill).take_one();
        info!(ant = ant.0, row = at.row, col = at.col, "ant spawned");

        if let Some(to) = flee::flee(grid, ant, player, rng) {
            trace!(ant = ant.0, row = to.row, col = to.col, "new ant fled");
        }
        Some(ant)
    }
}
