use crate::direction::Direction;
use crate::entity::{EntityId, Position};
use crate::grid::Grid;
use crate::simulation::movement::{self, step_within};

/// Pick a direction for `ant` that keeps it at least as far from `player`.
///
/// Candidates are tried in a fresh uniform shuffle and the first one that
/// stays on the grid, lands on a free cell and does not shrink the Manhattan
/// distance wins. `None` means the ant stays put this turn.
pub fn choose_direction(
    grid: &Grid,
    ant: EntityId,
    player: Position,
    rng: &mut fastrand::Rng,
) -> Option<Direction> {
    let from = grid.entity(ant).pos;
    let current = from.distance(player);

    let mut candidates = Direction::ALL;
    rng.shuffle(&mut candidates);

    candidates.into_iter().find(|&dir| {
        step_within(grid, from, dir)
            .is_some_and(|to| grid.is_free(to) && to.distance(player) >= current)
    })
}

/// Choose and apply one flee step. Returns the new position if the ant moved.
pub fn flee(
    grid: &mut Grid,
    ant: EntityId,
    player: Position,
    rng: &mut fastrand::Rng,
) -> Option<Position> {
    let direction = choose_direction(grid, ant, player, rng)?;
    movement::try_move(grid, ant, direction).moved_to()
}
