use crate::direction::Direction;
use crate::entity::{EntityId, Position};
use crate::grid::Grid;

/// Result of a single move request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Entity now stands on this cell
    Moved(Position),
    /// Step would leave the grid
    OutOfBounds,
    /// Destination holds this entity
    Blocked(EntityId),
    /// Anthills never move
    Stationary,
}

impl MoveOutcome {
    #[inline]
    pub fn is_moved(self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    /// New position, if the move went through
    #[inline]
    pub fn moved_to(self) -> Option<Position> {
        match self {
            MoveOutcome::Moved(pos) => Some(pos),
            _ => None,
        }
    }
}

/// Neighbouring cell in `direction`, if it is on the grid
#[inline]
pub fn step_within(grid: &Grid, from: Position, direction: Direction) -> Option<Position> {
    let (dr, dc) = direction.delta();
    let row = from.row as isize + dr;
    let col = from.col as isize + dc;
    grid.is_in_bounds(row, col)
        .then(|| Position::new(row as usize, col as usize))
}

/// Move an entity one step. Bounds are checked first, then occupancy, and only
/// then is the swap applied; a rejected move leaves the grid untouched.
pub fn try_move(grid: &mut Grid, id: EntityId, direction: Direction) -> MoveOutcome {
    let mover = grid.entity(id);
    if mover.kind.is_stationary() {
        return MoveOutcome::Stationary;
    }
    let kind = mover.kind;

    let Some(to) = step_within(grid, mover.pos, direction) else {
        return MoveOutcome::OutOfBounds;
    };

    if let Some(cell) = grid.cell(to) {
        for other in [cell.occupant(), cell.nest()].into_iter().flatten() {
            if kind.is_blocked_by(grid.entity(other).kind) {
                return MoveOutcome::Blocked(other);
            }
        }
    }

    grid.relocate(id, to);
    MoveOutcome::Moved(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Entity, EntityKind};

    fn setup() -> (Grid, EntityId) {
        let mut grid = Grid::new(10, 25, '.');
        let player = grid
            .place(Entity::new(EntityKind::Player, Position::new(5, 5), 'P'))
            .unwrap();
        (grid, player)
    }

    #[test]
    fn test_move_into_empty_cell() {
        let (mut grid, player) = setup();

        let outcome = try_move(&mut grid, player, Direction::Up);

        assert_eq!(outcome, MoveOutcome::Moved(Position::new(4, 5)));
        assert_eq!(grid.entity(player).pos, Position::new(4, 5));
        assert!(grid.is_free(Position::new(5, 5)));
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_anthill_blocks_player() {
        let (mut grid, player) = setup();
        let hill = grid
            .place(Entity::new(
                EntityKind::Anthill { quantity: None },
                Position::new(5, 6),
                'A',
            ))
            .unwrap();
        let before = grid.clone();

        let outcome = try_move(&mut grid, player, Direction::Right);

        assert_eq!(outcome, MoveOutcome::Blocked(hill));
        assert_eq!(grid.entity(player).pos, Position::new(5, 5));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_ant_blocks_player() {
        let (mut grid, player) = setup();
        let ant = grid
            .place(Entity::new(EntityKind::Ant, Position::new(6, 5), 'a'))
            .unwrap();

        assert_eq!(
            try_move(&mut grid, player, Direction::Down),
            MoveOutcome::Blocked(ant)
        );
    }

    #[test]
    fn test_edges_reject_moves() {
        let mut grid = Grid::new(3, 3, '.');
        let ant = grid
            .place(Entity::new(EntityKind::Ant, Position::new(0, 0), 'a'))
            .unwrap();
        let before = grid.clone();

        assert_eq!(try_move(&mut grid, ant, Direction::Up), MoveOutcome::OutOfBounds);
        assert_eq!(try_move(&mut grid, ant, Direction::Left), MoveOutcome::OutOfBounds);
        assert_eq!(grid, before);

        let corner = grid
            .place(Entity::new(EntityKind::Ant, Position::new(2, 2), 'a'))
            .unwrap();
        assert_eq!(try_move(&mut grid, corner, Direction::Down), MoveOutcome::OutOfBounds);
        assert_eq!(try_move(&mut grid, corner, Direction::Right), MoveOutcome::OutOfBounds);
    }

    #[test]
    fn test_anthill_is_stationary() {
        let mut grid = Grid::new(3, 3, '.');
        let hill = grid
            .place(Entity::new(
                EntityKind::Anthill { quantity: None },
                Position::new(1, 1),
                'A',
            ))
            .unwrap();

        for dir in Direction::ALL {
            assert_eq!(try_move(&mut grid, hill, dir), MoveOutcome::Stationary);
        }
        assert_eq!(grid.entity(hill).pos, Position::new(1, 1));
    }

    #[test]
    fn test_step_within() {
        let grid = Grid::new(2, 2, '.');
        let origin = Position::new(0, 0);

        assert_eq!(step_within(&grid, origin, Direction::Up), None);
        assert_eq!(step_within(&grid, origin, Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(step_within(&grid, Position::new(1, 1), Direction::Right), None);
    }
}
