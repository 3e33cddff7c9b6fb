use crate::entity::{Entity, EntityId, EntityKind, Position};
use crate::grid::cell::Cell;
use crate::grid::render::Rows;

/// Fixed-size board. Owns every entity in an arena and every cell's reference to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    empty_glyph: char,
    cells: Vec<Cell>,
    entities: Vec<Entity>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize, empty_glyph: char) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Position::new(row, col))))
            .collect();
        Self {
            rows,
            cols,
            empty_glyph,
            cells,
            entities: Vec::new(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn empty_glyph(&self) -> char {
        self.empty_glyph
    }

    /// Signed bounds check, for coordinates that may have stepped off the edge
    #[inline]
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline]
    fn idx(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos).then(|| &self.cells[self.idx(pos)])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Topmost entity in a cell
    pub fn occupant(&self, pos: Position) -> Option<&Entity> {
        self.cell(pos)?.top().map(|id| self.entity(id))
    }

    /// In bounds and holding nothing, neither nest nor occupant
    #[inline]
    pub fn is_free(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_empty)
    }

    /// Get an entity by id
    ///
    /// Ids are only handed out by `place`, so they always index the arena.
    #[inline]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    #[inline]
    pub(crate) fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.index()]
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    /// Put a new entity on the grid at its recorded position.
    ///
    /// Anthills need a cell with nothing in it; players and ants need a free
    /// occupant slot, which lets a fresh ant appear on top of its anthill.
    pub fn place(&mut self, mut entity: Entity) -> Option<EntityId> {
        let pos = entity.pos;
        let idx = self.contains(pos).then(|| self.idx(pos))?;
        let id = EntityId(self.entities.len() as u32);
        let cell = &mut self.cells[idx];

        match entity.kind {
            EntityKind::Anthill { .. } => {
                if !cell.is_empty() {
                    return None;
                }
                cell.set_nest(id);
            }
            EntityKind::Player | EntityKind::Ant => {
                if cell.occupant().is_some() {
                    return None;
                }
                cell.set_occupant(id);
            }
        }

        entity.id = id;
        self.entities.push(entity);
        Some(id)
    }

    /// Clear a cell's occupant slot, returning who was there
    pub(crate) fn vacate(&mut self, pos: Position) -> Option<EntityId> {
        let idx = self.contains(pos).then(|| self.idx(pos))?;
        self.cells[idx].take_occupant()
    }

    /// Vacate the source, record the new position, occupy the destination.
    /// The caller has already checked that `to` is in bounds and free.
    pub(crate) fn relocate(&mut self, id: EntityId, to: Position) {
        debug_assert!(self.is_free(to));
        let from = self.entity(id).pos;
        let vacated = self.vacate(from);
        debug_assert_eq!(vacated, Some(id));

        self.entity_mut(id).pos = to;
        let idx = self.idx(to);
        self.cells[idx].set_occupant(id);
    }

    /// Every cell that holds nothing, in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().filter(|c| c.is_empty()).map(|c| c.pos)
    }

    /// Uniform choice among the empty cells
    pub fn random_empty_cell(&self, rng: &mut fastrand::Rng) -> Option<Position> {
        let free = self.empty_cells().count();
        if free == 0 {
            return None;
        }
        self.empty_cells().nth(rng.usize(..free))
    }

    /// Lazy row-by-row glyph view; call again to start over
    pub fn render(&self) -> Rows<'_> {
        Rows::new(self)
    }

    /// Occupancy invariant: every entity is referenced by exactly one cell slot,
    /// at its own position, and every reference points back at its entity.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![0u32; self.entities.len()];

        for cell in &self.cells {
            for id in [cell.nest(), cell.occupant()].into_iter().flatten() {
                let Some(entity) = self.entities.get(id.index()) else {
                    return false;
                };
                if entity.pos != cell.pos || entity.id != id {
                    return false;
                }
                seen[id.index()] += 1;
            }
            if let Some(nest) = cell.nest() {
                if !self.entity(nest).is_anthill() {
                    return false;
                }
            }
            if let Some(occupant) = cell.occupant() {
                if self.entity(occupant).is_anthill() {
                    return false;
                }
            }
        }

        seen.iter().all(|&n| n == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 25, '.')
    }

    fn ant(row: usize, col: usize) -> Entity {
        Entity::new(EntityKind::Ant, Position::new(row, col), 'a')
    }

    fn anthill(row: usize, col: usize) -> Entity {
        Entity::new(
            EntityKind::Anthill { quantity: None },
            Position::new(row, col),
            'A',
        )
    }

    #[test]
    fn test_grid_creation() {
        let grid = grid();

        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 25);
        assert_eq!(grid.cells().len(), 250);
        assert_eq!(grid.empty_cells().count(), 250);
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_bounds() {
        let grid = grid();

        assert!(grid.is_in_bounds(0, 0));
        assert!(grid.is_in_bounds(9, 24));
        assert!(!grid.is_in_bounds(-1, 0));
        assert!(!grid.is_in_bounds(0, -1));
        assert!(!grid.is_in_bounds(10, 0));
        assert!(!grid.is_in_bounds(0, 25));
        assert!(grid.cell(Position::new(10, 0)).is_none());
    }

    #[test]
    fn test_place_and_occupant() {
        let mut grid = grid();
        let id = grid.place(ant(2, 3)).unwrap();

        let occupant = grid.occupant(Position::new(2, 3)).unwrap();
        assert_eq!(occupant.id, id);
        assert!(occupant.is_ant());
        assert!(grid.occupant(Position::new(3, 2)).is_none());
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_place_fails_on_taken_cell() {
        let mut grid = grid();
        grid.place(ant(1, 1)).unwrap();

        assert!(grid.place(ant(1, 1)).is_none());
        assert!(grid.place(anthill(1, 1)).is_none());
        assert_eq!(grid.entities().count(), 1);
    }

    #[test]
    fn test_place_fails_out_of_bounds() {
        let mut grid = grid();
        assert!(grid.place(ant(10, 0)).is_none());
        assert_eq!(grid.entities().count(), 0);
    }

    #[test]
    fn test_ant_may_sit_on_anthill() {
        let mut grid = grid();
        let hill = grid.place(anthill(2, 2)).unwrap();
        let a = grid.place(ant(2, 2)).unwrap();

        assert_eq!(grid.occupant(Position::new(2, 2)).unwrap().id, a);
        assert!(!grid.is_free(Position::new(2, 2)));
        assert!(grid.place(ant(2, 2)).is_none());
        assert!(grid.is_consistent());

        grid.relocate(a, Position::new(2, 3));
        assert_eq!(grid.occupant(Position::new(2, 2)).unwrap().id, hill);
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_relocate_moves_reference() {
        let mut grid = grid();
        let id = grid.place(ant(0, 0)).unwrap();

        grid.relocate(id, Position::new(0, 1));

        assert_eq!(grid.entity(id).pos, Position::new(0, 1));
        assert!(grid.is_free(Position::new(0, 0)));
        assert_eq!(grid.occupant(Position::new(0, 1)).unwrap().id, id);
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_random_empty_cell() {
        let mut grid = Grid::new(1, 3, '.');
        grid.place(ant(0, 0)).unwrap();
        grid.place(anthill(0, 2)).unwrap();

        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..20 {
            assert_eq!(grid.random_empty_cell(&mut rng), Some(Position::new(0, 1)));
        }

        grid.place(ant(0, 1)).unwrap();
        assert_eq!(grid.random_empty_cell(&mut rng), None);
    }
}
