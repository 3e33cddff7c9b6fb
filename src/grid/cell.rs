use crate::entity::{EntityId, Position};

/// One grid square: an anthill may sit in the nest slot, a player or ant in the occupant slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Position,
    nest: Option<EntityId>,
    occupant: Option<EntityId>,
}

impl Cell {
    #[inline]
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            nest: None,
            occupant: None,
        }
    }

    /// Nothing at all in this cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nest.is_none() && self.occupant.is_none()
    }

    #[inline]
    pub fn nest(&self) -> Option<EntityId> {
        self.nest
    }

    #[inline]
    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    /// What an observer sees: the occupant on top, else the nest
    #[inline]
    pub fn top(&self) -> Option<EntityId> {
        self.occupant.or(self.nest)
    }

    #[inline]
    pub(crate) fn set_nest(&mut self, id: EntityId) {
        self.nest = Some(id);
    }

    #[inline]
    pub(crate) fn set_occupant(&mut self, id: EntityId) {
        self.occupant = Some(id);
    }

    #[inline]
    pub(crate) fn take_occupant(&mut self) -> Option<EntityId> {
        self.occupant.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_creation() {
        let cell = Cell::new(Position::new(3, 4));

        assert_eq!(cell.pos, Position::new(3, 4));
        assert!(cell.is_empty());
        assert_eq!(cell.top(), None);
    }

    #[test]
    fn test_occupant_sits_on_top_of_nest() {
        let mut cell = Cell::new(Position::new(0, 0));

        cell.set_nest(EntityId(1));
        assert_eq!(cell.top(), Some(EntityId(1)));
        assert!(!cell.is_empty());

        cell.set_occupant(EntityId(2));
        assert_eq!(cell.top(), Some(EntityId(2)));

        assert_eq!(cell.take_occupant(), Some(EntityId(2)));
        assert_eq!(cell.top(), Some(EntityId(1)));
        assert_eq!(cell.occupant(), None);
    }
}
