/// Grid coordinates, row first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance
    #[inline]
    pub fn distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Handle into the grid's entity arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Variant-specific entity data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    /// `quantity` is the number of ants this anthill can still spawn, `None` for no limit
    Anthill { quantity: Option<u32> },
    Ant,
}

impl EntityKind {
    /// Whether a mover of kind `self` is stopped by `other` sitting on the destination.
    ///
    /// No entity may displace another, so any occupied cell blocks any mover.
    #[inline]
    pub fn is_blocked_by(self, _other: EntityKind) -> bool {
        true
    }

    #[inline]
    pub fn is_stationary(self) -> bool {
        matches!(self, EntityKind::Anthill { .. })
    }
}

/// Anything that lives on the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Position,
    pub kind: EntityKind,
    glyph: char,
}

impl Entity {
    /// Create a new entity; the grid assigns the id on placement
    pub fn new(kind: EntityKind, pos: Position, glyph: char) -> Self {
        Self {
            id: EntityId(u32::MAX),
            pos,
            kind,
            glyph,
        }
    }

    #[inline]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[inline]
    pub fn is_anthill(&self) -> bool {
        matches!(self.kind, EntityKind::Anthill { .. })
    }

    #[inline]
    pub fn is_ant(&self) -> bool {
        matches!(self.kind, EntityKind::Ant)
    }

    /// Remaining spawn stock of a capped anthill. `None` for uncapped
    /// anthills and for anything that is not an anthill.
    pub fn quantity(&self) -> Option<u32> {
        match self.kind {
            EntityKind::Anthill { quantity } => quantity,
            _ => None,
        }
    }

    /// Anthill that may still produce ants
    pub fn can_spawn(&self) -> bool {
        match self.kind {
            EntityKind::Anthill { quantity: None } => true,
            EntityKind::Anthill { quantity: Some(left) } => left > 0,
            _ => false,
        }
    }

    /// Take one ant out of an anthill's stock. Returns false when a capped
    /// anthill is exhausted or the entity is not an anthill.
    pub fn take_one(&mut self) -> bool {
        match &mut self.kind {
            EntityKind::Anthill { quantity: None } => true,
            EntityKind::Anthill {
                quantity: Some(left),
            } if *left > 0 => {
                *left -= 1;
                true
            }
            _ => false,
        }
    }
}
