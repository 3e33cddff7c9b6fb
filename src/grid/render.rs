use crate::grid::cell::Cell;
use crate::grid::grid::Grid;
use std::iter::FusedIterator;
use std::slice::{ChunksExact, Iter};

/// Rows of a grid, top to bottom. Clone it to walk the same frame twice.
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    grid: &'a Grid,
    chunks: ChunksExact<'a, Cell>,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        // a zero-width grid has no rows to show
        let width = grid.cols().max(1);
        Self {
            grid,
            chunks: grid.cells().chunks_exact(width),
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = RowGlyphs<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.chunks.next()?;
        Some(RowGlyphs {
            grid: self.grid,
            cells: cells.iter(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}
impl FusedIterator for Rows<'_> {}

/// Glyphs of one row, left to right
#[derive(Clone, Debug)]
pub struct RowGlyphs<'a> {
    grid: &'a Grid,
    cells: Iter<'a, Cell>,
}

impl Iterator for RowGlyphs<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let cell = self.cells.next()?;
        Some(match cell.top() {
            Some(id) => self.grid.entity(id).glyph(),
            None => self.grid.empty_glyph(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for RowGlyphs<'_> {}
impl FusedIterator for RowGlyphs<'_> {}
