pub mod cell;
pub mod grid;
pub mod render;

pub use cell::Cell;
pub use grid::Grid;
pub use render::{RowGlyphs, Rows};
