//! Input and display collaborators of the game loop.

pub mod headless;
pub mod terminal;

pub use headless::Headless;
pub use terminal::TerminalFrontend;

use crate::command::Command;
use crate::error::Result;
use crate::grid::Rows;

/// Where commands come from and where frames go
pub trait Frontend {
    /// Block until the next command is available
    fn next_command(&mut self) -> Result<Command>;

    /// Show one frame
    fn draw(&mut self, rows: Rows<'_>) -> Result<()>;
}
