//! Raw-mode terminal front-end: keys in, coloured frames out.
//!
//! The whole frame is redrawn every turn; the grid is small enough that
//! diffing is not worth it.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::Print,
    terminal, QueueableCommand,
};

use crate::command::Command;
use crate::config::Glyphs;
use crate::error::Result;
use crate::frontend::Frontend;
use crate::grid::Rows;
use tracing::error;

/// Owns the terminal while the game runs. Raw mode is switched off again on
/// `exit`, or on drop if `exit` was never reached.
pub struct TerminalFrontend {
    stdout: io::Stdout,
    glyphs: Glyphs,
    raw: bool,
}

impl TerminalFrontend {
    pub fn new(glyphs: Glyphs) -> Self {
        Self {
            stdout: io::stdout(),
            glyphs,
            raw: false,
        }
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Leave the alternate screen and raw mode. Does nothing if `enter` never
    /// switched raw mode on.
    pub fn exit(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn paint(&self, glyph: char) -> ColoredString {
        let s = glyph.to_string();
        if glyph == self.glyphs.player {
            s.bright_green().bold()
        } else if glyph == self.glyphs.anthill {
            s.yellow().bold()
        } else if glyph == self.glyphs.ant {
            s.bright_red()
        } else {
            s.dimmed()
        }
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            error!(%err, "failed to restore terminal");
        }
    }
}

/// Map a key press to a command. Unbound keys give `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            .then_some(Command::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

impl Frontend for TerminalFrontend {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = command_for_key(key) {
                    return Ok(command);
                }
            }
        }
    }

    fn draw(&mut self, rows: Rows<'_>) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        for row in rows {
            for glyph in row {
                let painted = self.paint(glyph);
                self.stdout.queue(Print(painted))?;
                self.stdout.queue(Print(' '))?;
            }
            self.stdout.queue(Print("\r\n"))?;
        }
        self.stdout
            .queue(Print("arrows/wasd: move   esc/q: quit".dimmed()))?;
        self.stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_wasd() {
        assert_eq!(command_for_key(key(KeyCode::Up)), Some(Command::MoveUp));
        assert_eq!(command_for_key(key(KeyCode::Char('s'))), Some(Command::MoveDown));
        assert_eq!(command_for_key(key(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(command_for_key(key(KeyCode::Char('D'))), Some(Command::MoveRight));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_exit_without_enter_is_noop() {
        let mut term = TerminalFrontend::new(Glyphs::default());

        assert!(!term.is_raw());
        assert!(term.exit().is_ok());
        assert!(!term.is_raw());
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(command_for_key(key(KeyCode::Enter)), None);
        assert_eq!(command_for_key(key(KeyCode::Char('x'))), None);
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            None
        );
    }
}
