use crate::command::Command;
use crate::error::Result;
use crate::frontend::Frontend;
use crate::grid::Rows;
use std::io::{BufRead, Write};

/// Line-oriented front-end: one command per input line, plain frames out.
/// End of input quits.
pub struct Headless<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Headless<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::with_capacity(64),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Frontend for Headless<R, W> {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(Command::Quit);
            }
            let token = self.line.trim();
            if token.is_empty() {
                continue;
            }
            return token.parse();
        }
    }

    fn draw(&mut self, rows: Rows<'_>) -> Result<()> {
        let mut line = String::with_capacity(128);
        for row in rows {
            line.clear();
            line.extend(row);
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }
}
