use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};

use crate::cli::io::LineSource;
use crate::cli::CliError;

/// Terminal housekeeping between wizard steps.
#[derive(Debug, Clone, Copy)]
pub struct Screen {
    clear_enabled: bool,
}

impl Screen {
    pub fn new(clear_enabled: bool) -> Self {
        Self { clear_enabled }
    }

    /// A screen that never clears, for scripted runs.
    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn clear(&self) -> Result<(), CliError> {
        if !self.clear_enabled {
            return Ok(());
        }
        let mut stdout = io::stdout();
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;
        stdout.flush()?;
        Ok(())
    }

    /// Waits for Enter when a person is at the keyboard; scripted input skips it.
    pub fn pause<S: LineSource + ?Sized>(
        &self,
        source: &mut S,
        prompt: &str,
    ) -> Result<(), CliError> {
        if source.is_interactive() {
            source.read_line(prompt)?;
        }
        Ok(())
    }
}
