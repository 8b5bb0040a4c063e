use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output;
use crate::cli::CliError;
use crate::errors::ValidationError;

/// Where the wizard reads answers from.
pub trait LineSource {
    /// Shows `prompt` and returns the next answer, or `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Whether a person is typing; pauses and screen clearing only apply then.
    fn is_interactive(&self) -> bool;
}

/// Reads answers from the terminal through dialoguer prompts.
pub struct TerminalSource {
    theme: ColorfulTheme,
}

impl TerminalSource {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        match result {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Reads one answer per line from any buffered reader, echoing prompts to stdout.
pub struct ScriptSource<R> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: true,
        }
    }

    /// Skips printing prompts; used by tests that only inspect the collected values.
    pub fn silent(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: false,
        }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        if self.echo_prompts {
            let mut stdout = io::stdout();
            write!(stdout, "{prompt}: ")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            if self.echo_prompts {
                println!();
            }
            return Ok(None);
        }
        if self.echo_prompts {
            println!();
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Asks until `validate` accepts the answer, showing each rejection as a warning.
pub fn prompt_until<S, T, F>(source: &mut S, prompt: &str, mut validate: F) -> Result<T, CliError>
where
    S: LineSource + ?Sized,
    F: FnMut(&str) -> Result<T, ValidationError>,
{
    loop {
        let Some(raw) = source.read_line(prompt)? else {
            return Err(CliError::InputClosed);
        };
        match validate(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(prompt, input = %raw, "rejected input");
                output::warning(err);
            }
        }
    }
}
