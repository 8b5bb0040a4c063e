//! Interactive shell: collects a session, prints its report and offers to start over.

pub mod io;
pub mod output;
pub mod render;
pub mod screen;
pub mod validators;
pub mod wizard;

use std::io::{self as std_io, BufRead};

use thiserror::Error;

use crate::config::{Config, ConfigManager, ReportFormat};
use crate::errors::{ConfigError, ValidationError};
use io::{prompt_until, LineSource, ScriptSource, TerminalSource};
use output::OutputPreferences;
use render::{render_json, RenderOptions, ReportRenderer};
use screen::Screen;
use validators::parse_yes_no;
use wizard::Wizard;

/// Environment variable that switches the shell to line-per-answer stdin input.
pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std_io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("input closed")]
    InputClosed,
}

/// Runs the tracker until the user declines another round or input ends.
pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let config = ConfigManager::new()
        .map(|manager| manager.load_or_default())
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "configuration unavailable, using defaults");
            Config::default()
        });
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_mode,
    });
    tracing::info!(?mode, "starting expense tracker");

    let result = match mode {
        CliMode::Interactive => {
            let screen = Screen::new(config.clear_screen);
            Shell::new(TerminalSource::new(), screen, config).run()
        }
        CliMode::Script => run_script(std_io::stdin().lock(), config),
    };

    match result {
        Err(CliError::InputClosed) => {
            output::info("Input closed. Exiting.");
            Ok(())
        }
        other => other,
    }
}

pub struct Shell<S> {
    source: S,
    screen: Screen,
    config: Config,
}

impl<S: LineSource> Shell<S> {
    pub fn new(source: S, screen: Screen, config: Config) -> Self {
        Self {
            source,
            screen,
            config,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.run_once()?;

            self.screen
                .pause(&mut self.source, "Press enter to continue...")?;
            self.screen.clear()?;
            let again = prompt_until(
                &mut self.source,
                "Would you like to track your finances again or input hypothetical expense values? (Y/N)",
                parse_yes_no,
            )?;
            if !again {
                output::blank_line();
                output::success(self.farewell());
                tracing::info!("expense tracker finished");
                return Ok(());
            }
        }
    }

    /// Collects one session and prints its report.
    ///
    /// Figures the engine cannot analyze are reported as a warning so the user can start over.
    pub fn run_once(&mut self) -> Result<(), CliError> {
        let wizard = Wizard::new(self.screen, &self.config.currency);
        let session = wizard.collect_session(&mut self.source)?;
        output::blank_line();
        self.screen
            .pause(&mut self.source, "Press enter to view your budget summary...")?;

        let report = match session.analyze() {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(error = %err, "session could not be analyzed");
                output::warning(format!("{err}. Please try again with smaller amounts."));
                return Ok(());
            }
        };
        self.screen.clear()?;
        match self.config.report_format {
            ReportFormat::Text => {
                let options = RenderOptions {
                    currency: self.config.currency.clone(),
                    plain: self.config.plain_mode,
                    generated_on: Some(chrono::Local::now().date_naive()),
                };
                for line in ReportRenderer::new(&options).render(&report) {
                    println!("{line}");
                }
                output::blank_line();
            }
            ReportFormat::Json => println!("{}", render_json(&report)?),
        }
        Ok(())
    }

    fn farewell(&self) -> String {
        let base = "Thank you for using our college finance tracker! Goodbye and happy budgeting!";
        if self.config.plain_mode {
            base.to_string()
        } else {
            format!("{base} 💰")
        }
    }
}

/// Runs a scripted session against any reader; used by the binary's script mode and tests.
pub fn run_script<R: BufRead>(reader: R, config: Config) -> Result<(), CliError> {
    Shell::new(ScriptSource::new(reader), Screen::disabled(), config).run()
}
