//! Interactive session: banner, family setup, then the menu loop

use console::style;
use miette::Diagnostic;
use thiserror::Error;

use crate::cli::commands::setup;
use crate::cli::menu::MenuController;
use crate::cli::prompts;
use crate::core::{Config, Console, ConsoleError, Family, FamilyError};

/// Errors that end a session
#[derive(Debug, Error, Diagnostic)]
pub enum SessionError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Family(#[from] FamilyError),
}

/// Presentation options for a session
///
/// Defaults match [`Config`]'s: banner on, colour on. Styling is still
/// dropped whenever `console` decides the output is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub banner: bool,
    pub color: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            banner: true,
            color: true,
        }
    }
}

impl Session {
    pub fn from_config(config: &Config) -> Self {
        Self {
            banner: config.banner(),
            color: config.color(),
        }
    }

    /// Run a full session and return the family as it was at exit
    pub fn run<C: Console>(&self, console: &mut C) -> Result<Family, SessionError> {
        if self.banner {
            self.print_banner(console)?;
        }

        let count = setup::get_people_count(console)?;
        let family = setup::build_family(console, count)?;
        log::debug!("family of {} ready", family.len());

        let mut menu = MenuController::new(family, self.color);
        menu.run(console)?;
        Ok(menu.into_family())
    }

    fn print_banner<C: Console>(&self, console: &mut C) -> Result<(), ConsoleError> {
        if self.color {
            console.println(&style(prompts::WELCOME).cyan().bold().to_string())?;
            console.println(&style(prompts::WELCOME_RULE).dim().to_string())
        } else {
            console.println(prompts::WELCOME)?;
            console.println(prompts::WELCOME_RULE)
        }
    }
}
