//! Menu controller
//!
//! Reads a one-letter command and dispatches it until the user exits.
//!
//! A blank line is asked for again as often as needed, but an unknown
//! command gets a single inline retry: if that retry is also unusable the
//! loop starts over and the full menu is shown again.

use console::style;

use crate::cli::commands::{extract, print, root};
use crate::cli::prompts;
use crate::core::{Console, ConsoleError, Family};

/// Menu command letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Print,
    Extract,
    Root,
    Exit,
}

impl MenuCommand {
    /// Parse the first character of a trimmed line, case-insensitively
    pub fn from_input(input: &str) -> Option<Self> {
        match input.chars().next()?.to_ascii_uppercase() {
            'P' => Some(MenuCommand::Print),
            'E' => Some(MenuCommand::Extract),
            'R' => Some(MenuCommand::Root),
            'X' => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Ready,
    Exited,
}

pub struct MenuController {
    family: Family,
    state: MenuState,
    color: bool,
}

impl MenuController {
    pub fn new(family: Family, color: bool) -> Self {
        Self {
            family,
            state: MenuState::Ready,
            color,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn family(&self) -> &Family {
        &self.family
    }

    pub fn into_family(self) -> Family {
        self.family
    }

    /// Run until the user picks e(X)it
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<(), ConsoleError> {
        while self.state == MenuState::Ready {
            let mut choice = console.prompt(prompts::MENU)?;
            while choice.is_empty() {
                choice = console.prompt(prompts::INVALID_MENU_OPTION)?;
            }

            let command = match MenuCommand::from_input(&choice) {
                Some(command) => command,
                None => {
                    let retry = console.prompt(prompts::INVALID_MENU_OPTION)?;
                    match MenuCommand::from_input(&retry) {
                        Some(command) => command,
                        None => {
                            log::debug!("no usable menu option in {choice:?} or {retry:?}");
                            continue;
                        }
                    }
                }
            };

            self.dispatch(command, console)?;
        }
        Ok(())
    }

    /// Perform one command
    pub fn dispatch<C: Console>(
        &mut self,
        command: MenuCommand,
        console: &mut C,
    ) -> Result<(), ConsoleError> {
        log::debug!("dispatching {command:?}");
        match command {
            MenuCommand::Print => print::run(&self.family, console)?,
            MenuCommand::Extract => {
                let extraction = extract::run(&mut self.family, console)?;
                log::debug!("extracted {extraction:?}");
            }
            MenuCommand::Root => {
                let indices = root::run(&self.family, console)?;
                log::debug!("root canal indices {indices:?}");
            }
            MenuCommand::Exit => {
                console.println("")?;
                if self.color {
                    console.println(&style(prompts::FAREWELL).green().bold().to_string())?;
                } else {
                    console.println(prompts::FAREWELL)?;
                }
                self.state = MenuState::Exited;
            }
        }
        Ok(())
    }
}
