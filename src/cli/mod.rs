//! CLI module - argument parsing, the menu loop and its commands

pub mod args;
pub mod commands;
pub mod menu;
pub mod prompts;
pub mod session;

pub use args::{Cli, Commands, GlobalOpts};
pub use menu::{MenuCommand, MenuController, MenuState};
pub use session::{Session, SessionError};
