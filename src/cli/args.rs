//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::completions::CompletionsArgs;
use crate::core::Config;

#[derive(Parser)]
#[command(name = "ftr")]
#[command(author, version, about = "Floridian Tooth Records")]
#[command(long_about = "Record the teeth of up to six family members, extract teeth, and compute the family's root canal indices.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Skip the welcome banner
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Never style the banner or farewell
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Read settings from this YAML file as well
    #[arg(long, global = true, env = "FTR_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GlobalOpts {
    /// Apply command-line flags on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if self.quiet {
            config.banner = Some(false);
        }
        if self.no_color {
            config.color = Some(false);
        }
        if self.verbose {
            config.log_level = Some("debug".to_string());
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}
