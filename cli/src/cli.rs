//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;
use clap::builder::FalseyValueParser;

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Initialize a new Django project using the fuzzy-couscous project template
#[derive(Parser)]
#[command(name = "fuzzy-couscous", version, arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub init: commands::init::InitArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Log every step (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if project initialization fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            init,
            json,
            quiet,
            no_color,
            verbose: _,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
        });
        commands::init::run(&app, &init).await
    }
}
