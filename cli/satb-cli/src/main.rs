mod args;
mod commands;
mod config;
mod format;

use anyhow::Result;
use clap::Parser;

use crate::args::{Cli, Command};
use crate::config::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Command::Analyze(args) => commands::analyze::handle_analyze(args, cli.format),
        Command::Realize(args) => commands::realize::handle_realize(args, cli.format),
        #[cfg(feature = "ai-music")]
        Command::AiMusic(args) => commands::ai_music::handle_ai_music(args, &config, cli.format),
        Command::Health => commands::health::handle_health(cli.format),
    }
}
