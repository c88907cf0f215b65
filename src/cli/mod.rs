// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords and rate their strength", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = parse_level)]
    pub log_level: Option<LevelFilter>,

    /// Seed the random generator for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Args {
    /// The command to run, treating a bare invocation as `generate`.
    pub fn resolved_command(&self) -> CliCommand {
        self.command
            .clone()
            .unwrap_or_else(|| CliCommand::Generate(self.generate.clone()))
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    crate::core::config::parse_log_level(value)
        .ok_or_else(|| format!("unknown log level '{}'", value))
}
