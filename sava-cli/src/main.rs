//! sava CLI - reservation countdown for the SAVA press brake operator
//!
//! Entry point for the `sava` command-line tool:
//! - One-shot countdown to the delivery milestone (`countdown`)
//! - Live, hourly-refreshing reservation card in the terminal (`watch`)
//! - Configuration management (`config`)
//! - Shell completions (`completions`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sava_core::SavaConfig;

mod commands;
mod config;
mod render;
mod tracing_setup;
mod tui;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "sava",
    author,
    version,
    about = "Countdown to the first SAVA press brake operator delivery",
    long_about = "Shows the months, days and hours left until the delivery milestone. \
                  Months are counted as 30 days and the target is read in the local \
                  timezone unless --tz says otherwise."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the time left until the target once
    Countdown(commands::countdown::CountdownArgs),
    /// Live reservation card that refreshes on a fixed interval
    Watch(commands::watch::WatchArgs),
    /// Manage sava configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        quiet: cli.quiet,
        silent: matches!(cli.command, Commands::Watch(_)),
    })
    .ok();

    match cli.command {
        Commands::Countdown(args) => commands::countdown::run_countdown(args, load_config()?)?,
        Commands::Watch(args) => commands::watch::run_watch(args, load_config()?).await?,
        Commands::Config(args) => config::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn load_config() -> Result<SavaConfig> {
    SavaConfig::load().with_context(|| {
        format!(
            "Failed to load config from {}",
            SavaConfig::config_path().display()
        )
    })
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
