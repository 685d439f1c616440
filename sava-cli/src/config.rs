use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sava_core::SavaConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with default values
    Init(InitArgs),
    /// Print the effective config (file + SAVA_* overrides) as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = SavaConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    SavaConfig::default()
        .save_to(&config_path)
        .context(format!("Failed to write config file: {:?}", config_path))?;

    println!("Created config at: {}", config_path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = SavaConfig::load()?;

    // Surface a bad target here rather than at the next countdown
    config
        .target_instant()
        .context("Config holds an invalid countdown target")?;

    let toml_str =
        toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
    println!("{}", toml_str);

    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", SavaConfig::config_path().display());
    Ok(())
}
