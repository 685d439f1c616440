//! Countdown command - one-shot evaluation of the reservation countdown
//!
//! Prints the reservation card, or a JSON report with `--json`:
//! { "target": "...", "now": "...", "state": "pending", "remaining": {...} }

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use sava_core::{Clock, CountdownState, RemainingDuration, SavaConfig, SystemClock};
use serde::Serialize;
use tracing::debug;

use super::TargetArgs;
use crate::render;

#[derive(Parser, Debug)]
pub struct CountdownArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Evaluate at this instant (RFC 3339) instead of the current time
    #[arg(long, value_name = "RFC3339")]
    pub at: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct CountdownReport {
    pub target: DateTime<Utc>,
    pub target_literal: String,
    pub timezone: String,
    pub now: DateTime<Utc>,
    pub state: &'static str,
    pub remaining: RemainingDuration,
}

pub fn run_countdown(args: CountdownArgs, mut config: SavaConfig) -> Result<()> {
    args.target.apply(&mut config);

    let target = config
        .target_instant()
        .context("Invalid countdown target")?;
    let now = match &args.at {
        Some(at) => parse_at(at)?,
        None => SystemClock.now(),
    };

    let state = CountdownState::evaluate(&target, now);
    debug!(
        target_instant = %target.instant(),
        now = %now,
        state = state.label(),
        "countdown evaluated"
    );

    if args.json {
        let report = CountdownReport {
            target: target.instant(),
            target_literal: target.literal().format("%Y-%m-%dT%H:%M:%S").to_string(),
            timezone: target.zone().to_string(),
            now,
            state: state.label(),
            remaining: state.remaining(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in render::card_lines(&config.display, &target, &state) {
            println!("{line}");
        }
    }

    Ok(())
}

fn parse_at(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("--at expects an RFC 3339 timestamp, got '{value}'"))
}
