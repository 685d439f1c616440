//! Watch command - live reservation card in the terminal
//!
//! Mounting the view starts the countdown ticker; leaving it (q, Esc,
//! Ctrl+C, SIGTERM, or an error) tears the ticker down and restores the
//! terminal before the command returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sava_core::{SavaConfig, SystemClock};
use tokio::signal;
use tracing::{info, warn};

use super::TargetArgs;
use crate::tui::{self, ReservationView};

#[derive(Parser, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Seconds between refreshes (defaults to the configured value, one hour)
    #[arg(long, value_name = "SECS")]
    pub interval_secs: Option<u64>,
}

pub async fn run_watch(args: WatchArgs, mut config: SavaConfig) -> Result<()> {
    args.target.apply(&mut config);
    if let Some(secs) = args.interval_secs {
        config.countdown.refresh_secs = secs;
    }

    let target = config
        .target_instant()
        .context("Invalid countdown target")?;
    let period = config
        .refresh_period()
        .context("Invalid refresh interval")?;

    let mut view = ReservationView::mount(
        target,
        Arc::new(SystemClock),
        period,
        config.display.clone(),
    )
    .context("Failed to start the countdown")?;

    let listener = tokio::spawn(quit_on_signal(view.quit_handle()));

    // The terminal loop blocks; keep it off the async workers
    let result = tokio::task::block_in_place(|| tui::run(&mut view));

    listener.abort();
    let refreshes = view.refreshes();
    view.unmount().await;
    info!(refreshes, "reservation view closed");

    result
}

/// Ask the view to close on SIGINT or SIGTERM so the terminal gets restored
async fn quit_on_signal(quit: Arc<AtomicBool>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("signal received, closing reservation view");
    quit.store(true, Ordering::SeqCst);
}
