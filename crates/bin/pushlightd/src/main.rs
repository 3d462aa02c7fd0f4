//! # pushlightd — pushlight daemon
//!
//! Composition root that wires all adapters together and runs the bridge.
//!
//! ## Responsibilities
//! - Parse configuration (CLI flags, env vars, config file)
//! - Initialise logging
//! - Connect the Milight bridge (or a virtual bulb for `--dry-run`)
//! - Open the Pushbullet stream and forward pushes until it closes
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use std::sync::Arc;

use anyhow::Context as _;
use clap::error::ErrorKind;
use clap::{CommandFactory as _, Parser as _};
use tracing_subscriber::EnvFilter;

use pushlight_adapter_milight::MilightController;
use pushlight_adapter_pushbullet::PushbulletStream;
use pushlight_adapter_state_file::FsOverrideReader;
use pushlight_adapter_virtual::VirtualBulb;
use pushlight_app::bridge::Bridge;
use pushlight_app::ports::{LightController, NotificationSource, OverrideReader};
use pushlight_app::services::alert_service::AlertService;
use pushlight_app::services::gate_evaluator::GateEvaluator;

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli).context("failed to load configuration")?;

    let missing = config.missing_required(cli.dry_run);
    if !missing.is_empty() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                format!("missing required options: {}", missing.join(", ")),
            )
            .exit();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    tracing::info!(
        group = %config.alert.group,
        start_hour = ?config.alert.window.start_hour,
        end_hour = ?config.alert.window.end_hour,
        grace_period = ?config.alert.grace_period_secs,
        color = ?config.alert.color,
        state_file = ?config.alert.state_file,
        dry_run = cli.dry_run,
        "pushlightd starting"
    );

    let gate = GateEvaluator::new(config.alert.clone(), FsOverrideReader);
    let mut source = PushbulletStream::open(&config.pushbullet).await;

    if cli.dry_run {
        run(gate, VirtualBulb::default(), &mut source).await
    } else {
        let light = MilightController::connect(&config.milight)
            .await
            .context("failed to open milight socket")?;
        run(gate, light, &mut source).await
    }
}

/// Drive the bridge until the stream closes.
async fn run<L, R, S>(gate: GateEvaluator<R>, light: L, source: &mut S) -> anyhow::Result<()>
where
    L: LightController + 'static,
    R: OverrideReader + 'static,
    S: NotificationSource,
{
    let bridge = Bridge::new(Arc::new(AlertService::new(gate, light)));
    bridge
        .run(source)
        .await
        .context("notification stream failed")?;
    tracing::info!("pushlightd stopped");
    Ok(())
}
