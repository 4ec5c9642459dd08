//! Headless launch.
//!
//! Plays the splash timer while the sequencer resolves its inputs, then
//! reports where the router was sent.

use anyhow::Context;
use tracing::{info, info_span, warn, Instrument};

use ev_core::bootstrap::{Destination, RoutingDecision};
use ev_core::config::AppConfig;
use ev_core::locale::Language;
use ev_platform::SplashTimer;

use super::wiring::{wire_dependencies, WiredApp};

/// What one launch produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchReport {
    pub decision: RoutingDecision,
    pub destination: Destination,
    pub language: Language,
}

/// Wire the app from `config` and run one launch.
///
/// Returns `Ok(None)` if interrupted before a decision was made.
pub async fn run_launch(config: AppConfig) -> anyhow::Result<Option<LaunchReport>> {
    let wired = wire_dependencies(&config).context("Failed to wire application")?;
    run_wired_launch(wired, &config, tokio::signal::ctrl_c()).await
}

/// Run one launch against an already wired app.
///
/// `interrupt` completing before the decision tears the launch screen down.
pub async fn run_wired_launch<I>(
    wired: WiredApp,
    config: &AppConfig,
    interrupt: I,
) -> anyhow::Result<Option<LaunchReport>>
where
    I: std::future::Future,
{
    let WiredApp {
        app,
        mut navigation,
        store_dir,
    } = wired;

    let span = info_span!("launch", store_dir = %store_dir.display());

    async move {
        let language = app
            .language_preference()
            .resolve(&config.device_language)
            .await;
        info!(language = language.tag(), rtl = language.is_rtl(), "language resolved");

        let sequencer = app.bootstrap_sequencer();
        let splash = SplashTimer::from_millis(config.splash_duration_ms);

        let decision = tokio::select! {
            decision = sequencer.run(splash.finished()) => decision,
            _ = interrupt => {
                sequencer.unmount().await;
                None
            }
        };

        let Some(decision) = decision else {
            warn!("launch abandoned before routing");
            return Ok(None);
        };

        let destination = navigation
            .recv()
            .await
            .context("Router closed before receiving the launch destination")?;

        Ok(Some(LaunchReport {
            decision,
            destination,
            language,
        }))
    }
    .instrument(span)
    .await
}
