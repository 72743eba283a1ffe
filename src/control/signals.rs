//! Process termination signals

use anyhow::{Context, Result};
use log::info;

/// Resolve once SIGINT (Ctrl+C) or, on unix, SIGTERM arrives
pub async fn shutdown_signal() -> Result<()> {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .context("Failed to register SIGTERM handler")?;
        tokio::select! {
            res = ctrl_c => res.context("Failed to listen for SIGINT")?,
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.context("Failed to listen for Ctrl+C")?;
    }

    info!("🛑 Shutdown signal received");
    Ok(())
}
