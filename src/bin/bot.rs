use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Notify;

use maestro::api::{self, build_schema};
use maestro::bot::{build_client, BotHandle};
use maestro::commands::CommandContext;
use maestro::control::{shutdown_signal, Invocation, SelfRespawn, SettingsControl};
use maestro::core::{get_bot_version, logging, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Captured first so a restart relaunches exactly this command line
    let invocation = Invocation::current()?;
    let start_time = Instant::now();

    let config = Config::from_env()?;
    let logs = logging::init(&config.log_level)?;

    info!("Starting maestro v{}...", get_bot_version());

    info!("Instantiating bot...");
    let (mut client, bot) =
        build_client(&config, CommandContext::with_start_time(start_time)).await?;
    let bot: Arc<dyn BotHandle> = Arc::new(bot);

    info!("Building API schema...");
    let control = Arc::new(SettingsControl::new(
        bot.clone(),
        Arc::new(SelfRespawn::new(invocation)),
    ));
    let schema = build_schema(control, logs, config.discord_client_id.clone());

    if let Some(path) = &config.api_schema_path {
        api::write_sdl(&schema, path)?;
        info!("📄 API schema written to {path}");
    }

    // Bind before connecting so a taken port aborts startup
    let listener = api::bind(&config.api_addr()).await?;

    let shutdown = Arc::new(Notify::new());

    // SIGINT / SIGTERM: disconnect the bot, then drain the API server
    let signal_bot = bot.clone();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            error!("Signal handling unavailable: {e:#}");
            return;
        }
        signal_bot.shutdown().await;
        signal_shutdown.notify_one();
    });

    info!("Starting API server...");
    let api_shutdown = shutdown.clone();
    let api_server = tokio::spawn(async move {
        let stop = async move { api_shutdown.notified().await };
        if let Err(e) = api::serve(schema, listener, start_time, stop).await {
            error!("API server failed: {e:#}");
        }
    });

    info!("Establishing WebSocket connection to Discord gateway...");
    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Discord API outage");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    // Gateway closed by the signal handler; let in-flight API requests finish
    let _ = api_server.await;
    info!("Shutdown complete");

    Ok(())
}
