use anyhow::Result;
use log::{error, info};
use teloxide::Bot;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

mod config;
mod helpers;
mod sender;
mod uploader;

use config::Config;
use sender::BotSender;
use uploader::run_upload_loop;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env()?;

    info!("Starting backup bot...");
    let bot = Bot::new(config.bot_token.clone());
    let sender = BotSender::new(bot);

    let (shutdown_send, shutdown_recv) = mpsc::channel(1);

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => {}
            _ = terminate.recv() => {}
        }

        if let Err(e) = shutdown_send.send(()).await {
            error!("Failed to send shutdown signal: {}", e);
        }
    });

    run_upload_loop(&sender, &config, shutdown_recv).await?;

    Ok(())
}
