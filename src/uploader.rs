use anyhow::Result;
use log::{error, info};
use std::path::Path;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::config::Config;
use crate::helpers::list_files;
use crate::sender::DocumentSender;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub sent: usize,
    pub failed: usize,
}

/// One pass over the data directory: every regular file gets exactly one
/// upload. A failed upload is logged and the pass continues with the next
/// file; a failed directory listing propagates.
pub async fn run_cycle<S: DocumentSender>(
    sender: &S,
    chat_id: i64,
    data_dir: &Path,
) -> Result<CycleStats> {
    let files = list_files(data_dir)?;

    let mut stats = CycleStats::default();

    for file in &files {
        let path = file.path();
        info!("Sending file {}...", path.display());

        match sender.send_document(chat_id, &path).await {
            Ok(()) => stats.sent += 1,
            Err(e) => {
                error!("Failed to send {}: {}", path.display(), e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}

/// Runs forever: one cycle, then a fixed-duration sleep, then the next
/// cycle. The file list is re-derived from scratch every cycle and nothing
/// is tracked across cycles, so files left in place are re-sent each time.
/// The shutdown channel is only consulted between cycles.
pub async fn run_upload_loop<S: DocumentSender>(
    sender: &S,
    config: &Config,
    mut shutdown_signal: mpsc::Receiver<()>,
) -> Result<()> {
    info!(
        "Starting upload loop: data dir {}, interval {}s",
        config.data_dir.display(),
        config.send_interval.as_secs()
    );

    loop {
        let stats = run_cycle(sender, config.chat_id, &config.data_dir).await?;
        info!("Cycle done: {} sent, {} failed", stats.sent, stats.failed);

        info!(
            "Waiting {}s before next send...",
            config.send_interval.as_secs()
        );

        tokio::select! {
            _ = sleep(config.send_interval) => {}
            _ = shutdown_signal.recv() => {
                info!("Shutting down upload loop");
                break;
            }
        }
    }

    Ok(())
}
