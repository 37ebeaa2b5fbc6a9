//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ResumeApi, ResumeClient};
use crossbeam_channel::{Receiver, Sender};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(api_base_url: Url, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let api: Arc<dyn ResumeApi> = match ResumeClient::new(api_base_url) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                tracing::error!("failed to build resume client: {err}");
                return;
            }
        };

        tracing::info!("backend worker ready");
        // Fetches run concurrently; the controller keeps only the newest.
        while let Ok(cmd) = cmd_rx.recv() {
            tracing::debug!(command = cmd.name(), "backend received command");
            match cmd {
                BackendCommand::FetchResume { ticket } => {
                    let api = Arc::clone(&api);
                    let ui_tx = ui_tx.clone();
                    runtime.spawn(async move {
                        let outcome = api.fetch_resume(&ticket.username).await;
                        deliver(ui_tx, UiEvent::ResumeFetched { ticket, outcome }).await;
                    });
                }
            }
        }
        tracing::info!("command channel closed; backend worker exiting");
    });
}

/// Hands `event` to the UI without parking a runtime worker while the bounded
/// UI queue is full.
async fn deliver(ui_tx: Sender<UiEvent>, event: UiEvent) {
    match tokio::task::spawn_blocking(move || ui_tx.send(event)).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => tracing::debug!("ui dropped before resume fetch finished"),
        Err(err) => tracing::warn!("ui event delivery task failed: {err}"),
    }
}
