//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL_MESSAGE: &str = "UI command queue is full; please retry";
pub const WORKER_DISCONNECTED_MESSAGE: &str =
    "Backend command processor disconnected (possible startup/runtime failure); restart the app";

/// Queues `cmd` for the worker. On failure the user-facing reason is returned
/// so the caller can fail the pending request instead of waiting forever.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), &'static str> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full");
            Err(QUEUE_FULL_MESSAGE)
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err(WORKER_DISCONNECTED_MESSAGE)
        }
    }
}
