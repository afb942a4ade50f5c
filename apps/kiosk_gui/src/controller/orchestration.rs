//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` without blocking the UI thread; failures land in `notice`.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    notice: &mut Option<String>,
) {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "queueing ui->backend command");
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            *notice = None;
        }
        Err(TrySendError::Full(_)) => {
            *notice = Some("Processing queue is full; please retry".to_string());
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
        }
        Err(TrySendError::Disconnected(_)) => {
            *notice = Some("Order processor stopped; restart the kiosk".to_string());
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn queued_command_clears_previous_notice() {
        let (cmd_tx, cmd_rx) = bounded(1);
        let mut notice = Some("stale".to_string());

        dispatch_backend_command(&cmd_tx, BackendCommand::StartProcessing, &mut notice);

        assert_eq!(notice, None);
        assert_eq!(cmd_rx.try_recv(), Ok(BackendCommand::StartProcessing));
    }

    #[test]
    fn full_queue_sets_retry_notice() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut notice = None;

        dispatch_backend_command(&cmd_tx, BackendCommand::StartProcessing, &mut notice);
        dispatch_backend_command(&cmd_tx, BackendCommand::StartProcessing, &mut notice);

        assert_eq!(
            notice.as_deref(),
            Some("Processing queue is full; please retry")
        );
    }

    #[test]
    fn disconnected_queue_sets_restart_notice() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let mut notice = None;

        dispatch_backend_command(&cmd_tx, BackendCommand::StartProcessing, &mut notice);

        assert_eq!(
            notice.as_deref(),
            Some("Order processor stopped; restart the kiosk")
        );
    }
}
