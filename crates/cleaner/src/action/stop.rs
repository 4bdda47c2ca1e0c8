//! Stop batch — stop each selected container in turn.

use tracing::{info, warn};

use super::outcome::{ActionKind, ActionReport, Effect, ItemOutcome};
use crate::client::docker::DockerOps;
use crate::confirm::gate::confirm;
use crate::confirm::provider::ConfirmOps;

/// Seconds the daemon waits after SIGTERM before it kills the container.
pub const STOP_GRACE_SECS: u32 = 10;

/// Confirm, then stop every container in `ids`. A failed stop is recorded
/// and the batch moves on to the next id.
pub async fn stop_containers(
    docker: &dyn DockerOps,
    provider: &mut dyn ConfirmOps,
    ids: &[String],
    assume_yes: bool,
) -> ActionReport {
    let gate = confirm(provider, ActionKind::Stop, ids.len(), assume_yes).await;
    if !gate.proceeds() {
        return ActionReport::skipped(ActionKind::Stop, gate);
    }

    let mut outcomes = Vec::with_capacity(ids.len());
    for id in ids {
        let result = docker.stop_container(id, STOP_GRACE_SECS).await;
        if result.is_ok() {
            info!(container_id = %id, "STOPPED: {}", id);
        }
        outcomes.push(ItemOutcome {
            id: id.clone(),
            result: result.map(|()| Effect::Stopped),
        });
    }

    let report = ActionReport {
        kind: ActionKind::Stop,
        gate,
        outcomes,
    };
    for (id, err) in report.errors() {
        warn!(container_id = %id, error = %err, "Failed to stop container");
    }
    report
}
