//! Remove batch — delete each selected image in turn.

use tracing::{info, warn};

use super::outcome::{ActionKind, ActionReport, Effect, ItemOutcome};
use crate::client::docker::DockerOps;
use crate::confirm::gate::confirm;
use crate::confirm::provider::ConfirmOps;
use crate::docker::inventory::RemovalEntry;

/// Confirm, then remove every image in `ids`. Duplicates are removed twice;
/// the second attempt fails and is recorded like any other error.
pub async fn remove_images(
    docker: &dyn DockerOps,
    provider: &mut dyn ConfirmOps,
    ids: &[String],
    assume_yes: bool,
) -> ActionReport {
    let gate = confirm(provider, ActionKind::Delete, ids.len(), assume_yes).await;
    if !gate.proceeds() {
        return ActionReport::skipped(ActionKind::Delete, gate);
    }

    let mut outcomes = Vec::with_capacity(ids.len());
    for id in ids {
        let result = docker.remove_image(id).await;
        if let Ok(entries) = &result {
            for entry in entries {
                match entry {
                    RemovalEntry::Deleted(deleted) => info!(image_id = %id, "DELETED: {}", deleted),
                    RemovalEntry::Untagged(reference) => info!(image_id = %id, "UNTAGGED: {:?}", reference),
                }
            }
        }
        outcomes.push(ItemOutcome {
            id: id.clone(),
            result: result.map(Effect::Removed),
        });
    }

    let report = ActionReport {
        kind: ActionKind::Delete,
        gate,
        outcomes,
    };
    for (id, err) in report.errors() {
        warn!(image_id = %id, error = %err, "Failed to delete image");
    }
    report
}
