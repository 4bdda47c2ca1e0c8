//! Run — one linear pass: clock → containers → images → report.

use tracing::{info, warn};

use crate::action::outcome::{ActionReport, RunReport};
use crate::action::{remove_images, stop_containers};
use crate::client::docker::DockerOps;
use crate::conf::CleanerOptions;
use crate::confirm::provider::ConfirmOps;
use crate::error::CleanerError;
use crate::filter::{select_containers, select_images, Selection};

fn into_ids(selections: Vec<Selection>) -> Vec<String> {
    selections.into_iter().map(|s| s.id).collect()
}

/// Execute the cleanup described by `options` against `docker`.
///
/// Only the clock query and the two list calls are fatal. Stop and remove
/// failures end up in the returned report.
pub async fn run(
    options: &CleanerOptions,
    docker: &dyn DockerOps,
    provider: &mut dyn ConfirmOps,
) -> Result<RunReport, CleanerError> {
    let mut report = RunReport::default();
    if !options.has_action() {
        return Ok(report);
    }

    // Daemon clock, so ages are immune to skew with this host.
    let now = docker.system_time().await.map_err(CleanerError::SystemTime)?;

    if let Some(stop_old) = options.stop_old {
        info!(
            "Stopping containers that are running longer than: {}",
            humantime::format_duration(stop_old)
        );
        let running = docker
            .list_running_containers()
            .await
            .map_err(CleanerError::ListContainers)?;
        let to_stop = into_ids(select_containers(&running, now, stop_old));
        report.stop = Some(stop_containers(docker, provider, &to_stop, options.assume_yes).await);
    }

    if options.cleans_images() {
        let images = docker.list_images().await.map_err(CleanerError::ListImages)?;
        let to_delete = into_ids(select_images(&images, now, options.clean_old, options.clean_none));
        report.remove = Some(remove_images(docker, provider, &to_delete, options.assume_yes).await);
    }

    Ok(report)
}

/// Final summary line per category. Errors were already logged by each batch.
pub fn log_summary(report: &RunReport) {
    for action in report.reports() {
        log_action(action);
    }
    let errors = report.error_count();
    if errors > 0 {
        warn!(errors, "Finished with errors");
    }
}

fn log_action(action: &ActionReport) {
    info!(
        action = action.kind.verb(),
        gate = ?action.gate,
        succeeded = action.succeeded(),
        failed = action.failed(),
        "Done with {}",
        action.kind.noun()
    );
}
