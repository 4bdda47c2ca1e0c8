//! Container domain — list running containers, stop.

use super::client::{container_error, DockerClient, DockerError};
use super::inventory::ContainerInfo;

use bollard::query_parameters::{ListContainersOptions, StopContainerOptions};

impl DockerClient {
    /// List running containers only.
    pub async fn list_running_containers(&self) -> Result<Vec<ContainerInfo>, DockerError> {
        let options = Some(ListContainersOptions {
            all: false,
            ..Default::default()
        });
        let containers = self.client.list_containers(options).await?;
        Ok(containers.into_iter().map(ContainerInfo::from).collect())
    }

    /// Stop a running container, letting the daemon wait `grace_secs`
    /// before it kills the process.
    pub async fn stop_container(
        &self,
        container_id: &str,
        grace_secs: u32,
    ) -> Result<(), DockerError> {
        let options = Some(StopContainerOptions {
            t: Some(grace_secs as i32),
            ..Default::default()
        });

        self.client
            .stop_container(container_id, options)
            .await
            .map_err(|e| container_error(container_id, e))
    }
}
