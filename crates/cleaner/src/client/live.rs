//! Live — implements `DockerOps` for the real Bollard-backed `DockerClient`.

use crate::client::docker::{DockerFuture, DockerOps};
use crate::docker::client::DockerClient;
use crate::docker::inventory::{ContainerInfo, ImageInfo, RemovalEntry};

impl DockerOps for DockerClient {
    fn system_time(&self) -> DockerFuture<'_, i64> {
        Box::pin(self.system_time())
    }

    fn list_running_containers(&self) -> DockerFuture<'_, Vec<ContainerInfo>> {
        Box::pin(self.list_running_containers())
    }

    fn list_images(&self) -> DockerFuture<'_, Vec<ImageInfo>> {
        Box::pin(self.list_images())
    }

    fn stop_container<'a>(&'a self, container_id: &'a str, grace_secs: u32) -> DockerFuture<'a, ()> {
        Box::pin(self.stop_container(container_id, grace_secs))
    }

    fn remove_image<'a>(&'a self, image_id: &'a str) -> DockerFuture<'a, Vec<RemovalEntry>> {
        Box::pin(self.remove_image(image_id))
    }
}
