//! Docker trait — the only daemon operations the cleaner uses.
//!
//! `live.rs` provides the real Bollard-backed implementation.
//! `fake.rs` provides a test double.

use std::future::Future;
use std::pin::Pin;

use crate::docker::client::DockerError;
use crate::docker::inventory::{ContainerInfo, ImageInfo, RemovalEntry};

/// Boxed future returned by every [`DockerOps`] method.
pub type DockerFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DockerError>> + Send + 'a>>;

/// Unified async interface over the Docker daemon.
///
/// Object-safe thanks to `Pin<Box<…>>` returns, so the pipeline can take
/// `&dyn DockerOps` and tests can hand it a fake.
pub trait DockerOps: Send + Sync {
    /// Daemon wall clock in epoch seconds.
    fn system_time(&self) -> DockerFuture<'_, i64>;

    fn list_running_containers(&self) -> DockerFuture<'_, Vec<ContainerInfo>>;

    fn list_images(&self) -> DockerFuture<'_, Vec<ImageInfo>>;

    fn stop_container<'a>(&'a self, container_id: &'a str, grace_secs: u32) -> DockerFuture<'a, ()>;

    fn remove_image<'a>(&'a self, image_id: &'a str) -> DockerFuture<'a, Vec<RemovalEntry>>;
}
