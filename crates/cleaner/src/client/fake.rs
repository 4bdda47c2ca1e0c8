//! Fake — test double for Docker operations.
//!
//! Provides a deterministic [`FakeDocker`] that implements [`DockerOps`]
//! using in-memory state. Every call is recorded so tests can assert on
//! exactly what would have reached the daemon.

use std::collections::HashSet;

use tokio::sync::Mutex;

use crate::client::docker::{DockerFuture, DockerOps};
use crate::docker::client::DockerError;
use crate::docker::inventory::{ContainerInfo, ImageInfo, RemovalEntry, UNTAGGED_SENTINEL};

// ── In-memory state ─────────────────────────────────────────────

/// A canned container for the fake store.
#[derive(Clone, Debug)]
pub struct FakeContainer {
    pub info: ContainerInfo,
    pub running: bool,
}

/// One recorded daemon call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FakeCall {
    SystemTime,
    ListContainers,
    ListImages,
    Stop { id: String, grace_secs: u32 },
    RemoveImage(String),
}

/// Which operations should fail regardless of state.
#[derive(Default)]
struct Failures {
    system_time: bool,
    list_containers: bool,
    list_images: bool,
    stop: HashSet<String>,
}

/// Mutable inner state protected by a mutex.
#[derive(Default)]
struct Inner {
    now: i64,
    containers: Vec<FakeContainer>,
    images: Vec<ImageInfo>,
    failures: Failures,
    calls: Vec<FakeCall>,
}

/// A fake Docker client for deterministic testing.
///
/// All methods operate on in-memory state. The builder methods allow
/// pre-populating containers and images before running test code.
pub struct FakeDocker {
    inner: Mutex<Inner>,
}

impl FakeDocker {
    /// Create an empty fake whose clock reads `now`.
    pub fn new(now: i64) -> Self {
        Self {
            inner: Mutex::new(Inner { now, ..Default::default() }),
        }
    }

    /// Seed a running container.
    pub async fn add_container(&self, id: &str, created_at: i64) {
        self.inner.lock().await.containers.push(FakeContainer {
            info: ContainerInfo {
                id: id.to_string(),
                created_at,
                status: "Up".to_string(),
            },
            running: true,
        });
    }

    /// Seed an image.
    pub async fn add_image(&self, id: &str, created_at: i64, repo_tags: &[&str]) {
        self.inner.lock().await.images.push(ImageInfo {
            id: id.to_string(),
            created_at,
            repo_tags: repo_tags.iter().map(|t| t.to_string()).collect(),
        });
    }

    /// Make the next `system_time` calls fail.
    pub async fn fail_system_time(&self) {
        self.inner.lock().await.failures.system_time = true;
    }

    /// Make container listing fail.
    pub async fn fail_list_containers(&self) {
        self.inner.lock().await.failures.list_containers = true;
    }

    /// Make image listing fail.
    pub async fn fail_list_images(&self) {
        self.inner.lock().await.failures.list_images = true;
    }

    /// Make stopping this container fail with a daemon error.
    pub async fn fail_stop(&self, container_id: &str) {
        self.inner.lock().await.failures.stop.insert(container_id.to_string());
    }

    /// Every call received so far, in order.
    pub async fn calls(&self) -> Vec<FakeCall> {
        self.inner.lock().await.calls.clone()
    }

    /// Only the calls that would change daemon state.
    pub async fn mutating_calls(&self) -> Vec<FakeCall> {
        self.calls()
            .await
            .into_iter()
            .filter(|c| matches!(c, FakeCall::Stop { .. } | FakeCall::RemoveImage(_)))
            .collect()
    }

    /// Whether the container is still running.
    pub async fn is_running(&self, container_id: &str) -> bool {
        self.inner
            .lock()
            .await
            .containers
            .iter()
            .any(|c| c.info.id == container_id && c.running)
    }

    /// Whether the image is still stored.
    pub async fn has_image(&self, image_id: &str) -> bool {
        self.inner.lock().await.images.iter().any(|i| i.id == image_id)
    }
}

fn unavailable(what: &str) -> DockerError {
    DockerError::ConnectionFailed(format!("fake daemon refused {}", what))
}

// ── DockerOps implementation ────────────────────────────────────

impl DockerOps for FakeDocker {
    fn system_time(&self) -> DockerFuture<'_, i64> {
        Box::pin(async {
            let mut state = self.inner.lock().await;
            state.calls.push(FakeCall::SystemTime);
            if state.failures.system_time {
                return Err(unavailable("/info"));
            }
            Ok(state.now)
        })
    }

    fn list_running_containers(&self) -> DockerFuture<'_, Vec<ContainerInfo>> {
        Box::pin(async {
            let mut state = self.inner.lock().await;
            state.calls.push(FakeCall::ListContainers);
            if state.failures.list_containers {
                return Err(unavailable("/containers/json"));
            }
            Ok(state
                .containers
                .iter()
                .filter(|c| c.running)
                .map(|c| c.info.clone())
                .collect())
        })
    }

    fn list_images(&self) -> DockerFuture<'_, Vec<ImageInfo>> {
        Box::pin(async {
            let mut state = self.inner.lock().await;
            state.calls.push(FakeCall::ListImages);
            if state.failures.list_images {
                return Err(unavailable("/images/json"));
            }
            Ok(state.images.clone())
        })
    }

    fn stop_container<'a>(&'a self, container_id: &'a str, grace_secs: u32) -> DockerFuture<'a, ()> {
        Box::pin(async move {
            let mut state = self.inner.lock().await;
            state.calls.push(FakeCall::Stop {
                id: container_id.to_string(),
                grace_secs,
            });
            if state.failures.stop.contains(container_id) {
                return Err(DockerError::Conflict(format!("cannot stop {}", container_id)));
            }
            match state.containers.iter_mut().find(|c| c.info.id == container_id) {
                Some(c) => {
                    c.running = false;
                    c.info.status = "Exited (0)".into();
                    Ok(())
                }
                None => Err(DockerError::ContainerNotFound(container_id.to_string())),
            }
        })
    }

    fn remove_image<'a>(&'a self, image_id: &'a str) -> DockerFuture<'a, Vec<RemovalEntry>> {
        Box::pin(async move {
            let mut state = self.inner.lock().await;
            state.calls.push(FakeCall::RemoveImage(image_id.to_string()));
            let Some(pos) = state.images.iter().position(|i| i.id == image_id) else {
                return Err(DockerError::ImageNotFound(image_id.to_string()));
            };

            let image = state.images.remove(pos);
            let mut entries: Vec<RemovalEntry> = image
                .repo_tags
                .into_iter()
                .filter(|t| t != UNTAGGED_SENTINEL)
                .map(RemovalEntry::Untagged)
                .collect();
            entries.push(RemovalEntry::Deleted(image.id));
            Ok(entries)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_running_hides_stopped() {
        let fake = FakeDocker::new(100);
        fake.add_container("a", 10).await;
        fake.add_container("b", 20).await;

        fake.stop_container("a", 10).await.unwrap();
        let running = fake.list_running_containers().await.unwrap();
        assert_eq!(running.len(), 1);
        assert_eq!(running[0].id, "b");
        assert!(!fake.is_running("a").await);
    }

    #[tokio::test]
    async fn test_stop_unknown_container() {
        let fake = FakeDocker::new(0);
        let err = fake.stop_container("ghost", 10).await.unwrap_err();
        assert!(matches!(err, DockerError::ContainerNotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_image_reports_untagged_and_deleted() {
        let fake = FakeDocker::new(0);
        fake.add_image("sha256:1", 0, &["app:v1", "app:latest"]).await;

        let entries = fake.remove_image("sha256:1").await.unwrap();
        assert_eq!(entries, vec![
            RemovalEntry::Untagged("app:v1".into()),
            RemovalEntry::Untagged("app:latest".into()),
            RemovalEntry::Deleted("sha256:1".into()),
        ]);
        assert!(!fake.has_image("sha256:1").await);
    }

    #[tokio::test]
    async fn test_second_remove_errors() {
        let fake = FakeDocker::new(0);
        fake.add_image("sha256:1", 0, &["<none>:<none>"]).await;

        assert_eq!(
            fake.remove_image("sha256:1").await.unwrap(),
            vec![RemovalEntry::Deleted("sha256:1".into())]
        );
        assert!(matches!(
            fake.remove_image("sha256:1").await,
            Err(DockerError::ImageNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_calls_are_recorded_in_order() {
        let fake = FakeDocker::new(42);
        assert_eq!(fake.system_time().await.unwrap(), 42);
        fake.list_images().await.unwrap();
        let _ = fake.stop_container("x", 10).await;

        assert_eq!(fake.calls().await, vec![
            FakeCall::SystemTime,
            FakeCall::ListImages,
            FakeCall::Stop { id: "x".into(), grace_secs: 10 },
        ]);
        assert_eq!(fake.mutating_calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        let fake = FakeDocker::new(0);
        fake.fail_system_time().await;
        fake.fail_list_containers().await;
        fake.fail_list_images().await;

        assert!(fake.system_time().await.is_err());
        assert!(fake.list_running_containers().await.is_err());
        assert!(fake.list_images().await.is_err());
    }
}
