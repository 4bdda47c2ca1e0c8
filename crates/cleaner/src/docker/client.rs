//! Docker client — core struct, constructor, error types.
//!
//! Domain methods live in sibling modules (`container`, `image`, `system`)
//! which add `impl DockerClient` blocks.

use bollard::Docker;
use thiserror::Error;

use crate::conf::Endpoint;

/// Seconds bollard waits on a single request before giving up.
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Error, Debug)]
pub enum DockerError {
    #[error("Docker connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Container not found: {0}")]
    ContainerNotFound(String),
    #[error("Image not found: {0}")]
    ImageNotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid daemon system time: {0}")]
    InvalidSystemTime(String),
    #[error("Bollard error: {0}")]
    BollardError(#[from] bollard::errors::Error),
}

#[derive(Debug, Clone)]
pub struct DockerClient {
    /// The bollard Docker client.  `pub(super)` so that domain modules
    /// in sibling files can call bollard APIs directly.
    pub(super) client: Docker,
}

impl DockerClient {
    /// Connect to the daemon behind `endpoint`.
    ///
    /// bollard connects lazily, so this only fails on a malformed address;
    /// an unreachable daemon surfaces on the first request.
    pub fn new(endpoint: &Endpoint) -> Result<Self, DockerError> {
        let connection = match endpoint {
            Endpoint::Socket(path) => {
                Docker::connect_with_socket(path, REQUEST_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
                    .map_err(|e| DockerError::ConnectionFailed(e.to_string()))?
            }
            Endpoint::Http(addr) => {
                Docker::connect_with_http(addr, REQUEST_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
                    .map_err(|e| DockerError::ConnectionFailed(e.to_string()))?
            }
        };

        Ok(DockerClient { client: connection })
    }

    /// Round-trip to the daemon so connection problems are reported up front.
    pub async fn ping(&self) -> Result<(), DockerError> {
        self.client
            .ping()
            .await
            .map(|_| ())
            .map_err(|e| DockerError::ConnectionFailed(e.to_string()))
    }
}

/// Map a bollard error for a container call, turning a 404 into
/// [`DockerError::ContainerNotFound`].
pub(super) fn container_error(container_id: &str, err: bollard::errors::Error) -> DockerError {
    match err {
        bollard::errors::Error::DockerResponseServerError { status_code: 404, .. } => {
            DockerError::ContainerNotFound(container_id.to_string())
        }
        other => DockerError::BollardError(other),
    }
}

/// Map a bollard error for an image call. 404 means the image is already gone,
/// 409 means it is still referenced by a container or another tag.
pub(super) fn image_error(image_id: &str, err: bollard::errors::Error) -> DockerError {
    match err {
        bollard::errors::Error::DockerResponseServerError { status_code: 404, .. } => {
            DockerError::ImageNotFound(image_id.to_string())
        }
        bollard::errors::Error::DockerResponseServerError { status_code: 409, message } => {
            DockerError::Conflict(format!("{}: {}", image_id, message))
        }
        other => DockerError::BollardError(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(status_code: u16) -> bollard::errors::Error {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message: "daemon said no".to_string(),
        }
    }

    #[test]
    fn test_container_error_maps_404() {
        let err = container_error("abc123", server_error(404));
        assert!(matches!(err, DockerError::ContainerNotFound(ref id) if id == "abc123"));
    }

    #[test]
    fn test_container_error_passes_through_500() {
        let err = container_error("abc123", server_error(500));
        assert!(matches!(err, DockerError::BollardError(_)));
    }

    #[test]
    fn test_image_error_maps_404_and_409() {
        let err = image_error("sha256:dead", server_error(404));
        assert!(matches!(err, DockerError::ImageNotFound(ref id) if id == "sha256:dead"));

        let err = image_error("sha256:beef", server_error(409));
        match err {
            DockerError::Conflict(msg) => {
                assert!(msg.contains("sha256:beef"));
                assert!(msg.contains("daemon said no"));
            }
            other => panic!("Expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display_carries_identifier() {
        let err = DockerError::ImageNotFound("sha256:abc".to_string());
        assert_eq!(err.to_string(), "Image not found: sha256:abc");
    }
}
