//! Fatal errors — anything here ends the run with a nonzero exit.

use thiserror::Error;

use crate::conf::ConfigError;
use crate::docker::client::DockerError;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Cannot connect to Docker: {0}")]
    Connect(#[source] DockerError),
    #[error("Cannot read daemon system time: {0}")]
    SystemTime(#[source] DockerError),
    #[error("Cannot list running containers: {0}")]
    ListContainers(#[source] DockerError),
    #[error("Cannot list images: {0}")]
    ListImages(#[source] DockerError),
}
