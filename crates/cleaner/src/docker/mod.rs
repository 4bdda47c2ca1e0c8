//! Docker module — bollard-backed client and the summary types it produces.

pub mod client;
pub mod container;
pub mod image;
pub mod inventory;
pub mod system;

pub use client::{DockerClient, DockerError};
pub use inventory::{ContainerInfo, ImageInfo, RemovalEntry};
