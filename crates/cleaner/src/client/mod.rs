//! Client module — the narrow Docker interface the cleaner depends on.

pub mod docker;
pub mod fake;
pub mod live;

pub use docker::DockerOps;
