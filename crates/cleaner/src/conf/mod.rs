//! Conf module — command-line model, argument intake, and the duration grammar.

pub mod model;
pub mod load;
pub mod duration;

pub use model::{Cli, CleanerOptions, ConfigError, Endpoint, DEFAULT_DOCKER_URL};
