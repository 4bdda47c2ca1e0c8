use std::time::Duration;

use clap::{ArgAction, Parser};
use thiserror::Error;

pub const DEFAULT_DOCKER_URL: &str = "unix:///var/run/docker.sock";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid duration {value:?} for -{flag}: {reason}")]
    InvalidDuration {
        flag: &'static str,
        value: String,
        reason: String,
    },
    #[error("unsupported docker endpoint {0:?} (expected unix://, tcp:// or http://)")]
    UnsupportedEndpoint(String),
}

/// Raw command line, exactly as the operator typed it.
///
/// Every flag also works in Go style with a single dash (`-clean-old 24h`).
#[derive(Debug, Clone, Parser)]
#[command(
    name = "docker-cleaner",
    about = "Stop long-running containers and delete old or untagged images"
)]
pub struct Cli {
    /// Connection to Docker.
    #[arg(long, value_name = "URL", default_value = DEFAULT_DOCKER_URL)]
    pub docker: String,

    /// Delete all images older than this. Use units: 'h','m','s'
    #[arg(long = "clean-old", value_name = "DURATION")]
    pub clean_old: Option<String>,

    /// Delete all untagged images. (<none>:<none>)
    #[arg(
        long = "clean-none",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub clean_none: bool,

    /// Stop all containers that are running longer than this. Use units: 'h','m','s'
    #[arg(long = "stop-old", value_name = "DURATION")]
    pub stop_old: Option<String>,

    /// Do not require confirmation.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub yes: bool,
}

/// Where the daemon listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Local unix socket path, without the `unix://` scheme.
    Socket(String),
    /// `host:port` or `http://host:port`, as bollard expects it.
    Http(String),
}

/// Validated, immutable options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerOptions {
    pub endpoint: Endpoint,
    pub clean_old: Option<Duration>,
    pub clean_none: bool,
    pub stop_old: Option<Duration>,
    pub assume_yes: bool,
}

impl CleanerOptions {
    /// True when at least one of `-clean-old`, `-clean-none`, `-stop-old` was given.
    pub fn has_action(&self) -> bool {
        self.clean_none || self.clean_old.is_some() || self.stop_old.is_some()
    }

    /// Images only need listing when some image rule is active.
    pub fn cleans_images(&self) -> bool {
        self.clean_none || self.clean_old.is_some()
    }
}

impl Default for CleanerOptions {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::Socket("/var/run/docker.sock".to_string()),
            clean_old: None,
            clean_none: false,
            stop_old: None,
            assume_yes: false,
        }
    }
}
