//! Load — turn argv into validated [`CleanerOptions`].

use std::ffi::OsString;

use clap::Parser;

use super::duration::parse_threshold;
use super::model::{Cli, CleanerOptions, ConfigError, Endpoint};

/// Long flags that may also be written with a single dash.
const LONG_FLAGS: &[&str] = &["docker", "clean-old", "clean-none", "stop-old", "yes", "help"];

/// Rewrite Go-style `-clean-old` into `--clean-old` so clap understands it.
/// Anything else, including values and short flags, passes through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                let body = s.strip_prefix('-').filter(|b| !b.starts_with('-'))?;
                let name = body.split('=').next().unwrap_or(body);
                LONG_FLAGS.contains(&name).then(|| OsString::from(format!("-{}", s)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

impl Cli {
    /// Parse the process arguments, accepting both `-flag` and `--flag`.
    pub fn from_env_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// True when at least one of `-clean-old`, `-clean-none`, `-stop-old` was given.
    /// An empty duration counts as not given.
    pub fn has_action(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        self.clean_none || set(&self.clean_old) || set(&self.stop_old)
    }

    /// Fallible variant used by tests.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

impl Endpoint {
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if let Some(path) = url.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(ConfigError::UnsupportedEndpoint(url.to_string()));
            }
            return Ok(Endpoint::Socket(path.to_string()));
        }
        if url.starts_with('/') {
            return Ok(Endpoint::Socket(url.to_string()));
        }
        if let Some(addr) = url.strip_prefix("tcp://") {
            return Ok(Endpoint::Http(format!("http://{}", addr)));
        }
        if url.starts_with("http://") {
            return Ok(Endpoint::Http(url.to_string()));
        }
        Err(ConfigError::UnsupportedEndpoint(url.to_string()))
    }
}

impl TryFrom<Cli> for CleanerOptions {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            endpoint: Endpoint::parse(&cli.docker)?,
            clean_old: parse_threshold("clean-old", cli.clean_old.as_deref())?,
            clean_none: cli.clean_none,
            stop_old: parse_threshold("stop-old", cli.stop_old.as_deref())?,
            assume_yes: cli.yes,
        })
    }
}
