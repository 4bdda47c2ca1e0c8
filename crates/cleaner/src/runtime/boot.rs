//! Boot — logging init, option validation, Docker connection.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::{Cli, CleanerOptions, Endpoint};
use crate::docker::client::DockerClient;
use crate::error::CleanerError;

/// Initialise the tracing / logging subsystem. Logs go to stderr so the
/// confirmation prompt on stdout stays readable.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cleaner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Validate the command line. `Ok(None)` means no action flag was given and
/// the caller should print usage and exit successfully.
pub fn options(cli: Cli) -> Result<Option<CleanerOptions>, CleanerError> {
    if !cli.has_action() {
        return Ok(None);
    }

    let options = CleanerOptions::try_from(cli).map_err(|e| {
        error!("{}", e);
        CleanerError::from(e)
    })?;
    Ok(Some(options))
}

/// Connect to the daemon and make sure it answers.
pub async fn connect(options: &CleanerOptions) -> Result<DockerClient, CleanerError> {
    info!(
        "Connecting to Docker daemon at: {}",
        match &options.endpoint {
            Endpoint::Socket(path) => path.as_str(),
            Endpoint::Http(addr) => addr.as_str(),
        }
    );

    let fail = |e| {
        error!("Failed to connect to Docker: {}", e);
        CleanerError::Connect(e)
    };

    let client = DockerClient::new(&options.endpoint).map_err(fail)?;
    client.ping().await.map_err(fail)?;

    info!("Successfully connected to Docker daemon");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_from_args(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_action_yields_none() {
        assert!(options(cli(&["docker-cleaner"])).unwrap().is_none());
        assert!(options(cli(&["docker-cleaner", "-yes"])).unwrap().is_none());
        assert!(options(cli(&["docker-cleaner", "-docker", "tcp://h:2375"])).unwrap().is_none());
        // Endpoint is not validated when there is nothing to do.
        assert!(options(cli(&["docker-cleaner", "-docker", "ftp://x"])).unwrap().is_none());
    }

    #[test]
    fn test_action_yields_options() {
        let opts = options(cli(&["docker-cleaner", "-clean-none"])).unwrap().unwrap();
        assert!(opts.clean_none);
    }

    #[test]
    fn test_malformed_duration_is_fatal_even_without_other_flags() {
        let err = options(cli(&["docker-cleaner", "-clean-old", "forever"])).unwrap_err();
        assert!(matches!(err, CleanerError::Config(_)));
    }

    #[test]
    fn test_bad_endpoint_is_fatal() {
        let err = options(cli(&["docker-cleaner", "-clean-none", "-docker", "ftp://x"])).unwrap_err();
        assert!(matches!(err, CleanerError::Config(_)));
    }
}
