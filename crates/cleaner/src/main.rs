use clap::CommandFactory;

use cleaner::conf::Cli;
use cleaner::confirm::StdinConfirm;
use cleaner::runtime::{boot, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();

    let Some(options) = boot::options(Cli::from_env_args())? else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let docker = boot::connect(&options).await?;
    let mut provider = StdinConfirm::new();
    let report = run::run(&options, &docker, &mut provider).await.map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    // Per-item failures are reported, never turned into a failing exit code.
    run::log_summary(&report);
    Ok(())
}
