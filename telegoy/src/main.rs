//! telegoy binary: `send` uploads files, `doctor` checks the environment.

use anyhow::Result;
use clap::Parser;
use telegoy::{doctor, init_tracing, load_settings, run_send, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Send {
            files,
            config,
            dry_run,
        } => {
            let settings = load_settings(config)?;
            init_tracing(settings.log_file.as_deref())?;
            run_send(settings, files, dry_run).await
        }
        Commands::Doctor { config, online } => {
            init_tracing(None)?;
            let report = doctor::run(config.into_overrides(), online).await;
            print!("{}", report);
            if !report.passed() {
                anyhow::bail!("doctor found problems");
            }
            Ok(())
        }
    }
}
