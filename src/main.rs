use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sealpost_lib::bootstrap::{init_tracing_subscriber, resolve_config, run_bootstrap};
use sealpost_lib::RunOutcome;

#[derive(Parser)]
#[command(name = "sealpost")]
#[command(about = "Decide where the Sealpost client starts", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base directory for session and account data
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config, cli.data_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing_subscriber(&config) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    match run_bootstrap(&config).await {
        Ok(RunOutcome::Navigated(route)) => {
            println!("{route}");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Reported(notice)) => {
            eprintln!("error ({:?}): {}", notice.kind, notice.message);
            ExitCode::FAILURE
        }
        Ok(RunOutcome::Skipped) => {
            println!("automatic start-up disabled");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("bootstrap failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}
