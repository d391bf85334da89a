mod cli;
mod commands;
mod error;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use coinscope_core::{ClientConfig, CoinGeckoClient};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(error) => {
            let printed = error.print();
            if let Err(print_error) = &printed {
                warn!(%print_error, "failed to write usage text");
            }
            return ExitCode::from(usage_exit_code(&error, &printed));
        }
    };

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let invocation = cli.invocation()?;
    let config = ClientConfig::from_env();
    let client = CoinGeckoClient::from_config(&config)?;

    let output = commands::run(&invocation, &client).await?;
    let rendered = output::render(&output, cli.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Help and version exit 0 once written; usage errors and unwritable output exit 1.
fn usage_exit_code(error: &clap::Error, printed: &io::Result<()>) -> u8 {
    match printed {
        Ok(()) if !error.use_stderr() => 0,
        _ => 1,
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
