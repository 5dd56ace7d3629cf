use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr so they never mix with filtered output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = args
        .resolve()
        .and_then(|options| cli::execute(&options, tflog_filter::filter_logs));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
