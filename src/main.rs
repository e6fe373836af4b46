mod app;
mod cli;
mod payload;

use std::process::ExitCode;

use clap::Parser;
use tgram_core::config::Config;
use tgram_core::logging;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("fatal: failed to load config: {e}");
        std::process::exit(1);
    });

    logging::init(&config.logging);
    tracing::debug!(strict = config.decode.strict, payload = ?config.decode.payload, "tgram starting");

    match app::run(&cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}
