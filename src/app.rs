use std::path::PathBuf;

use tgram_core::config::{Config, OutputFormat};
use tgram_core::{Result, TgramError};
use tgram_types::Update;
use tracing::{error, info, warn};

use crate::cli::{Cli, Command};
use crate::payload;

/// Run the selected command. `Ok(false)` means some input failed.
pub fn run(cli: &Cli, config: &Config) -> Result<bool> {
    let inputs: Vec<Option<PathBuf>> = if cli.command.files().is_empty() {
        vec![None]
    } else {
        cli.command.files().iter().cloned().map(Some).collect()
    };

    let mut ok = true;
    for input in &inputs {
        let outcome = match &cli.command {
            Command::Inspect { .. } => inspect(config, input.as_deref()),
            Command::Check { .. } => check(config, input.as_deref()),
        };
        if let Err(e) = outcome {
            error!("{e}");
            ok = false;
        }
    }
    Ok(ok)
}

fn inspect(config: &Config, path: Option<&std::path::Path>) -> Result<()> {
    let (origin, text) = payload::read_input(path)?;
    let updates = payload::decode(config.decode.payload, &origin, &text)?;
    info!(origin = %origin, count = updates.len(), "decoded");

    match config.output.format {
        OutputFormat::Text => {
            for update in &updates {
                println!("{}", summary(update));
            }
        }
        OutputFormat::Json => {
            let encoded = if config.output.pretty {
                serde_json::to_string_pretty(&updates)
            } else {
                serde_json::to_string(&updates)
            };
            let encoded = encoded.map_err(|source| TgramError::Encode { origin, source })?;
            println!("{encoded}");
        }
    }
    Ok(())
}

fn check(config: &Config, path: Option<&std::path::Path>) -> Result<()> {
    let (origin, text) = payload::read_input(path)?;
    let updates = payload::decode(config.decode.payload, &origin, &text)?;

    let mut first_failure = None;
    let mut violation_count = 0;
    for update in &updates {
        let violations = update.check_envelope();
        for v in &violations {
            warn!(origin = %origin, update_id = update.update_id, "{v}");
        }
        violation_count += violations.len();
        if !violations.is_empty() && first_failure.is_none() {
            first_failure = Some(TgramError::Envelope {
                update_id: update.update_id,
                violations,
            });
        }
    }

    println!("{origin}: {} updates, {violation_count} violations", updates.len());
    match first_failure {
        Some(err) if config.decode.strict => Err(err),
        _ => Ok(()),
    }
}

/// One line describing an update: id, type, message kind and chat.
pub fn summary(update: &Update) -> String {
    let mut line = format!("{} {}", update.update_id, update.update_type());
    if let Some(message) = update.message() {
        line.push_str(&format!(" kind={}", message.key()));
    }
    if let Some(chat) = update.chat() {
        line.push_str(&format!(" chat={}:{}", chat.kind(), chat.id()));
    }
    line
}
