//! Batch runner — JSON requests in, JSON outcomes out
//!
//! cipher_batch [requests.json]   read a JSON array of requests (stdin if omitted)
//! cipher_batch --generate-keys   print a rotor request with random keys from `[rotor]`

use std::io::Read;

use anyhow::{Context, Result};
use classical_cipher_engine::{load_config, run_batch, BatchOutcome, CipherRequest, Mode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = load_config();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--generate-keys") {
        let rotor = &config.rotor;
        let request = rotor
            .random_request("", Mode::Encrypt)
            .context("invalid [rotor] settings in config")?;
        info!(
            rotor_count = rotor.rotor_count,
            start_position = rotor.start_position,
            alphabet_length = rotor.alphabet_length,
            "generated rotor keys"
        );
        println!("{}", to_json(&request, config.output.pretty)?);
        return Ok(());
    }

    let input = match arg.as_deref() {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read requests from stdin")?;
            buf
        }
    };

    let requests: Vec<CipherRequest> =
        serde_json::from_str(&input).context("requests must be a JSON array of cipher requests")?;
    info!("Running {} request(s)", requests.len());

    let mut outcomes = run_batch(&requests);
    for (req, outcome) in requests.iter().zip(&mut outcomes) {
        match outcome {
            BatchOutcome::Ok(out) => {
                if !config.output.include_steps {
                    out.steps.clear();
                }
            }
            BatchOutcome::Error(msg) => warn!(cipher = req.name(), "{msg}"),
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    println!("{}", to_json(&outcomes, config.output.pretty)?);
    info!("Done: {} ok, {failed} failed", outcomes.len() - failed);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
