//! # BFHL Client
//!
//! Command line front end for `/bfhl`.
//!
//! ```sh
//! bfhl-client submit '{"data": ["A", "C", "z"]}' --field alphabets --field highest_alphabet
//! echo '{"data": ["1", "2"]}' | bfhl-client submit --field numbers
//! bfhl-client probe
//! ```
//!
//! Input is validated locally first, nothing is sent for bad JSON. Field selection
//! only filters what the server already returned.
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use bank::payloads::{BfhlResponse, FailureResponse, InputPayload, ProbeResponse};
use clap::{Parser, Subcommand};
use reqwest::Client;
use serde_json::Value;

mod display;
mod input;

use display::{Field, filter_response};
use input::parse_input;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a `{"data": [...]}` payload
    Submit {
        /// Inline JSON, read from --file or stdin when absent
        json: Option<String>,

        #[arg(long, conflicts_with = "json")]
        file: Option<PathBuf>,

        /// Response fields to display
        #[arg(long = "field", value_enum)]
        fields: Vec<Field>,
    },

    /// Fetch the operation code
    Probe,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();
    let endpoint = format!("{}/bfhl", args.base_url.trim_end_matches('/'));

    match args.command {
        Command::Submit { json, file, fields } => {
            let raw = read_raw(json, file)?;

            let payload = match parse_input(&raw) {
                Ok(payload) => payload,
                Err(e) => bail!("{e}"),
            };

            let response = submit(&client, &endpoint, &payload).await?;

            println!("{}", response.roll_number);
            println!("API Response");

            for line in filter_response(&response, &fields) {
                println!("{line}");
            }
        }
        Command::Probe => {
            let probe: ProbeResponse = client
                .get(&endpoint)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            println!("operation_code: {}", probe.operation_code);
        }
    }

    Ok(())
}

fn read_raw(json: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(json) = json {
        return Ok(json);
    }

    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    Ok(raw)
}

async fn submit(client: &Client, endpoint: &str, payload: &InputPayload) -> Result<BfhlResponse> {
    let response = client.post(endpoint).json(payload).send().await?;
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .with_context(|| format!("Unexpected response ({status})"))?;

    if body.get("is_success") == Some(&Value::Bool(true)) {
        return Ok(serde_json::from_value(body)?);
    }

    match serde_json::from_value::<FailureResponse>(body) {
        Ok(failure) => bail!("{} ({status})", failure.message),
        Err(_) => bail!("Unexpected response ({status})"),
    }
}
