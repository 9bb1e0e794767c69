// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use rim_coserv::pipeline;
use rim_coserv::rim::{RimServiceClient, RimServiceConfig, DEFAULT_RIM_SERVICE_URL};
use rim_coserv::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, long_about = None,
    about = "Fetch a RIM from the RIM service and transplant the reference \
    values of its CoMID tags into a CoSERV result set")]
struct Cli {
    /// RIM identifier
    #[arg(long, value_name = "rim_identifier",
        value_parser = clap::builder::NonEmptyStringValueParser::new())]
    rimid: String,

    /// Base URL of the RIM service
    #[arg(long, env = "RIM_SERVICE_URL", default_value = DEFAULT_RIM_SERVICE_URL)]
    service_url: String,

    /// Write the CBOR-encoded CoSERV result set to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Attach the signed CoRIM to the result set as a source artifact
    #[arg(long)]
    with_source: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Accept the single-dash `-rimid` spelling as an alias of `--rimid`
fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|a| {
            if a == "-rimid" || a.starts_with("-rimid=") {
                format!("-{a}")
            } else {
                a
            }
        })
        .collect()
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<usize, Error> {
    let client = RimServiceClient::new(&RimServiceConfig::new(&cli.service_url))?;

    let rs = pipeline::fetch_result_set(&client, &cli.rimid, cli.with_source).await?;

    if let Some(path) = &cli.output {
        tokio::fs::write(path, rs.to_cbor()?).await?;
        info!(path = %path.display(), "wrote CoSERV result set");
    }

    Ok(rs.len())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args()));

    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(n) => {
            info!(reference_values = n, "result set complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
