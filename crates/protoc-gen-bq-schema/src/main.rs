//! protoc-gen-bq-schema
//!
//! `protoc` plugin emitting one BigQuery schema (`<package>/<table>.schema`)
//! per message annotated with `gen_bq_schema.bigquery_opts.table_name`.
//!
//! ```text
//! protoc --bq-schema_out=out/ --bq-schema_opt=single-message foo.proto
//! ```
//!
//! The request is read from stdin and the response written to stdout unless
//! `--request` / `--response` point at files, which is handy for replaying a
//! captured request. Logs go to stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prost::Message;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "protoc-gen-bq-schema")]
#[command(author, version, about = "Generate BigQuery schemas from protobuf messages")]
struct Cli {
    /// Read the encoded CodeGeneratorRequest from this file instead of stdin.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Write the encoded CodeGeneratorResponse to this file instead of stdout.
    #[arg(long)]
    response: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `bq_schema_core=trace`.
    #[arg(long, env = "BQ_SCHEMA_LOG", default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let input = read_request(cli.request.as_ref())?;
    let response = bq_schema_core::generate_from_bytes(&input);

    if let Some(error) = &response.error {
        tracing::warn!(%error, "returning error to protoc");
    }
    tracing::debug!(files = response.file.len(), "writing response");

    write_response(cli.response.as_ref(), &response.encode_to_vec())
}

fn read_request(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read request {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read request from stdin")?;
            Ok(buf)
        }
    }
}

fn write_response(path: Option<&PathBuf>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("failed to write response {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .context("failed to write response to stdout")
        }
    }
}
