//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "todo-server")]
#[command(version, about = "GraphQL API over a todo list stored in a JSON file")]
pub struct Args {
    /// JSON file holding the todo list (read at startup, rewritten on every mutation)
    #[arg(long, env = "DATA_FILE", required_unless_present = "print_schema")]
    pub data_file: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, default_value = "4000")]
    pub port: u16,

    /// Print the GraphQL schema (SDL) and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Args {
    pub fn addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.bind, self.port);
        raw.parse::<SocketAddr>().with_context(|| format!("parse listen address {raw}"))
    }
}

/// Load `.env` into the process environment. A missing file is not an error.
///
/// Runs before logging is initialised, so the caller reports the outcome.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
