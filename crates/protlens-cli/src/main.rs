//! Protlens CLI - terminal front end for the structure and sequence backend.
//!
//! # Usage
//!
//! ```bash
//! # Download a structure (stdout or file)
//! protlens fetch 1crn
//! protlens fetch 1crn --out 1crn.pdb
//!
//! # Analyze a sequence, inline, from a FASTA file, or from stdin
//! protlens analyze MVLSPADKTNVKAAW
//! protlens analyze --file query.fasta --json
//! cat query.fasta | protlens analyze
//!
//! # Point at another backend
//! protlens --api-base http://lab-server:8000 fetch 4hhb
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use protlens_core::config::API_BASE;
use protlens_core::HttpBackend;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Protlens structure and sequence CLI.
///
/// Talks to the same backend as the Protlens web app.
#[derive(Parser)]
#[command(name = "protlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base address
    #[arg(long, global = true, default_value = API_BASE)]
    api_base: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Download a structure file by PDB identifier
    Fetch {
        /// PDB identifier (e.g. 1crn)
        id: String,

        /// Write the structure to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Submit a sequence for analysis
    Analyze {
        /// Raw sequence or FASTA text (read from stdin when omitted)
        sequence: Option<String>,

        /// Read the sequence from a file
        #[arg(short, long, conflicts_with = "sequence")]
        file: Option<PathBuf>,

        /// Output the metrics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let backend = HttpBackend::new(cli.api_base);

    match cli.command {
        Command::Fetch { id, out } => {
            let (id, payload) = commands::fetch(&backend, &id).await?;
            match out {
                Some(path) => {
                    commands::save_structure(&path, &payload)?;
                    eprintln!("{}", output::format_saved(&id, &payload, &path));
                }
                None => println!("{}", payload.as_str()),
            }
        }
        Command::Analyze {
            sequence,
            file,
            json,
        } => {
            let raw = commands::read_sequence(sequence, file.as_deref())?;
            let table = commands::analyze(&backend, &raw).await?;

            let output = if json {
                output::format_json(&table)
            } else {
                output::format_human(&table)
            };
            println!("{}", output);
        }
    }

    Ok(())
}
