//! errorsig CLI — resolve Solidity custom error selectors from the terminal.
//!
//! # Commands
//! ```text
//! errorsig resolve <SELECTOR>... [-c <candidates.json>]... [--no-standard] [--json]
//! errorsig table   [-c <candidates.json>]... [--no-standard] [--json]
//! errorsig hash    <SIGNATURE> [--json]
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use errorsig_core::{CandidateError, CandidateSet};
use errorsig_evm::standard_errors;

mod cmd_hash;
mod cmd_resolve;
mod cmd_table;
mod logging;

#[derive(Parser)]
#[command(
    name = "errorsig",
    about = "Resolve Solidity custom error selectors against known signatures",
    long_about = "
errorsig hashes candidate error signatures with keccak256 and reports which
one produced a 4-byte selector. Candidates are the bundled standard errors
(Error(string), Panic(uint256), OpenZeppelin v5) followed by every
--candidates file, in order. The first match wins.

ENVIRONMENT VARIABLES:
  RUST_LOG    Log filter, overrides -v
",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more 4-byte selectors
    Resolve {
        /// Selectors to resolve, e.g. 0x025dbdd4 (prefix optional)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
        #[command(flatten)]
        candidates: CandidateArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the selector of every candidate signature
    Table {
        #[command(flatten)]
        candidates: CandidateArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Hash a signature or declaration and show its selector
    Hash {
        /// Canonical signature or declaration, e.g. "error Foo(address owner)"
        signature: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct CandidateArgs {
    /// JSON candidate file (array of signatures or {"name", "signatures"})
    #[arg(short = 'c', long = "candidates", value_name = "FILE")]
    files: Vec<PathBuf>,
    /// Do not include the bundled standard errors
    #[arg(long)]
    no_standard: bool,
}

impl CandidateArgs {
    /// Standard errors (unless disabled) followed by each file, in order.
    fn load(&self) -> Result<CandidateSet> {
        let mut set = if self.no_standard {
            CandidateSet::new()
        } else {
            standard_errors()
        };
        for path in &self.files {
            let file = CandidateSet::load_file(path)
                .with_context(|| format!("loading candidates from {}", path.display()))?;
            tracing::info!(
                file = %path.display(),
                count = file.len(),
                "loaded candidate file"
            );
            set.extend(file);
        }
        if set.is_empty() {
            return Err(CandidateError::Empty)
                .context("no candidates: pass --candidates or drop --no-standard");
        }
        Ok(set)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&logging::LogConfig::from_verbosity(cli.verbose, cli.log_json));

    match cli.command {
        Commands::Resolve { selectors, candidates, json } => {
            cmd_resolve::run(&selectors, candidates.load()?, json)
        }

        Commands::Table { candidates, json } => cmd_table::run(&candidates.load()?, json),

        Commands::Hash { signature, json } => cmd_hash::run(&signature, json),
    }
}
