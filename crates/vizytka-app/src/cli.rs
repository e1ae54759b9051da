//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Converts a phone roster text file into a vCard 2.1 (.vcf) file.
#[derive(Debug, Parser)]
#[command(name = "vizytka", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a roster file, replace the saved session list, and export it.
    Convert {
        /// Roster text file, one candidate contact per line.
        input: PathBuf,
        /// Output .vcf path; defaults to the configured export path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-export the saved session list without reading a roster.
    Export {
        /// Output .vcf path; defaults to the configured export path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete the saved session list.
    Clear,
}
