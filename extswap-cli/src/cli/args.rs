use clap::{Parser, Subcommand};
use extswap_core::Suffix;
use std::path::PathBuf;

use super::types::OutputFormat;

/// Switch file extensions between two forms in bulk
#[derive(Parser, Debug)]
#[command(name = "extswap")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without a command, converts using the defaults from .extswap.toml (.js -> .gs when there is no config file)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Run in <PATH> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Report what was renamed (silent when omitted)
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename *.js entries to *.gs
    ToGs,

    /// Rename *.gs entries to *.js
    ToJs,

    /// Rename entries ending in SOURCE, replacing SOURCE with TARGET throughout the name
    Convert {
        /// 3-character suffix to select, e.g. .gs (a leading dot is not substituted)
        source: Suffix,

        /// 3-character suffix to substitute in
        target: Suffix,
    },

    /// Write .extswap.toml so a bare `extswap` converts SOURCE to TARGET (default .js -> .gs)
    Init {
        /// Default suffix to select
        #[arg(requires = "target")]
        source: Option<Suffix>,

        /// Default suffix to substitute in
        target: Option<Suffix>,
    },

    /// Show version information
    Version,
}
