//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate API reference pages from package manifests
#[derive(Parser, Debug)]
#[command(name = "gazetteer")]
#[command(about = "Generate API reference pages from package manifests")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate documentation pages from a package manifest
    Generate {
        /// Path to the package manifest (JSON)
        manifest: PathBuf,

        /// Docs root directory receiving index.rst and the content tree
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Document single-underscore (private) members
        #[arg(long)]
        show_private: bool,

        /// Request inherited members on class pages
        #[arg(long)]
        show_inherited: bool,

        /// Existing page to use as the base of index.rst
        #[arg(long)]
        index_base: Option<PathBuf>,

        /// Skip the closing auto-generated notice
        #[arg(long)]
        no_notice: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
