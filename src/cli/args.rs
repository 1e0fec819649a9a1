//! Command line argument parsing for the content-query CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// content-query - Translate content descriptors into search requests
#[derive(Parser, Debug, Clone)]
#[command(name = "content-query")]
#[command(about = "Translate editorial content descriptors into search engine queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ContentQueryArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ContentQueryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Translate a content descriptor into a search request
    Translate(TranslateArgs),

    /// Convert editor data into its stored form
    Save(TransformArgs),

    /// Convert stored data into its editor form
    Render(TransformArgs),

    /// Print the callout label for a list of tags
    Callout(CalloutArgs),
}

/// Arguments for translating a descriptor
#[derive(Parser, Debug, Clone)]
pub struct TranslateArgs {
    /// Descriptor file path (JSON), or - for stdin
    #[arg(value_name = "DESCRIPTOR_FILE")]
    pub descriptor_file: PathBuf,

    /// Slug of the site the request is served for
    #[arg(long, env = "CONTENT_QUERY_SITE_SLUG")]
    pub site_slug: Option<String>,

    /// Translator configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "CONTENT_QUERY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for save and render
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    /// Component data file path (JSON object), or - for stdin
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Treat list fields as editor items
    #[arg(long)]
    pub edit: bool,
}

/// Arguments for callout classification
#[derive(Parser, Debug, Clone)]
pub struct CalloutArgs {
    /// Article tags
    #[arg(value_name = "TAG")]
    pub tags: Vec<String>,
}
