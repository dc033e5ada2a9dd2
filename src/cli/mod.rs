//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - order: Order command arguments
//! - reorder: Reorder command arguments
//! - lookup: Lookup command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use precedence::config::MANIFEST_FILE;

pub mod completions;
pub mod lookup;
pub mod order;
pub mod reorder;

pub use completions::CompletionsArgs;
pub use lookup::LookupArgs;
pub use order::OrderArgs;
pub use reorder::ReorderArgs;

/// Precedence - import-aware ordering of configuration property sources
#[derive(Parser, Debug)]
#[command(
    name = "precedence",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Import-aware precedence ordering for configuration property sources",
    long_about = "Precedence orders configuration units breadth-first from the units nothing \
                  imports, then moves the property sources they contributed into that order: \
                  values from the more specific unit win.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  precedence order                       \x1b[90m# Show unit and resource order\x1b[0m\n   \
                  precedence reorder --json              \x1b[90m# Reorder live sources, as JSON\x1b[0m\n   \
                  precedence lookup server.port          \x1b[90m# Effective value after reordering\x1b[0m\n   \
                  precedence -m app.yaml order           \x1b[90m# Use another manifest\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Manifest file describing units and live property sources
    #[arg(
        long,
        short = 'm',
        global = true,
        env = "PRECEDENCE_MANIFEST",
        default_value = MANIFEST_FILE
    )]
    pub manifest: PathBuf,

    /// Do not resolve placeholders from environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the computed unit and resource order
    Order(OrderArgs),

    /// Reorder the live property sources
    Reorder(ReorderArgs),

    /// Look up a property after reordering
    Lookup(LookupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
