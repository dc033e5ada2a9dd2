//! Precedence - import-aware ordering of configuration property sources
//!
//! Command line front end: loads a manifest describing configuration units
//! and live property sources, then orders, reorders or looks up values.

use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Order(args) => commands::order::run(&cli.manifest, cli.no_env, args),
        Commands::Reorder(args) => commands::reorder::run(&cli.manifest, cli.no_env, args),
        Commands::Lookup(args) => commands::lookup::run(&cli.manifest, cli.no_env, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
