use clap::Parser;

/// Arguments for the reorder command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Reorder the live property sources:\n    precedence reorder\n\n\
                  Show each move:\n    precedence reorder -v\n\n\
                  Machine-readable output:\n    precedence reorder --json")]
pub struct ReorderArgs {
    /// Print the collection before and after as JSON
    #[arg(long)]
    pub json: bool,
}
