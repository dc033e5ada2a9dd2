use clap::Parser;

/// Arguments for the lookup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Effective value of a key:\n    precedence lookup server.port\n\n\
                  Machine-readable output:\n    precedence lookup server.port --json")]
pub struct LookupArgs {
    /// Property key to look up
    pub key: String,

    /// Print the value and its source as JSON
    #[arg(long)]
    pub json: bool,
}
