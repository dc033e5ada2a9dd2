use clap::Parser;

/// Arguments for the order command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show unit and resource order:\n    precedence order\n\n\
                  Machine-readable output:\n    precedence order --json\n\n\
                  Use another manifest:\n    precedence order -m config/app.yaml")]
pub struct OrderArgs {
    /// Print the order as JSON
    #[arg(long)]
    pub json: bool,
}
