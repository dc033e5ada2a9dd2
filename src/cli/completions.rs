use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "Completions cover subcommands and the global --manifest, --no-env and \
                  --verbose options.\n\n\
                  Load them for the current zsh session:\n    \
                  source <(precedence completions zsh)")]
pub struct CompletionsArgs {
    /// Shell to generate the completion script for
    #[arg(value_enum)]
    pub shell: Shell,
}
