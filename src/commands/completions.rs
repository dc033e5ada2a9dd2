//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use precedence::error::Result;

use crate::cli::{Cli, CompletionsArgs};

fn write_script(shell: Shell, out: &mut impl Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

/// Print the completion script for the requested shell
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_script(args.shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}
