use clap::Parser;
use std::process::ExitCode;

use srcdump::cli::{Cli, Output};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose > 0, cli.quiet);

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.failure(&e);
            ExitCode::FAILURE
        }
    }
}
