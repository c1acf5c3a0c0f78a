use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use telemetry::setup_simple_tracing;

mod cli;
mod telemetry;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_simple_tracing(cli.log_level());

    match cli.execute() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err.error());
            err.exit_code()
        }
    }
}
