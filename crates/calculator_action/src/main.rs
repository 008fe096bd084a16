mod cli;
mod core;
mod handlers;
mod utils;

use std::io;
use std::process::ExitCode;

use cli::Cli;
use utils::logging;

/// Calculator Action
///
/// Reads one request from stdin and writes one result to stdout.
/// This is the only place an error becomes a process exit status.
///
/// Usage: echo '{"action":"add","params":{"a":2,"b":3}}' | cargo run --bin action-calculator
fn main() -> ExitCode {
    Cli::parse_args();

    if let Err(e) = logging::init_logging() {
        eprintln!("{e}");
        return ExitCode::from(e.exit_code());
    }

    match handlers::run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
