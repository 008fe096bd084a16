use clap::Parser;

/// Calculator Action
///
/// A four-function calculator invoked by an LLM tool-calling host.
///
/// ## Protocol
/// One JSON request on stdin:
/// ```json
/// {"action": "add", "params": {"a": 2, "b": 3}}
/// ```
/// One JSON response on stdout:
/// ```json
/// {"result": 5}
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "action-calculator")]
#[command(about = "A four-function calculator action speaking JSON over stdin/stdout")]
#[command(version)]
#[command(
    long_about = "Reads one JSON request from standard input, applies add, subtract, multiply or divide \nto params.a and params.b, and writes {\"result\": <number>} to standard output. \nMissing operands count as zero. Any failure is logged to stderr and exits with status 1."
)]
pub struct Cli {}

impl Cli {
    /// Parse CLI arguments, handling `--help` and `--version`
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
