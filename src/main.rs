//! Binary entrypoint that starts the screening insights server.

use std::process::ExitCode;

use screening_insights::start_screening_insights;

/// Start the server with configuration from the environment.
fn main() -> ExitCode {
    start_screening_insights::run()
}
