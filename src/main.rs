#[macro_use]
extern crate tracing;

mod agent;
mod cli;
mod env;
mod net;
mod telemetry;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
	cli::init().await
}
