mod agent;
mod start;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "abacus", bin_name = "abacus")]
#[command(about = "A miniature distributed orchestrator for arithmetic expression evaluation")]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	#[command(about = "Start the orchestrator server")]
	Start(start::StartCommandArguments),
	#[command(about = "Start a compute agent")]
	Agent(agent::AgentCommandArguments),
}

/// Parses the command line and runs the selected command to completion.
pub async fn init() -> ExitCode {
	let args = Cli::parse();
	let output = match args.command {
		Commands::Start(args) => start::init(args).await,
		Commands::Agent(args) => agent::init(args).await,
	};
	if let Err(error) = output {
		error!("{error}");
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}
