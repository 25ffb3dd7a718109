use crate::agent::Agent;
use crate::telemetry;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct AgentCommandArguments {
	#[arg(help = "The base URL of the orchestrator to pull tasks from")]
	#[arg(env = "ORCHESTRATOR_URL", long = "orchestrator")]
	#[arg(default_value = "http://localhost:8080")]
	orchestrator_url: String,
	#[arg(help = "The number of independent worker loops to run")]
	#[arg(env = "COMPUTING_POWER", long = "computing-power")]
	#[arg(default_value = "4")]
	computing_power: usize,
	#[arg(help = "The logging level filter")]
	#[arg(env = "ABACUS_LOG", long = "log")]
	#[arg(default_value = "info")]
	log: String,
}

pub async fn init(args: AgentCommandArguments) -> Result<()> {
	telemetry::init(&args.log)?;
	Agent::new(&args.orchestrator_url, args.computing_power)?.run().await
}
