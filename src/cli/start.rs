use crate::net;
use crate::telemetry;
use abacus_core::cnf;
use abacus_core::sched::{OperationTimes, Scheduler};
use abacus_core::store::MemoryStore;
use abacus_core::task::TaskPool;
use anyhow::Result;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct StartCommandArguments {
	#[arg(help = "The port on which to serve the HTTP API")]
	#[arg(env = "SERVER_PORT", long = "port", short = 'p')]
	#[arg(default_value = "8080")]
	port: u16,
	#[arg(help = "Artificial latency of an addition, in milliseconds")]
	#[arg(env = "TIME_ADDITION_MS", long = "time-addition-ms")]
	#[arg(default_value = "100")]
	time_addition_ms: u64,
	#[arg(help = "Artificial latency of a subtraction, in milliseconds")]
	#[arg(env = "TIME_SUBTRACTION_MS", long = "time-subtraction-ms")]
	#[arg(default_value = "200")]
	time_subtraction_ms: u64,
	#[arg(help = "Artificial latency of a multiplication, in milliseconds")]
	#[arg(env = "TIME_MULTIPLICATIONS_MS", long = "time-multiplications-ms")]
	#[arg(default_value = "300")]
	time_multiplications_ms: u64,
	#[arg(help = "Artificial latency of a division, in milliseconds")]
	#[arg(env = "TIME_DIVISIONS_MS", long = "time-divisions-ms")]
	#[arg(default_value = "400")]
	time_divisions_ms: u64,
	#[arg(help = "The logging level filter")]
	#[arg(env = "ABACUS_LOG", long = "log")]
	#[arg(default_value = "info")]
	log: String,
}

pub async fn init(args: StartCommandArguments) -> Result<()> {
	telemetry::init(&args.log)?;
	info!("Starting {}", cnf::SERVER_NAME);
	let times = OperationTimes {
		addition: Duration::from_millis(args.time_addition_ms),
		subtraction: Duration::from_millis(args.time_subtraction_ms),
		multiplication: Duration::from_millis(args.time_multiplications_ms),
		division: Duration::from_millis(args.time_divisions_ms),
	};
	let scheduler = Arc::new(Scheduler::new(
		Arc::new(MemoryStore::new()),
		Arc::new(TaskPool::new()),
		times,
	));
	net::init(scheduler, args.port).await
}
