//! The compute agent: a bundle of independent worker loops sharing one
//! HTTP client.

mod worker;

use anyhow::Result;
use futures::future::join_all;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use worker::Worker;

pub struct Agent {
	client: Client,
	endpoint: String,
	computing_power: usize,
}

impl Agent {
	/// Creates a new agent pulling tasks from the given orchestrator.
	pub fn new(orchestrator_url: &str, computing_power: usize) -> Result<Self> {
		let client = Client::builder().build()?;
		let endpoint = format!("{}/internal/task", orchestrator_url.trim_end_matches('/'));
		Ok(Agent {
			client,
			endpoint,
			computing_power,
		})
	}

	/// Runs all worker loops until the process receives a shutdown signal.
	///
	/// Workers observe the cancellation token between iterations, so a task
	/// already being computed finishes and is submitted before its worker
	/// stops.
	pub async fn run(self) -> Result<()> {
		info!("Starting agent with {} workers against {}", self.computing_power, self.endpoint);
		let token = CancellationToken::new();
		let mut handles = Vec::with_capacity(self.computing_power);
		for id in 0..self.computing_power {
			let worker = Worker::new(id, self.client.clone(), self.endpoint.clone());
			handles.push(tokio::spawn(worker.run(token.clone())));
		}
		tokio::signal::ctrl_c().await?;
		warn!("Received shutdown signal. Stopping workers...");
		token.cancel();
		join_all(handles).await;
		info!("Agent stopped. Bye!");
		Ok(())
	}
}
