use abacus_core::cnf;
use abacus_core::task::{AgentTask, TaskResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// A single pull-based compute loop.
///
/// Each cycle asks the orchestrator for one task, sleeps the task's
/// artificial duration, computes the scalar result locally and posts it
/// back. The worker keeps no state between cycles; contention between
/// workers is resolved entirely by the orchestrator's at-most-once dispatch.
pub(super) struct Worker {
	id: usize,
	client: Client,
	endpoint: String,
}

impl Worker {
	pub fn new(id: usize, client: Client, endpoint: String) -> Self {
		Worker {
			id,
			client,
			endpoint,
		}
	}

	pub async fn run(self, token: CancellationToken) {
		debug!("Worker {} started", self.id);
		while !token.is_cancelled() {
			self.cycle().await;
		}
		debug!("Worker {} stopped", self.id);
	}

	async fn cycle(&self) {
		let task = match self.fetch_task().await {
			Ok(Some(task)) => task,
			Ok(None) => {
				// nothing to compute; bound the polling rate
				sleep(cnf::WORKER_IDLE_INTERVAL).await;
				return;
			}
			Err(error) => {
				warn!("Worker {} failed to get task: {error}", self.id);
				sleep(cnf::WORKER_RETRY_INTERVAL).await;
				return;
			}
		};
		debug!("Worker {} got task {}", self.id, task.id);
		sleep(Duration::from_millis(task.operation_time)).await;
		let result = match task.operation.apply(task.arg1, task.arg2) {
			Ok(value) => value,
			Err(error) => {
				// no result is submitted; the task stays orphaned
				error!("Worker {} failed to compute task {}: {error}", self.id, task.id);
				return;
			}
		};
		if let Err(error) = self.submit_result(&task.id, result).await {
			warn!("Worker {} failed to send result: {error}", self.id);
			sleep(cnf::WORKER_RETRY_INTERVAL).await;
		}
	}

	/// Requests one task from the orchestrator. `None` means no task is
	/// currently available.
	async fn fetch_task(&self) -> Result<Option<AgentTask>, reqwest::Error> {
		let response = self.client.get(&self.endpoint).send().await?;
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}
		let task = response.error_for_status()?.json::<AgentTask>().await?;
		Ok(Some(task))
	}

	async fn submit_result(&self, id: &str, result: f64) -> Result<(), reqwest::Error> {
		let body = TaskResult {
			id: id.to_owned(),
			result,
		};
		self.client.post(&self.endpoint).json(&body).send().await?.error_for_status()?;
		info!("Worker {} sent result for task {id}: {result}", self.id);
		Ok(())
	}
}
