use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// How long to wait for the orchestrator to come up, or an expression to
/// complete, before failing the test.
pub const TIMEOUT: Duration = Duration::from_secs(15);

/// A child process which is killed when dropped, so a failing test never
/// leaks servers.
pub struct Server {
	inner: Child,
}

impl Drop for Server {
	fn drop(&mut self) {
		let _ = self.inner.kill();
		let _ = self.inner.wait();
	}
}

/// Picks a free port by binding an ephemeral one and releasing it.
pub fn free_port() -> u16 {
	TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port()
}

/// Spawns the orchestrator on the given port with millisecond operator
/// latencies and waits until its health endpoint responds.
pub async fn start_orchestrator(port: u16) -> Server {
	let inner = Command::new(env!("CARGO_BIN_EXE_abacus"))
		.args(["start", "--port", &port.to_string()])
		.args(["--time-addition-ms", "1"])
		.args(["--time-subtraction-ms", "1"])
		.args(["--time-multiplications-ms", "1"])
		.args(["--time-divisions-ms", "1"])
		.args(["--log", "warn"])
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.expect("failed to spawn the orchestrator");
	let server = Server {
		inner,
	};
	let client = reqwest::Client::new();
	let url = format!("http://127.0.0.1:{port}/healthz");
	let deadline = Instant::now() + TIMEOUT;
	loop {
		if let Ok(response) = client.get(&url).send().await {
			if response.status().is_success() {
				return server;
			}
		}
		assert!(Instant::now() < deadline, "orchestrator did not become ready");
		tokio::time::sleep(Duration::from_millis(50)).await;
	}
}

/// Spawns a compute agent pointed at the orchestrator on the given port.
pub fn start_agent(port: u16) -> Server {
	let inner = Command::new(env!("CARGO_BIN_EXE_abacus"))
		.args(["agent", "--orchestrator", &format!("http://127.0.0.1:{port}")])
		.args(["--computing-power", "2"])
		.args(["--log", "warn"])
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.expect("failed to spawn the agent");
	Server {
		inner,
	}
}

/// Polls a single expression until it reports `completed`, returning its
/// final JSON form.
pub async fn wait_for_completion(
	client: &reqwest::Client,
	port: u16,
	id: &str,
) -> serde_json::Value {
	let url = format!("http://127.0.0.1:{port}/api/v1/expressions/{id}/");
	let deadline = Instant::now() + TIMEOUT;
	loop {
		if let Ok(response) = client.get(&url).send().await {
			if response.status().is_success() {
				let body: serde_json::Value = response.json().await.unwrap();
				if body["expression"]["status"] == "completed" {
					return body["expression"].clone();
				}
			}
		}
		assert!(Instant::now() < deadline, "expression {id} did not complete");
		tokio::time::sleep(Duration::from_millis(25)).await;
	}
}
