use once_cell::sync::Lazy;
use std::time::Duration;

/// The publicly visible name of the server
pub const SERVER_NAME: &str = "Abacus";

/// How long an idle worker sleeps before polling the orchestrator again.
pub const WORKER_IDLE_INTERVAL: Duration = Duration::from_secs(1);

/// How long a worker backs off after a transport or decode failure.
pub const WORKER_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Specifies, in seconds, how long the server drains in-flight requests on
/// shutdown before the process exits unconditionally.
pub static GRACEFUL_SHUTDOWN_TIMEOUT: Lazy<u64> =
	lazy_env_parse!("ABACUS_GRACEFUL_SHUTDOWN_TIMEOUT", u64, 30);
