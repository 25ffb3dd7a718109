use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialises the global tracing subscriber.
///
/// The filter accepts anything `tracing_subscriber::EnvFilter` understands,
/// from a bare level (`info`) to per-target directives
/// (`abacus=debug,tower_http=warn`).
pub fn init(filter: &str) -> Result<()> {
	let filter = EnvFilter::try_new(filter)?;
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.try_init()
		.map_err(|error| anyhow!("failed to initialise telemetry: {error}"))
}
