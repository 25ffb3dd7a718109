//! The HTTP transport: axum routers exposing the scheduler to clients and
//! agents, one module per endpoint group.

mod error;
mod expressions;
mod healthz;
mod tasks;

use abacus_core::cnf;
use abacus_core::sched::Scheduler;
use anyhow::Result;
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
	pub scheduler: Arc<Scheduler>,
}

/// Assembles the full application router.
pub fn router(scheduler: Arc<Scheduler>) -> Router {
	Router::new()
		.merge(healthz::router())
		.merge(expressions::router())
		.merge(tasks::router())
		.layer(TraceLayer::new_for_http())
		.layer(PropagateRequestIdLayer::x_request_id())
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(CatchPanicLayer::new())
		.with_state(AppState {
			scheduler,
		})
}

/// Binds the listener and serves requests until a shutdown signal arrives.
pub async fn init(scheduler: Arc<Scheduler>, port: u16) -> Result<()> {
	let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
	let listener = TcpListener::bind(addr).await?;
	info!("Started web server on {addr}");
	axum::serve(listener, router(scheduler)).with_graceful_shutdown(shutdown_signal()).await?;
	info!("Web server stopped. Bye!");
	Ok(())
}

/// Resolves once a shutdown signal arrives, arming a watchdog which forces
/// the process out if draining exceeds the configured grace period.
async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		error!("Failed to listen for the shutdown signal: {error}");
		return;
	}
	warn!("Received shutdown signal. Draining in-flight requests...");
	tokio::spawn(async {
		tokio::time::sleep(Duration::from_secs(*cnf::GRACEFUL_SHUTDOWN_TIMEOUT)).await;
		error!("Graceful shutdown timed out. Forcing exit");
		std::process::exit(1);
	});
}
