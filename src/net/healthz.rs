use super::AppState;
use crate::env;
use abacus_core::cnf;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub(super) fn router() -> Router<AppState> {
	Router::new().route("/healthz", get(handler))
}

#[derive(Serialize)]
struct HealthzResponse {
	name: &'static str,
	build_version: &'static str,
	build_time: &'static str,
	git_tag: &'static str,
	git_hash: &'static str,
}

async fn handler() -> Json<HealthzResponse> {
	Json(HealthzResponse {
		name: cnf::SERVER_NAME,
		build_version: env::VERSION,
		build_time: env::BUILD_TIME.unwrap_or_default(),
		git_tag: env::GIT_TAG.unwrap_or_default(),
		git_hash: env::GIT_HASH.unwrap_or_default(),
	})
}
