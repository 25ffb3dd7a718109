use super::error::NetError;
use super::AppState;
use abacus_core::task::{AgentTask, TaskResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

pub(super) fn router() -> Router<AppState> {
	Router::new().route("/internal/task", get(fetch).post(submit))
}

async fn fetch(State(state): State<AppState>) -> Result<Json<AgentTask>, NetError> {
	let task = state.scheduler.next_task()?;
	Ok(Json(task))
}

async fn submit(
	State(state): State<AppState>,
	body: Result<Json<TaskResult>, JsonRejection>,
) -> Response {
	let Ok(Json(result)) = body else {
		warn!("Failed to decode request body");
		return (StatusCode::UNPROCESSABLE_ENTITY, "Invalid request body").into_response();
	};
	match state.scheduler.process_result(&result.id, result.result) {
		Ok(()) => StatusCode::OK.into_response(),
		Err(error) => {
			error!("Failed to process result for task {}: {error}", result.id);
			NetError(error).into_response()
		}
	}
}
