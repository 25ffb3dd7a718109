use super::error::NetError;
use super::AppState;
use abacus_core::store::Expression;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub(super) fn router() -> Router<AppState> {
	Router::new()
		.route("/api/v1/calculate", post(calculate))
		.route("/api/v1/expressions/", get(list))
		.route("/api/v1/expressions/{id}/", get(fetch))
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
	id: String,
	expression: String,
}

#[derive(Debug, Serialize)]
struct ListResponse {
	expressions: Vec<Expression>,
}

#[derive(Debug, Serialize)]
struct FetchResponse {
	expression: Expression,
}

async fn calculate(
	State(state): State<AppState>,
	body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
	let Ok(Json(request)) = body else {
		warn!("Failed to decode request body");
		return (StatusCode::UNPROCESSABLE_ENTITY, "Invalid request body").into_response();
	};
	match state.scheduler.schedule(&request.id, &request.expression) {
		Ok(()) => {
			info!("Scheduled expression {}", request.id);
			StatusCode::CREATED.into_response()
		}
		Err(error) => {
			error!("Failed to schedule expression {}: {error}", request.id);
			NetError(error).into_response()
		}
	}
}

async fn list(State(state): State<AppState>) -> Result<Json<ListResponse>, NetError> {
	let expressions = state.scheduler.expressions()?;
	Ok(Json(ListResponse {
		expressions,
	}))
}

async fn fetch(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<FetchResponse>, NetError> {
	let expression = state.scheduler.expression(&id)?;
	Ok(Json(FetchResponse {
		expression,
	}))
}
