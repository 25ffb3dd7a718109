use abacus_core::err::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A core error crossing the HTTP boundary.
///
/// The missing-thing errors map to `404 Not Found`; everything else,
/// including parse failures and duplicate submissions, surfaces as
/// `500 Internal Server Error` with the error text as the body.
pub(super) struct NetError(pub Error);

impl From<Error> for NetError {
	fn from(error: Error) -> Self {
		NetError(error)
	}
}

impl IntoResponse for NetError {
	fn into_response(self) -> Response {
		let status = match &self.0 {
			Error::ExpressionNotFound | Error::TaskNotFound | Error::NoTasksAvailable => {
				StatusCode::NOT_FOUND
			}
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};
		(status, self.0.to_string()).into_response()
	}
}
