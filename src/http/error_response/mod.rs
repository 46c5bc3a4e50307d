//! The JSON error body returned by every failing request.

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

mod into_error_response;
pub use into_error_response::IntoErrorResponse;

/// An HTTP error response.
///
/// Every error the API can return is rendered through this type, so clients
/// only ever have to handle a single shape:
///
/// ```json
/// { "error": "Rank must be 1 or greater" }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse
{
	/// The HTTP status code the response should have.
	#[serde(skip)]
	status: http::StatusCode,

	/// Short, human-readable, error message.
	#[schema(example = "No voter found at rank 7")]
	error: String,
}

impl ErrorResponse
{
	/// The status code this response will be sent with.
	pub fn status(&self) -> http::StatusCode
	{
		self.status
	}

	/// The error message that will be sent to the client.
	pub fn message(&self) -> &str
	{
		&self.error
	}
}

impl<E> From<E> for ErrorResponse
where
	E: IntoErrorResponse,
{
	#[track_caller]
	fn from(error: E) -> Self
	{
		let status = error.status();

		if status.is_server_error() {
			tracing::error!(loc = %Location::caller(), ?error, "creating error response");
		} else {
			tracing::debug!(loc = %Location::caller(), ?error, "creating error response");
		}

		Self { status, error: error.to_string() }
	}
}

impl IntoResponse for ErrorResponse
{
	fn into_response(self) -> Response
	{
		(self.status, Json(self)).into_response()
	}
}
