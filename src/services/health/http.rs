//! HTTP handlers for this service.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{routing, Json, Router};

use super::{HealthReport, HealthService};

impl From<HealthService> for Router
{
	fn from(svc: HealthService) -> Self
	{
		Router::new()
			.route("/health", routing::get(get).fallback(crate::http::method_not_allowed))
			.with_state(svc)
	}
}

impl IntoResponse for HealthReport
{
	fn into_response(self) -> Response
	{
		let status = if self.is_healthy() {
			http::StatusCode::OK
		} else {
			http::StatusCode::INTERNAL_SERVER_ERROR
		};

		(status, Json(self)).into_response()
	}
}

/// Check whether the API can reach its database.
#[tracing::instrument]
#[utoipa::path(get, path = "/api/health", tag = "Health", responses(
  (status = 200, description = "The database is reachable.", body = HealthReport),
  (status = 500, description = "The database is unreachable.", body = HealthReport),
))]
pub(crate) async fn get(State(svc): State<HealthService>) -> HealthReport
{
	svc.check().await
}
