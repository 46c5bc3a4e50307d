//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI
//! specification from code. The [`Spec`] struct in this module lists out all
//! the relevant types and routes that will be included in the spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use axum::Json;
use utoipa::OpenApi;

use crate::http::ErrorResponse;
use crate::services::health::{DatabaseStatus, HealthReport, Status};
use crate::services::voters::{FetchTopVotersResponse, RankedVoter};

/// The API's OpenAPI specification.
#[derive(Debug, Clone, Copy, OpenApi)]
#[openapi(
  info(
    title = "Voting Leaderboard API",
    description = "Read-only access to the all-time voting leaderboard.",
  ),
  paths(
    crate::services::voters::http::get_by_rank,
    crate::services::voters::http::get_top,
    crate::services::health::http::get,
  ),
  components(schemas(
    RankedVoter,
    FetchTopVotersResponse,
    HealthReport,
    Status,
    DatabaseStatus,
    ErrorResponse,
  )),
)]
pub struct Spec;

/// Serves the OpenAPI specification as JSON.
#[tracing::instrument(level = "debug")]
pub(crate) async fn serve() -> Json<utoipa::openapi::OpenApi>
{
	Json(Spec::openapi())
}
