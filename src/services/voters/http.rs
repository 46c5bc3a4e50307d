//! HTTP handlers for this service.

use axum::extract::State;
use axum::{routing, Router};

use super::{
	Error,
	FetchTopVotersRequest,
	FetchTopVotersResponse,
	FetchVoterRequest,
	RankedVoter,
	VoterService,
};
use crate::http::extract::Path;
use crate::http::ErrorResponse;

impl From<VoterService> for Router
{
	fn from(svc: VoterService) -> Self
	{
		Router::new()
			.route(
				"/voter/:rank",
				routing::get(get_by_rank).fallback(crate::http::method_not_allowed),
			)
			.route(
				"/voters/top/:limit",
				routing::get(get_top).fallback(crate::http::method_not_allowed),
			)
			.with_state(svc)
	}
}

/// Fetch the voter at a given rank.
///
/// Rank 1 is the player with the most votes of all time.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  get,
  path = "/api/voter/{rank}",
  tag = "Voters",
  params(("rank" = i64, Path, description = "1-based leaderboard position")),
  responses(
    (status = 200, description = "The voter at this rank.", body = RankedVoter),
    (status = 400, description = "The rank is smaller than 1.", body = ErrorResponse),
    (status = 404, description = "There are fewer voters than the requested rank.", body = ErrorResponse),
    (status = 500, description = "The database could not be queried.", body = ErrorResponse),
  ),
)]
pub(crate) async fn get_by_rank(
	State(svc): State<VoterService>,
	Path(rank): Path<i64>,
) -> Result<RankedVoter, ErrorResponse>
{
	let voter = svc
		.fetch_voter(FetchVoterRequest { rank })
		.await?
		.ok_or(Error::VoterNotFound { rank: rank.unsigned_abs() })?;

	Ok(voter)
}

/// Fetch the top of the leaderboard.
#[tracing::instrument(err(Debug, level = "debug"))]
#[utoipa::path(
  get,
  path = "/api/voters/top/{limit}",
  tag = "Voters",
  params(("limit" = i64, Path, description = "how many voters to return (1-100)")),
  responses(
    (status = 200, description = "The best voters, best first.", body = FetchTopVotersResponse),
    (status = 400, description = "The limit is outside of 1-100.", body = ErrorResponse),
    (status = 500, description = "The database could not be queried.", body = ErrorResponse),
  ),
)]
pub(crate) async fn get_top(
	State(svc): State<VoterService>,
	Path(limit): Path<i64>,
) -> Result<FetchTopVotersResponse, ErrorResponse>
{
	let res = svc.fetch_top_voters(FetchTopVotersRequest { limit }).await?;

	Ok(res)
}

#[cfg(test)]
mod tests
{
	use sqlx::{MySql, Pool};

	use super::*;
	use crate::database::TableName;
	use crate::services::voters::MAX_LIMIT;
	use crate::testing;

	#[tokio::test]
	async fn rank_below_one_is_rejected() -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(testing::unreachable_pool()));

		for uri in ["/voter/0", "/voter/-1"] {
			let (status, body) = testing::get(router.clone(), uri).await?;

			testing::assert_eq!(status, http::StatusCode::BAD_REQUEST);
			testing::assert_eq!(body["error"], "Rank must be 1 or greater");
		}

		Ok(())
	}

	#[tokio::test]
	async fn limit_out_of_range_is_rejected() -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(testing::unreachable_pool()));

		for uri in ["/voters/top/0", "/voters/top/101", "/voters/top/-3"] {
			let (status, body) = testing::get(router.clone(), uri).await?;

			testing::assert_eq!(status, http::StatusCode::BAD_REQUEST);
			testing::assert_eq!(body["error"], "Limit must be between 1 and 100");
		}

		Ok(())
	}

	#[tokio::test]
	async fn non_numeric_segments_are_unknown_endpoints() -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(testing::unreachable_pool()));

		for uri in ["/voter/first", "/voters/top/ten", "/voter/1.5"] {
			let (status, body) = testing::get(router.clone(), uri).await?;

			testing::assert_eq!(status, http::StatusCode::NOT_FOUND);
			testing::assert_eq!(body["error"], "Endpoint not found");
		}

		Ok(())
	}

	#[tokio::test]
	async fn unreachable_database_is_a_server_error() -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(testing::unreachable_pool()));

		for uri in ["/voter/1", "/voters/top/10"] {
			let (status, body) = testing::get(router.clone(), uri).await?;

			testing::assert_eq!(status, http::StatusCode::INTERNAL_SERVER_ERROR);
			testing::assert_eq!(body["error"], "Database connection failed");
		}

		Ok(())
	}

	#[sqlx::test(
		migrations = "database/migrations",
		fixtures("../../../database/fixtures/voters.sql")
	)]
	#[cfg_attr(not(feature = "mysql-tests"), ignore = "requires a MySQL server at DATABASE_URL")]
	async fn get_by_rank_works(database: Pool<MySql>) -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(database));
		let (status, body) = testing::get(router.clone(), "/voter/2").await?;

		testing::assert_eq!(status, http::StatusCode::OK);
		testing::assert_eq!(body["rank"], 2);
		testing::assert_eq!(body["PlayerName"], "Alex");
		testing::assert_eq!(body["LastVotes"]["site"], "PlanetMinecraft");
		testing::assert_eq!(body["AllTimeTotal"], 95);
		testing::assert!(body.get("Time").is_none());

		let (status, body) = testing::get(router, "/voter/1").await?;

		testing::assert_eq!(status, http::StatusCode::OK);
		testing::assert_eq!(body["LastVotes"], "MinecraftMP");
		testing::assert!(body["Time"].is_string());

		Ok(())
	}

	#[sqlx::test(
		migrations = "database/migrations",
		fixtures("../../../database/fixtures/voters.sql")
	)]
	#[cfg_attr(not(feature = "mysql-tests"), ignore = "requires a MySQL server at DATABASE_URL")]
	async fn get_by_rank_past_the_end(database: Pool<MySql>) -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(database));
		let (status, body) = testing::get(router, "/voter/42").await?;

		testing::assert_eq!(status, http::StatusCode::NOT_FOUND);
		testing::assert_eq!(body["error"], "No voter found at rank 42");

		Ok(())
	}

	#[sqlx::test(
		migrations = "database/migrations",
		fixtures("../../../database/fixtures/voters.sql")
	)]
	#[cfg_attr(not(feature = "mysql-tests"), ignore = "requires a MySQL server at DATABASE_URL")]
	async fn get_top_works(database: Pool<MySql>) -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(database));
		let (status, body) = testing::get(router, &format!("/voters/top/{MAX_LIMIT}")).await?;

		testing::assert_eq!(status, http::StatusCode::OK);

		let res = serde_json::from_value::<FetchTopVotersResponse>(body)?;

		testing::assert_eq!(res.total_results, 5);
		testing::assert_eq!(res.voters.len(), 5);
		testing::assert_eq!(res.voters[4].player_name, "Jeb");
		testing::assert_eq!(res.voters[4].last_votes, "TopG");

		Ok(())
	}

	#[sqlx::test(migrations = "database/migrations")]
	#[cfg_attr(not(feature = "mysql-tests"), ignore = "requires a MySQL server at DATABASE_URL")]
	async fn failing_query_is_a_database_error(database: Pool<MySql>) -> color_eyre::Result<()>
	{
		let table = "NoSuchTable".parse::<TableName>()?;
		let router = Router::from(VoterService::new(database, &table));

		for uri in ["/voter/1", "/voters/top/10"] {
			let (status, body) = testing::get(router.clone(), uri).await?;
			let message = body["error"].as_str().unwrap_or_default();

			testing::assert_eq!(status, http::StatusCode::INTERNAL_SERVER_ERROR);
			testing::assert!(message.starts_with("Database error: "), "{message}");
		}

		Ok(())
	}

	#[tokio::test]
	async fn other_methods_are_not_allowed() -> color_eyre::Result<()>
	{
		let router = Router::from(testing::voter_svc(testing::unreachable_pool()));

		for (method, uri) in [
			(http::Method::POST, "/voter/0"),
			(http::Method::DELETE, "/voter/1"),
			(http::Method::PUT, "/voters/top/10"),
		] {
			let (status, body) = testing::send(router.clone(), method, uri).await?;

			testing::assert_eq!(status, http::StatusCode::METHOD_NOT_ALLOWED);
			testing::assert_eq!(body["error"], "Method not allowed");
		}

		Ok(())
	}
}
