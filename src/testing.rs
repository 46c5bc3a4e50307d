//! This module contains helpers for unit/integration tests.

use std::time::Duration;

use axum::body::Body;
use axum::Router;
use color_eyre::eyre::WrapErr;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{MySql, Pool};
use tower::ServiceExt;

use crate::database::TableName;
use crate::services::VoterService;

/// Returns a pool that will never manage to open a connection.
///
/// Nothing listens on port 1, so every acquire fails quickly.
pub fn unreachable_pool() -> Pool<MySql>
{
	let options = MySqlConnectOptions::new()
		.host("127.0.0.1")
		.port(1)
		.username("root")
		.database("voters");

	MySqlPoolOptions::new()
		.max_connections(1)
		.acquire_timeout(Duration::from_secs(1))
		.connect_lazy_with(options)
}

pub fn voter_svc(database: Pool<MySql>) -> VoterService
{
	let table = "VotingPlugin_Users".parse::<TableName>().unwrap();

	VoterService::new(database, &table)
}

/// Sends a `GET` request to `router` and decodes the response body as JSON.
pub async fn get(router: Router, uri: &str) -> color_eyre::Result<(http::StatusCode, serde_json::Value)>
{
	send(router, http::Method::GET, uri).await
}

/// Sends an empty request to `router` and decodes the response body as JSON.
pub async fn send(
	router: Router,
	method: http::Method,
	uri: &str,
) -> color_eyre::Result<(http::StatusCode, serde_json::Value)>
{
	let request = http::Request::builder()
		.method(method)
		.uri(uri)
		.body(Body::empty())
		.wrap_err("build request")?;

	let response = router.oneshot(request).await.wrap_err("send request")?;
	let status = response.status();
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.wrap_err("read response body")?;

	let body = serde_json::from_slice(&body).wrap_err("decode response body")?;

	Ok((status, body))
}

/// Global constructor that will run before tests.
#[ctor::ctor]
fn ctor()
{
	use tracing_subscriber::fmt::format::FmtSpan;
	use tracing_subscriber::EnvFilter;

	color_eyre::install().expect("failed to install color-eyre");
	tracing_subscriber::fmt()
		.compact()
		.with_ansi(true)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_target(true)
		.with_test_writer()
		.with_env_filter(EnvFilter::from_default_env())
		.init();
}

macro_rules! assert {
	($expr:expr $(, $($msg:tt)*)?) => {
		::color_eyre::eyre::ensure!($expr $(, $($msg)*)?)
	};
}

macro_rules! assert_eq {
	($lhs:expr, $rhs:expr $(, $($msg:tt)*)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if *lhs != *rhs {
					::color_eyre::eyre::bail!(
						"assertion `{} == {}` failed\n  lhs: {:?}\n  rhs: {:?}",
						stringify!($lhs),
						stringify!($rhs),
						lhs,
						rhs,
					);
				}
			}
		}
	};
}

macro_rules! assert_matches {
	($expr:expr, $pat:pat $(if $cond:expr)? $(, $($msg:tt)*)?) => {
		::color_eyre::eyre::ensure!(matches!($expr, $pat $(if $cond)?) $(, $($msg)*)?)
	};
}

pub(crate) use {assert, assert_eq, assert_matches};
