#![doc = include_str!("../README.md")]

use std::net::SocketAddr;

use axum::{routing, Router};
use color_eyre::eyre::WrapErr;
use sqlx::{MySql, Pool};
use tokio::net::TcpListener;

pub mod runtime;
pub use runtime::Config;

pub mod database;
pub mod http;
pub mod last_votes;
pub mod middleware;
pub mod openapi;
pub mod services;

#[cfg(test)]
mod testing;

use crate::database::TableName;
use crate::services::{HealthService, VoterService};

/// Run the API.
///
/// This function will not exit until the process receives SIGINT or SIGTERM.
pub async fn run(config: Config) -> color_eyre::Result<()>
{
	tracing::debug!(addr = %config.addr, "binding TCP socket");

	let tcp_listener = TcpListener::bind(config.addr)
		.await
		.wrap_err("bind tcp socket")?;

	let addr = tcp_listener.local_addr().wrap_err("get tcp addr")?;
	let database = database::create_pool(&config.database).wrap_err("create database pool")?;
	let api_service = router(database, &config.database.table)
		.into_make_service_with_connect_info::<SocketAddr>();

	tracing::info!(%addr, table = %config.database.table, "listening for requests");

	axum::serve(tcp_listener, api_service)
		.with_graceful_shutdown(runtime::signals::shutdown())
		.await
		.wrap_err("run http server")
}

/// Builds the API's router.
///
/// Every route lives under `/api`; anything else is answered with a JSON 404.
pub fn router(database: Pool<MySql>, table: &TableName) -> Router
{
	let voter_svc = VoterService::new(database.clone(), table);
	let health_svc = HealthService::new(database);

	let api = Router::new()
		.merge(voter_svc)
		.merge(health_svc)
		.route(
			"/openapi.json",
			routing::get(openapi::serve).fallback(http::method_not_allowed),
		);

	Router::new()
		.nest("/api", api)
		.fallback(http::endpoint_not_found)
		.layer(middleware::cors::permissive())
		.layer(middleware::panic_handler::layer())
		.layer(middleware::logging::layer!())
}
