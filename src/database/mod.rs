//! This module contains general database utilities.
//!
//! The voter table is owned by the voting plugin; this API only ever reads
//! from it and never runs migrations against it.

use std::num::NonZeroU32;
use std::thread;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySql, Pool};

use crate::runtime::config::DatabaseConfig;

mod table_name;
pub use table_name::{InvalidTableName, TableName};

/// Creates a database connection pool.
///
/// The pool connects lazily, so this succeeds even if the database is down.
/// Every request acquires its own connection from the pool and hands it back
/// once it's done; see [`VoterService`] for how that looks.
///
/// [`VoterService`]: crate::services::VoterService
pub fn create_pool(config: &DatabaseConfig) -> sqlx::Result<Pool<MySql>>
{
	let max_connections = config
		.max_connections
		.map_or_else(max_connections, NonZeroU32::get);

	let pool = MySqlPoolOptions::new()
		.max_connections(max_connections)
		.acquire_timeout(config.acquire_timeout())
		.connect_lazy_with(connect_options(config)?);

	tracing::debug!(max_connections, "created database pool");

	Ok(pool)
}

/// Builds connection options from the given config.
///
/// A full `DATABASE_URL` takes precedence over the individual options.
pub fn connect_options(config: &DatabaseConfig) -> sqlx::Result<MySqlConnectOptions>
{
	if let Some(url) = &config.database_url {
		return MySqlConnectOptions::from_url(url);
	}

	let mut options = MySqlConnectOptions::new()
		.host(&config.host)
		.port(config.port)
		.username(&config.user)
		.charset(&config.charset);

	if !config.password.is_empty() {
		options = options.password(&config.password);
	}

	if let Some(name) = &config.name {
		options = options.database(name);
	}

	Ok(options)
}

/// The default maximum number of database pool connections to use.
fn max_connections() -> u32
{
	let available = thread::available_parallelism().map_or(1, |n| n.get());

	u32::try_from(available.saturating_mul(2)).unwrap_or(u32::MAX)
}
