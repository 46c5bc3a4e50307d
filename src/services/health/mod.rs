//! A very basic service that acts as a healthcheck.
//!
//! The API itself has no state worth checking, so "healthy" means "the
//! database can be reached".

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{Connection, MySql, Pool};

pub(crate) mod http;

/// A service that reports whether the API can reach its database.
#[derive(Clone)]
pub struct HealthService
{
	/// Connection pool to the database holding the voter table.
	database: Pool<MySql>,
}

impl fmt::Debug for HealthService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("HealthService").finish_non_exhaustive()
	}
}

/// Overall health of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status
{
	#[allow(missing_docs)]
	Healthy,

	#[allow(missing_docs)]
	Unhealthy,
}

/// Whether the database could be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus
{
	#[allow(missing_docs)]
	Connected,

	#[allow(missing_docs)]
	Disconnected,
}

/// Response payload for the healthcheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthReport
{
	#[allow(missing_docs)]
	pub status: Status,

	#[allow(missing_docs)]
	pub database: DatabaseStatus,
}

impl HealthReport
{
	/// Whether everything is fine.
	pub fn is_healthy(&self) -> bool
	{
		self.status == Status::Healthy
	}
}

impl HealthService
{
	/// Create a new [`HealthService`].
	#[tracing::instrument(skip(database))]
	pub fn new(database: Pool<MySql>) -> Self
	{
		Self { database }
	}

	/// Checks whether the database can be reached.
	///
	/// A connection is taken from the pool, pinged, and handed back.
	#[tracing::instrument(level = "debug")]
	pub async fn check(&self) -> HealthReport
	{
		let result = match self.database.acquire().await {
			Ok(mut conn) => conn.ping().await,
			Err(error) => Err(error),
		};

		match result {
			Ok(()) => HealthReport { status: Status::Healthy, database: DatabaseStatus::Connected },
			Err(error) => {
				tracing::warn!(%error, "database is unreachable");
				HealthReport { status: Status::Unhealthy, database: DatabaseStatus::Disconnected }
			}
		}
	}
}
