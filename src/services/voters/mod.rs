//! A service for querying the all-time voting leaderboard.
//!
//! Voters are ranked by their `AllTimeTotal`, highest first; voters without a
//! name or without any votes are not ranked at all.

use std::fmt;
use std::sync::Arc;

use sqlx::pool::PoolConnection;
use sqlx::{MySql, Pool};

use crate::database::TableName;

pub(crate) mod http;
mod queries;

mod error;
pub use error::{Error, Result};

pub(crate) mod models;
pub use models::{
	FetchTopVotersRequest,
	FetchTopVotersResponse,
	FetchVoterRequest,
	RankedVoter,
	VoterRecord,
};

/// The smallest leaderboard that can be requested.
pub const MIN_LIMIT: i64 = 1;

/// The largest leaderboard that can be requested.
pub const MAX_LIMIT: i64 = 100;

/// A service for querying the all-time voting leaderboard.
#[derive(Clone)]
pub struct VoterService
{
	/// Connection pool to the database holding the voter table.
	database: Pool<MySql>,

	/// See [`queries::select_ranked()`].
	select_ranked: Arc<str>,
}

impl fmt::Debug for VoterService
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("VoterService").finish_non_exhaustive()
	}
}

impl VoterService
{
	/// Create a new [`VoterService`] reading from the given `table`.
	#[tracing::instrument(skip(database))]
	pub fn new(database: Pool<MySql>, table: &TableName) -> Self
	{
		Self { database, select_ranked: queries::select_ranked(table).into() }
	}

	/// Fetches the voter at a specific rank.
	///
	/// This will return `Ok(None)` if there are fewer than `rank` voters, but
	/// everything else went fine.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_voter(&self, req: FetchVoterRequest) -> Result<Option<RankedVoter>>
	{
		if req.rank < 1 {
			return Err(Error::InvalidRank { rank: req.rank });
		}

		let rank = req.rank.unsigned_abs();
		let voter = self
			.fetch_page(1, rank - 1)
			.await?
			.into_iter()
			.next()
			.map(|record| RankedVoter::new(rank, record));

		Ok(voter)
	}

	/// Fetches the top of the leaderboard.
	///
	/// Ranks are assigned in order, starting at 1.
	#[tracing::instrument(level = "debug", err(Debug, level = "debug"))]
	pub async fn fetch_top_voters(&self, req: FetchTopVotersRequest)
	-> Result<FetchTopVotersResponse>
	{
		if !(MIN_LIMIT..=MAX_LIMIT).contains(&req.limit) {
			return Err(Error::InvalidLimit { limit: req.limit });
		}

		let limit = req.limit.unsigned_abs();
		let voters = self
			.fetch_page(limit, 0)
			.await?
			.into_iter()
			.zip(1..)
			.map(|(record, rank)| RankedVoter::new(rank, record))
			.collect::<Vec<_>>();

		Ok(FetchTopVotersResponse { total_results: voters.len(), voters })
	}

	/// Fetches up to `limit` ranked voters, skipping the first `offset`.
	///
	/// The connection used for this is returned to the pool when this function
	/// returns, regardless of whether the query succeeded.
	async fn fetch_page(&self, limit: u64, offset: u64) -> Result<Vec<VoterRecord>>
	{
		let mut conn = self.acquire().await?;
		let records = sqlx::query_as::<_, VoterRecord>(&self.select_ranked)
			.bind(limit)
			.bind(offset)
			.fetch_all(&mut *conn)
			.await?;

		Ok(records)
	}

	/// Acquires a connection from the pool.
	async fn acquire(&self) -> Result<PoolConnection<MySql>>
	{
		self.database
			.acquire()
			.await
			.map_err(Error::StorageUnavailable)
	}
}
