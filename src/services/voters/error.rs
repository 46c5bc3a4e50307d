//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::http::IntoErrorResponse;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the voter service.
///
/// The [`Display`](std::fmt::Display) output of each variant is sent to
/// clients verbatim.
#[derive(Debug, Error)]
pub enum Error
{
	/// A rank below 1 was requested.
	#[error("Rank must be 1 or greater")]
	InvalidRank
	{
		/// The requested rank.
		rank: i64,
	},

	/// A leaderboard size outside of `1..=100` was requested.
	#[error("Limit must be between {} and {}", super::MIN_LIMIT, super::MAX_LIMIT)]
	InvalidLimit
	{
		/// The requested size.
		limit: i64,
	},

	/// There are fewer qualifying voters than the requested rank.
	#[error("No voter found at rank {rank}")]
	VoterNotFound
	{
		/// The requested rank.
		rank: u64,
	},

	/// We could not get a connection to the database.
	#[error("Database connection failed")]
	StorageUnavailable(#[source] sqlx::Error),

	/// We got a connection, but the query failed.
	#[error("Database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl IntoErrorResponse for Error
{
	fn status(&self) -> http::StatusCode
	{
		match self {
			Self::InvalidRank { .. } | Self::InvalidLimit { .. } => http::StatusCode::BAD_REQUEST,
			Self::VoterNotFound { .. } => http::StatusCode::NOT_FOUND,
			Self::StorageUnavailable(_) | Self::Database(_) => {
				http::StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::http::ErrorResponse;

	#[test]
	fn query_failures_are_server_errors()
	{
		let response = ErrorResponse::from(Error::Database(sqlx::Error::RowNotFound));

		assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
		assert!(response.message().starts_with("Database error: "), "{}", response.message());
	}

	#[test]
	fn connection_failures_hide_the_driver_error()
	{
		let response = ErrorResponse::from(Error::StorageUnavailable(sqlx::Error::PoolTimedOut));

		assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(response.message(), "Database connection failed");
	}

	#[test]
	fn validation_failures_are_client_errors()
	{
		assert_eq!(Error::InvalidRank { rank: 0 }.status(), http::StatusCode::BAD_REQUEST);
		assert_eq!(Error::InvalidLimit { limit: 101 }.status(), http::StatusCode::BAD_REQUEST);
		assert_eq!(Error::VoterNotFound { rank: 7 }.status(), http::StatusCode::NOT_FOUND);
	}
}
