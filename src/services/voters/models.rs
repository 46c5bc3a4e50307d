//! Request / Response types for this service.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::last_votes::{LastVotes, NormalizedVote};

/// A single row of the voter table, as stored by the voting plugin.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VoterRecord
{
	/// The voter's in-game name.
	#[sqlx(rename = "PlayerName")]
	pub player_name: String,

	/// The voter's last vote(s), in whichever format the plugin wrote them.
	#[sqlx(rename = "LastVotes")]
	pub last_votes: Option<String>,

	/// How often this player has voted, ever.
	#[sqlx(rename = "AllTimeTotal")]
	pub all_time_total: i64,
}

/// A voter and their position on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RankedVoter
{
	/// 1-based leaderboard position.
	pub rank: u64,

	/// The voter's in-game name.
	#[serde(rename = "PlayerName")]
	pub player_name: String,

	/// The voter's last vote(s).
	///
	/// This is whatever JSON was stored, the vote site with its timestamp
	/// removed, the raw string if it could not be interpreted, or `null`.
	#[serde(rename = "LastVotes")]
	#[schema(value_type = Object, nullable)]
	pub last_votes: JsonValue,

	/// How often this player has voted, ever.
	#[serde(rename = "AllTimeTotal")]
	pub all_time_total: i64,

	/// When the last vote was cast (`YYYY-MM-DD HH:MM:SS`, server local time).
	///
	/// Only present if `LastVotes` carried a timestamp.
	#[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
	pub time: Option<String>,
}

impl RankedVoter
{
	/// Assigns `rank` to a raw `record`, normalizing its `LastVotes` column.
	pub fn new(rank: u64, record: VoterRecord) -> Self
	{
		let NormalizedVote { label, observed_at } =
			LastVotes::parse(record.last_votes.as_deref()).normalize();

		Self {
			rank,
			player_name: record.player_name,
			last_votes: label,
			all_time_total: record.all_time_total,
			time: observed_at,
		}
	}
}

impl IntoResponse for RankedVoter
{
	fn into_response(self) -> Response
	{
		Json(self).into_response()
	}
}

/// Request payload for fetching the voter at a given rank.
#[derive(Debug, Clone, Copy)]
pub struct FetchVoterRequest
{
	/// The requested rank; must be at least 1.
	pub rank: i64,
}

/// Request payload for fetching the top of the leaderboard.
#[derive(Debug, Clone, Copy)]
pub struct FetchTopVotersRequest
{
	/// How many voters to return; must be within `1..=100`.
	pub limit: i64,
}

/// Response payload for fetching the top of the leaderboard.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FetchTopVotersResponse
{
	/// How many voters were returned.
	///
	/// This can be less than the requested limit if there aren't enough
	/// voters.
	pub total_results: usize,

	/// The voters, best first.
	pub voters: Vec<RankedVoter>,
}

impl IntoResponse for FetchTopVotersResponse
{
	fn into_response(self) -> Response
	{
		Json(self).into_response()
	}
}

#[cfg(test)]
mod tests
{
	use serde_json::json;

	use super::*;

	fn record(last_votes: Option<&str>) -> VoterRecord
	{
		VoterRecord {
			player_name: String::from("Steve"),
			last_votes: last_votes.map(ToOwned::to_owned),
			all_time_total: 120,
		}
	}

	#[test]
	fn time_is_omitted_without_timestamp()
	{
		let voter = RankedVoter::new(1, record(None));
		let json = serde_json::to_value(&voter).unwrap();

		assert_eq!(
			json,
			json!({
				"rank": 1,
				"PlayerName": "Steve",
				"LastVotes": null,
				"AllTimeTotal": 120,
			})
		);
	}

	#[test]
	fn time_is_included_with_timestamp()
	{
		let voter = RankedVoter::new(3, record(Some("MinecraftMP//1752507579111")));
		let json = serde_json::to_value(&voter).unwrap();

		assert_eq!(json["rank"], 3);
		assert_eq!(json["LastVotes"], "MinecraftMP");
		assert!(json["Time"].is_string(), "{json}");
	}

	#[test]
	fn json_votes_are_embedded()
	{
		let voter = RankedVoter::new(1, record(Some(r#"{"a":1}"#)));
		let json = serde_json::to_value(&voter).unwrap();

		assert_eq!(json["LastVotes"], json!({ "a": 1 }));
		assert!(json.get("Time").is_none(), "{json}");
	}
}
