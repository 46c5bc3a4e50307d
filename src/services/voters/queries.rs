//! SQL queries used by this service.

use crate::database::TableName;

/// Builds the query for fetching a page of the leaderboard.
///
/// Binds `LIMIT` and `OFFSET`, in that order.
///
/// Voters with equal totals are ordered by name, so ranks are stable across
/// requests and storage engines.
pub(super) fn select_ranked(table: &TableName) -> String
{
	format!(
		r"
		SELECT
		  PlayerName,
		  LastVotes,
		  CAST(AllTimeTotal AS SIGNED) AllTimeTotal
		FROM
		  `{table}`
		WHERE
		  PlayerName IS NOT NULL
		  AND AllTimeTotal > 0
		ORDER BY
		  AllTimeTotal DESC,
		  PlayerName ASC
		LIMIT
		  ? OFFSET ?
		"
	)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn table_name_is_quoted()
	{
		let table = "VotingPlugin_Users".parse::<TableName>().unwrap();
		let query = select_ranked(&table);

		assert!(query.contains("`VotingPlugin_Users`"), "{query}");
		assert!(query.contains("AllTimeTotal DESC"), "{query}");
	}
}
