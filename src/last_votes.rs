//! Normalization of the raw `LastVotes` column.
//!
//! The voting plugin has written this column in several formats over time, so
//! there is no single schema to decode it with. Instead, [`LastVotes::parse()`]
//! tries every known format in order and keeps the first one that fits:
//!
//! 1. `NULL` or an empty string => [`LastVotes::Empty`]
//! 2. any valid JSON value => [`LastVotes::Json`]
//! 3. a vote site followed by `//<unix millis>` => [`LastVotes::Delimited`]
//! 4. anything else => [`LastVotes::Opaque`]
//!
//! None of these steps can fail; a value that doesn't fit a format simply
//! falls through to the next one.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use lazy_regex::{regex, Lazy, Regex};
use serde_json::Value as JsonValue;

/// Matches a `//` followed by a run of ASCII digits, e.g. the `//1752507579111`
/// in `MinecraftMP//1752507579111`.
///
/// `\d` would also match non-ASCII digits, which `i64::from_str` rejects.
static TIMESTAMP_SUFFIX: &Lazy<Regex> = regex!(r"//([0-9]+)");

/// The format used for [`NormalizedVote::observed_at`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw `LastVotes` value, classified by its format.
#[derive(Debug, Clone, PartialEq)]
pub enum LastVotes
{
	/// The column was `NULL` or empty.
	Empty,

	/// The column held a JSON document.
	Json(JsonValue),

	/// The column held a `<label>//<unix millis>` token.
	Delimited
	{
		/// The raw value with every `//<digits>` run removed.
		label: String,

		/// The moment of the vote, taken from the first `//<digits>` run.
		timestamp: DateTime<Utc>,
	},

	/// The column held text in no known format.
	Opaque(String),
}

/// A [`LastVotes`] value flattened into what the API returns.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedVote
{
	/// The value returned as `LastVotes`.
	pub label: JsonValue,

	/// The value returned as `Time`, if a timestamp could be extracted.
	pub observed_at: Option<String>,
}

impl LastVotes
{
	/// Classifies a raw column value.
	pub fn parse(raw: Option<&str>) -> Self
	{
		let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
			return Self::Empty;
		};

		if let Some(value) = parse_json(raw) {
			return Self::Json(value);
		}

		if let Some((label, timestamp)) = parse_delimited(raw) {
			return Self::Delimited { label, timestamp };
		}

		Self::Opaque(raw.to_owned())
	}

	/// Normalizes this value, rendering timestamps in the server's local time
	/// zone.
	pub fn normalize(self) -> NormalizedVote
	{
		self.normalize_in(&Local)
	}

	/// Normalizes this value, rendering timestamps in the given time zone.
	pub fn normalize_in<Tz>(self, tz: &Tz) -> NormalizedVote
	where
		Tz: TimeZone,
		Tz::Offset: fmt::Display,
	{
		match self {
			Self::Empty => NormalizedVote { label: JsonValue::Null, observed_at: None },
			Self::Json(value) => NormalizedVote { label: value, observed_at: None },
			Self::Delimited { label, timestamp } => NormalizedVote {
				label: JsonValue::String(label),
				observed_at: Some(
					timestamp
						.with_timezone(tz)
						.format(TIMESTAMP_FORMAT)
						.to_string(),
				),
			},
			Self::Opaque(raw) => NormalizedVote { label: JsonValue::String(raw), observed_at: None },
		}
	}
}

/// Attempts to parse `raw` as an arbitrary JSON value.
fn parse_json(raw: &str) -> Option<JsonValue>
{
	serde_json::from_str(raw).ok()
}

/// Attempts to split `raw` into a label and a timestamp.
///
/// Returns [`None`] if there is no `//<digits>` run, or if the first one does
/// not describe a representable point in time.
fn parse_delimited(raw: &str) -> Option<(String, DateTime<Utc>)>
{
	let millis = TIMESTAMP_SUFFIX
		.captures(raw)?
		.get(1)?
		.as_str()
		.parse::<i64>()
		.ok()?;

	// sub-second precision is dropped, not rounded
	let timestamp = DateTime::from_timestamp(millis.div_euclid(1000), 0)?;
	let label = TIMESTAMP_SUFFIX.replace_all(raw, "").into_owned();

	Some((label, timestamp))
}
