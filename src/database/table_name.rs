//! This module contains the [`TableName`] type.

use std::fmt;
use std::str::FromStr;

use lazy_regex::regex_is_match;
use thiserror::Error;

/// The name of a database table.
///
/// Table names cannot be bound as query parameters, so they end up formatted
/// into SQL directly. This type only admits plain identifiers, which makes
/// that safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

/// The error returned when parsing a [`TableName`] fails.
#[derive(Debug, Error)]
#[error("`{0}` is not a valid table name; only ASCII letters, digits, `_` and `$` are allowed")]
pub struct InvalidTableName(String);

impl TableName
{
	/// Returns the name as a string slice.
	pub fn as_str(&self) -> &str
	{
		&self.0
	}
}

impl FromStr for TableName
{
	type Err = InvalidTableName;

	fn from_str(name: &str) -> Result<Self, Self::Err>
	{
		if regex_is_match!(r"^[A-Za-z0-9_$]{1,64}$", name) {
			Ok(Self(name.to_owned()))
		} else {
			Err(InvalidTableName(name.to_owned()))
		}
	}
}

impl fmt::Display for TableName
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(&self.0)
	}
}
