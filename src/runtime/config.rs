//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the command line or the environment on startup.
//!
//! See the `.env.example` file in the root of the repository for all the
//! relevant variables and example values.

use std::fmt;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use clap::ArgAction;
use url::Url;

use crate::database::TableName;

/// The API's runtime configuration.
///
/// This is constructed once in `main()` and then handed to [`crate::run()`];
/// nothing else reads the environment.
#[derive(Clone, clap::Parser)]
#[command(version, about)]
pub struct Config
{
	/// The address to listen for HTTP requests on.
	#[arg(long, env = "VOTERS_API_ADDR", default_value = "127.0.0.1:5000")]
	pub addr: SocketAddr,

	#[allow(missing_docs)]
	#[command(flatten)]
	pub database: DatabaseConfig,

	#[allow(missing_docs)]
	#[command(flatten)]
	pub logging: LoggingConfig,
}

/// Everything needed to reach the voter table.
#[derive(Clone, clap::Args)]
pub struct DatabaseConfig
{
	/// Full database connection URL.
	///
	/// If this is set, the individual `--db-*` connection options are ignored.
	#[arg(long, env = "DATABASE_URL")]
	pub database_url: Option<Url>,

	/// Database host.
	#[arg(long = "db-host", env = "VOTERS_DB_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Database port.
	#[arg(long = "db-port", env = "VOTERS_DB_PORT", default_value_t = 3306)]
	pub port: u16,

	/// Database user.
	#[arg(long = "db-user", env = "VOTERS_DB_USER", default_value = "root")]
	pub user: String,

	/// Database password.
	#[arg(long = "db-password", env = "VOTERS_DB_PASSWORD", default_value = "", hide_env_values = true)]
	pub password: String,

	/// Name of the database containing the voter table.
	#[arg(long = "db-name", env = "VOTERS_DB_NAME", required_unless_present = "database_url")]
	pub name: Option<String>,

	/// Character set to use for the connection.
	#[arg(long = "db-charset", env = "VOTERS_DB_CHARSET", default_value = "utf8mb4")]
	pub charset: String,

	/// Name of the table the voting plugin writes to.
	#[arg(long = "db-table", env = "VOTERS_DB_TABLE", default_value = "VotingPlugin_Users")]
	pub table: TableName,

	/// Maximum number of pooled connections.
	///
	/// Defaults to twice the available parallelism.
	#[arg(long = "db-max-connections", env = "VOTERS_DB_MAX_CONNECTIONS")]
	pub max_connections: Option<NonZeroU32>,

	/// How many seconds to wait for a connection before giving up.
	#[arg(long = "db-acquire-timeout", env = "VOTERS_DB_ACQUIRE_TIMEOUT", default_value_t = 5)]
	pub acquire_timeout_secs: u64,
}

impl DatabaseConfig
{
	/// How long to wait for a connection before reporting the database as
	/// unavailable.
	pub fn acquire_timeout(&self) -> Duration
	{
		Duration::from_secs(self.acquire_timeout_secs)
	}
}

/// Where logs should go.
///
/// Log levels are controlled by the `RUST_LOG` environment variable.
#[derive(Debug, Clone, clap::Args)]
pub struct LoggingConfig
{
	/// Directory for daily-rotated log files.
	///
	/// File logging is disabled if this is not set.
	#[arg(long, env = "VOTERS_API_LOG_DIR")]
	pub log_dir: Option<PathBuf>,

	/// Whether to emit ANSI escape codes to stderr.
	#[arg(long, env = "VOTERS_API_LOG_ANSI", default_value_t = true, action = ArgAction::Set)]
	pub log_ansi: bool,
}

impl fmt::Debug for Config
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Config")
			.field("addr", &format_args!("{}", self.addr))
			.field("database", &self.database)
			.field("logging", &self.logging)
			.finish()
	}
}

impl fmt::Debug for DatabaseConfig
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let database_url = self.database_url.as_ref().map(|url| {
			let mut url = url.clone();

			if url.password().is_some() {
				_ = url.set_password(Some("*****"));
			}

			url
		});

		f.debug_struct("DatabaseConfig")
			.field("database_url", &database_url.as_ref().map(Url::as_str))
			.field("host", &self.host)
			.field("port", &self.port)
			.field("user", &self.user)
			.field("password", &"*****")
			.field("name", &self.name)
			.field("charset", &self.charset)
			.field("table", &format_args!("{}", self.table))
			.field("max_connections", &self.max_connections)
			.field("acquire_timeout", &self.acquire_timeout())
			.finish()
	}
}
