//! Trace capturing facilities.

use color_eyre::eyre::WrapErr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use vote_leaderboard_api::runtime::config::LoggingConfig;

mod stderr;
mod files;

/// Used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "vote_leaderboard_api=info,tower_http=info,warn";

#[derive(Debug)]
pub struct Guard
{
	/// The guard returned by [`tracing-appender`]'s logging thread.
	#[allow(dead_code)]
	appender_guard: Option<WorkerGuard>,
}

/// Initializes [`tracing-subscriber`].
///
/// NOTE: the returned [`Guard`] flushes the file logger when dropped, which
/// means it has to stay alive until the program exits!
pub fn init(config: &LoggingConfig) -> color_eyre::Result<Guard>
{
	let stderr = stderr::layer(config.log_ansi);
	let (files, appender_guard) = match config.log_dir.as_deref() {
		None => (None, None),
		Some(log_dir) => {
			let (layer, guard) = files::layer(log_dir).context("initialize files tracing layer")?;
			(Some(layer), Some(guard))
		}
	};

	tracing_subscriber::registry()
		.with(Layer::and_then(stderr, files).with_filter(filter()?))
		.try_init()
		.context("install global tracing subscriber")?;

	tracing::info!(log_dir = ?config.log_dir, "initialized tracing");

	Ok(Guard { appender_guard })
}

/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
fn filter() -> color_eyre::Result<EnvFilter>
{
	match EnvFilter::try_from_default_env() {
		Ok(filter) => Ok(filter),
		Err(error) if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() => {
			Err(error).context("parse `RUST_LOG`")
		}
		Err(_) => EnvFilter::try_new(DEFAULT_FILTER).context("parse default log filter"),
	}
}
