//! Tracing layer for logging to files.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;

/// Creates a tracing layer that will emit logs to daily-rotated files in
/// `log_dir`.
///
/// The returned [`WorkerGuard`] must be kept alive so it can perform cleanup
/// when the application shuts down.
pub fn layer<S>(log_dir: &Path) -> color_eyre::Result<(impl tracing_subscriber::Layer<S>, WorkerGuard)>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	if !log_dir.exists() {
		fs::create_dir_all(log_dir).context("create log dir")?;
	}

	let log_dir = log_dir.canonicalize().context("canonicalize log dir path")?;

	let (writer, guard) = tracing_appender::rolling::Builder::new()
		.rotation(Rotation::DAILY)
		.filename_prefix("vote-leaderboard-api")
		.filename_suffix("log")
		.build(&log_dir)
		.map(tracing_appender::non_blocking)
		.context("initialize file appender")?;

	let layer = tracing_subscriber::fmt::layer()
		.compact()
		.with_ansi(false)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::CLOSE)
		.with_target(true)
		.with_writer(writer);

	Ok((layer, guard))
}
