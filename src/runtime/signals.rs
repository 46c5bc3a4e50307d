//! Shutdown signals.
//!
//! The server stops accepting connections once either `SIGINT` (Ctrl-C) or,
//! on unix, `SIGTERM` (what container runtimes send) arrives.

use tokio::signal;

/// Resolves once the process has been asked to shut down.
///
/// If a handler cannot be installed, that signal is treated as never arriving
/// and the other one still works.
pub async fn shutdown()
{
	let interrupt = async {
		if let Err(error) = signal::ctrl_c().await {
			tracing::error!(target: "vote_leaderboard_api::runtime", %error, "cannot listen for SIGINT");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut sigterm) => {
				sigterm.recv().await;
			}
			Err(error) => {
				tracing::error!(target: "vote_leaderboard_api::runtime", %error, "cannot listen for SIGTERM");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		() = interrupt => tracing::warn!(target: "vote_leaderboard_api::runtime", "received SIGINT, shutting down"),
		() = terminate => tracing::warn!(target: "vote_leaderboard_api::runtime", "received SIGTERM, shutting down"),
	}
}
