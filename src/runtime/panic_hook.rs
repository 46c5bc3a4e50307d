//! This module contains a function that will install a global panic hook.
//!
//! See [`std::panic::set_hook()`] for more details.

use std::backtrace::Backtrace;
use std::panic;

/// Installs a panic hook that reports panics through [`tracing`].
///
/// Panics inside request handlers are additionally turned into responses by
/// [`crate::middleware::panic_handler`]; this hook makes sure they also end up
/// in the logs, together with a backtrace. The previous hook will be invoked
/// afterwards.
#[tracing::instrument(target = "vote_leaderboard_api::runtime", name = "panic_hook")]
pub fn install()
{
	let old_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		let backtrace = Backtrace::force_capture();

		tracing::error!(target: "vote_leaderboard_api::runtime", "\n{info}\n---\nbacktrace:\n{backtrace}");

		old_hook(info)
	}));

	tracing::debug!("installed panic hook");
}
