use clap::Parser;
use vote_leaderboard_api::{runtime, Config};

mod logging;

#[tokio::main]
async fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	// `.env` is optional; everything can also come from the real environment
	let dotenv_result = dotenvy::dotenv();
	let config = Config::parse();
	let _guard = logging::init(&config.logging)?;

	if let Err(error) = dotenv_result {
		if !error.not_found() {
			tracing::warn!(%error, "failed to load `.env` file");
		}
	}

	runtime::panic_hook::install();

	tracing::debug!(?config, "loaded configuration");

	vote_leaderboard_api::run(config).await
}
