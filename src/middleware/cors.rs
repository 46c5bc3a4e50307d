//! CORS middlewares.

use http::Method;
use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer that allows `GET` requests from any
/// origin.
///
/// The leaderboard is public and read-only, so any website may embed it.
pub fn permissive() -> CorsLayer
{
	CorsLayer::permissive().allow_methods([Method::GET])
}
