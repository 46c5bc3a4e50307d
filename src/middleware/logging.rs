//! Request logging.
//!
//! Every request gets its own `request` span, created by
//! [`tower_http::trace::TraceLayer`]. The span carries an id, the peer address
//! and the request line, and is filled in with the status and latency once
//! the response is ready, so every event emitted by a handler can be tied
//! back to the request that caused it.
//!
//! The configured layer's type names closures, which is why [`layer!`] is a
//! macro. The hooks it calls are `#[doc(hidden)]` and not meant to be used
//! directly.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request};
use axum::response::Response;
use http::HeaderMap;
use tower_http::classify::ServerErrorsFailureClass;
use uuid::Uuid;

/// Header a reverse proxy may use to hand us its own request id.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied request id we are willing to log.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Builds the request logging middleware.
macro_rules! layer {
	() => {
		tower_http::trace::TraceLayer::new_for_http()
			.make_span_with($crate::middleware::logging::make_span)
			.on_response($crate::middleware::logging::on_response)
			.on_failure($crate::middleware::logging::on_failure)
	};
}

pub(crate) use layer;

/// Picks the id for a request's span.
///
/// A non-empty, printable `x-request-id` header is reused so log lines can be
/// correlated with the proxy in front of us; otherwise a fresh UUIDv7 is
/// generated.
pub(crate) fn request_id(headers: &HeaderMap) -> String
{
	headers
		.get(REQUEST_ID_HEADER)
		.and_then(|value| value.to_str().ok())
		.map(str::trim)
		.filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
		.map_or_else(|| Uuid::now_v7().to_string(), ToOwned::to_owned)
}

#[doc(hidden)]
pub(crate) fn make_span(request: &Request) -> tracing::Span
{
	let peer = request
		.extensions()
		.get::<ConnectInfo<SocketAddr>>()
		.map(|ConnectInfo(addr)| *addr);

	tracing::info_span! {
		target: "vote_leaderboard_api::http",
		"request",
		id = %request_id(request.headers()),
		peer = ?peer,
		method = %request.method(),
		uri = %request.uri(),
		status = tracing::field::Empty,
		latency = tracing::field::Empty,
	}
}

#[doc(hidden)]
pub(crate) fn on_response(response: &Response, latency: Duration, span: &tracing::Span)
{
	let status = response.status();

	span.record("status", status.as_u16())
		.record("latency", format_args!("{latency:?}"));

	// server errors are reported by `on_failure`
	if status.is_client_error() {
		tracing::debug!(target: "vote_leaderboard_api::http", %status, "rejected request");
	} else if !status.is_server_error() {
		tracing::debug!(target: "vote_leaderboard_api::http", %status, "served request");
	}
}

#[doc(hidden)]
pub(crate) fn on_failure(
	failure: ServerErrorsFailureClass,
	latency: Duration,
	_span: &tracing::Span,
)
{
	match failure {
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::error!(target: "vote_leaderboard_api::http", %status, ?latency, "request failed");
		}
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(target: "vote_leaderboard_api::http", %error, ?latency, "request failed");
		}
	}
}
