//! HTTP plumbing shared by every service.
//!
//! Errors returned from handlers are turned into [`ErrorResponse`]s, which
//! render as `{ "error": "<message>" }` with a matching status code.

use thiserror::Error;

pub mod extract;

mod error_response;
pub use error_response::{ErrorResponse, IntoErrorResponse};

/// The request did not match any route.
#[derive(Debug, Clone, Copy, Error)]
#[error("Endpoint not found")]
pub struct EndpointNotFound;

impl IntoErrorResponse for EndpointNotFound
{
	fn status(&self) -> http::StatusCode
	{
		http::StatusCode::NOT_FOUND
	}
}

/// Fallback handler for requests that did not match any route.
#[tracing::instrument(level = "debug")]
pub(crate) async fn endpoint_not_found() -> ErrorResponse
{
	ErrorResponse::from(EndpointNotFound)
}

/// The route exists, but not for the request's method.
#[derive(Debug, Clone, Copy, Error)]
#[error("Method not allowed")]
pub struct MethodNotAllowed;

impl IntoErrorResponse for MethodNotAllowed
{
	fn status(&self) -> http::StatusCode
	{
		http::StatusCode::METHOD_NOT_ALLOWED
	}
}

/// Fallback handler for known routes hit with an unsupported method.
#[tracing::instrument(level = "debug")]
pub(crate) async fn method_not_allowed(method: http::Method) -> ErrorResponse
{
	ErrorResponse::from(MethodNotAllowed)
}
