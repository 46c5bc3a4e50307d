//! This module contains the [`Path`] extractor, a wrapper around
//! [`axum::extract::Path`] with a custom error response.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::{EndpointNotFound, ErrorResponse};

#[allow(clippy::missing_docs_in_private_items)]
mod base
{
	pub use axum::extract::rejection::PathRejection;
	pub use axum::extract::Path;
}

/// An extractor for URI segment captures.
///
/// This wraps [`axum::extract::Path`] exactly, but a segment that cannot be
/// parsed into `T` is treated as if the route did not exist at all, i.e.
/// `/api/voter/abc` gets the same response as any other unknown URI.
#[derive(Debug, FromRequestParts)]
#[from_request(via(base::Path), rejection(PathRejection))]
pub struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct PathRejection(#[from] pub base::PathRejection);

impl IntoResponse for PathRejection
{
	fn into_response(self) -> Response
	{
		tracing::debug!(rejection = %self.0, "rejecting path parameters");

		ErrorResponse::from(EndpointNotFound).into_response()
	}
}
