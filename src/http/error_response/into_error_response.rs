//! This module contains the [`IntoErrorResponse`] trait.
//!
//! It defines the contract for how an error type can be turned into an HTTP
//! error response.

use std::convert;

/// A trait for creating [`ErrorResponse`]s from error types.
///
/// The response message is the error's [`Display`] output, so that is what
/// clients get to see.
///
/// [`ErrorResponse`]: super::ErrorResponse
/// [`Display`]: std::fmt::Display
pub trait IntoErrorResponse: std::error::Error
{
	/// Returns the status code for this error.
	fn status(&self) -> http::StatusCode;
}

impl IntoErrorResponse for convert::Infallible
{
	fn status(&self) -> http::StatusCode
	{
		match *self {}
	}
}
