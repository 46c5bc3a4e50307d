//! This module contains wrappers around [`axum`]'s extractors, customizing
//! error responses.

mod path;
pub use path::{Path, PathRejection};
