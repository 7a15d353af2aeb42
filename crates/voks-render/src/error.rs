//! Error types for the render consumers.

use thiserror::Error;
use voks_template::{BoxError, TemplateError};

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Failures surfaced by the full-buffer and streaming consumers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
	/// Resolving the template failed.
	#[error(transparent)]
	Template(#[from] TemplateError),

	/// The response sink rejected a write.
	#[error("failed to write to the response sink")]
	Sink(#[source] BoxError),

	/// A streaming render stopped; the cause is the wrapped error.
	#[error("Failed to stream the response!")]
	Stream(#[source] Box<RenderError>),
}

impl RenderError {
	/// Wraps `self` as the cause of a stopped stream.
	pub fn into_stream_failure(self) -> Self {
		Self::Stream(Box::new(self))
	}

	/// Returns the innermost error that is not a stream wrapper.
	pub fn root(&self) -> &RenderError {
		match self {
			Self::Stream(inner) => inner.root(),
			other => other,
		}
	}
}
