//! Failure reporting for streaming renders
//!
//! A streaming render has already handed part of the response to the sink
//! when it fails, so the failure is also delivered to the host's
//! observability channel through a [`FailureReporter`].

use std::error::Error as _;

use crate::error::RenderError;

/// Receives every failure that stops a streaming render
pub trait FailureReporter: Send + Sync {
	fn report(&self, error: &RenderError);
}

impl<F> FailureReporter for F
where
	F: Fn(&RenderError) + Send + Sync,
{
	fn report(&self, error: &RenderError) {
		self(error)
	}
}

/// Logs failures with `tracing::error!`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
	fn report(&self, error: &RenderError) {
		let mut causes = Vec::new();
		let mut source = error.source();
		while let Some(cause) = source {
			causes.push(cause.to_string());
			source = cause.source();
		}
		tracing::error!(error = %error, causes = ?causes, "{error}");
	}
}
