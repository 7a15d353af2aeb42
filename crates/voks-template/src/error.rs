//! Error types for template resolution.

use thiserror::Error;

/// Boxed error produced by dynamic template values
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for template resolution.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Failures surfaced while resolving a template into chunks.
///
/// The engine never recovers from these; the chunk sequence ends right after
/// yielding one.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
	/// A pending value settled with an error.
	#[error("failed to resolve a dynamic template value")]
	Settlement(#[source] BoxError),

	/// A nested chunk stream yielded an error.
	#[error("nested chunk stream failed")]
	Chunk(#[source] BoxError),
}
