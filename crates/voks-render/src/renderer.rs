//! The two consumers of a template's chunk stream
//!
//! [`render_to_string`] buffers the whole document and hands every failure
//! straight back to its caller. [`StreamRenderer`] forwards each chunk to a
//! [`ResponseSink`] as soon as it is produced and reports failures before
//! returning them.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use voks_template::Template;

use crate::error::{RenderError, RenderResult};
use crate::options::StreamOptions;
use crate::reporter::{FailureReporter, TracingReporter};
use crate::sink::ResponseSink;

/// Renders a template, or a list of templates, into one string
///
/// A list of templates is rendered back to back with no separator.
///
/// # Examples
///
/// ```
/// use voks_render::render_to_string;
/// use voks_template::{Unit, html};
///
/// # tokio_test::block_on(async {
/// let html = render_to_string(html!("<p>" {Unit::pending(async { 0 })} "</p>")).await.unwrap();
/// assert_eq!(html, "<p>0</p>");
///
/// let list = render_to_string(vec![html!("<a>"), html!("</a>")]).await.unwrap();
/// assert_eq!(list, "<a></a>");
/// # });
/// ```
pub async fn render_to_string(template: impl Into<Template>) -> RenderResult<String> {
	let output = template
		.into()
		.into_chunks()
		.try_fold(String::new(), |mut output, chunk| async move {
			output.push_str(&chunk);
			Ok(output)
		})
		.await?;
	Ok(output)
}

/// Streams a template into `sink` with the default reporter
///
/// Shorthand for [`StreamRenderer::with_options`] followed by
/// [`StreamRenderer::render`].
pub async fn render_to_stream<S>(
	sink: S,
	template: impl Into<Template>,
	options: StreamOptions,
) -> RenderResult<()>
where
	S: ResponseSink,
{
	StreamRenderer::with_options(options).render(sink, template).await
}

/// Streaming consumer
///
/// Chunks are written one at a time, each write awaited before the next chunk
/// is requested. On the first failure, from resolution or from the sink, the
/// render stops writing, reports a [`RenderError::Stream`] wrapping the cause
/// and returns it. The sink is left as it is.
///
/// # Examples
///
/// ```
/// use voks_render::{StreamOptions, StreamRenderer, WriterSink};
/// use voks_template::html;
///
/// # tokio_test::block_on(async {
/// let mut sink = WriterSink::new(Vec::new());
/// StreamRenderer::new().render(&mut sink, html!("<p>" {"a & b"} "</p>")).await.unwrap();
/// assert_eq!(sink.into_inner(), b"<p>a &amp; b</p>");
/// # });
/// ```
#[derive(Clone)]
pub struct StreamRenderer {
	options: StreamOptions,
	reporter: Arc<dyn FailureReporter>,
}

impl StreamRenderer {
	/// Creates a renderer with default options that logs failures through `tracing`.
	pub fn new() -> Self {
		Self {
			options: StreamOptions::default(),
			reporter: Arc::new(TracingReporter),
		}
	}

	/// Creates a renderer with the given options and the default reporter.
	pub fn with_options(options: StreamOptions) -> Self {
		Self::new().options(options)
	}

	/// Creates a renderer with default options and the given reporter.
	pub fn with_reporter(reporter: impl FailureReporter + 'static) -> Self {
		Self::new().reporter(reporter)
	}

	/// Sets the stream options.
	pub fn options(mut self, options: StreamOptions) -> Self {
		self.options = options;
		self
	}

	/// Sets the failure reporter.
	pub fn reporter(mut self, reporter: impl FailureReporter + 'static) -> Self {
		self.reporter = Arc::new(reporter);
		self
	}

	/// Get the stream options
	pub fn stream_options(&self) -> &StreamOptions {
		&self.options
	}

	/// Streams `template` into `sink`.
	pub async fn render<S>(&self, mut sink: S, template: impl Into<Template>) -> RenderResult<()>
	where
		S: ResponseSink,
	{
		match self.drain(&mut sink, template.into()).await {
			Ok(written) => {
				tracing::debug!(chunks = written, "response stream completed");
				Ok(())
			}
			Err(cause) => {
				let error = cause.into_stream_failure();
				self.reporter.report(&error);
				Err(error)
			}
		}
	}

	async fn drain<S>(&self, sink: &mut S, template: Template) -> RenderResult<usize>
	where
		S: ResponseSink,
	{
		let mut chunks = template.into_chunks();
		let mut written = 0;
		while let Some(chunk) = chunks.next().await {
			let chunk = chunk?;
			sink.write(Bytes::from(chunk)).await.map_err(RenderError::Sink)?;
			written += 1;
		}

		if self.options.close_stream {
			sink.close().await.map_err(RenderError::Sink)?;
			sink.end().await.map_err(RenderError::Sink)?;
			tracing::debug!("response stream closed");
		}
		Ok(written)
	}
}

impl Default for StreamRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for StreamRenderer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StreamRenderer")
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}
