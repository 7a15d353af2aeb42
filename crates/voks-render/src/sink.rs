//! Response sinks, the destination of a streaming render

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use voks_template::BoxError;

/// Destination of a streaming render
///
/// Only one write is in flight at a time: the renderer awaits each `write`
/// before it requests the next chunk, so a slow sink slows resolution down.
/// `close` and `end` are only called when
/// [`StreamOptions::close_stream`](crate::StreamOptions::close_stream) is set.
#[async_trait]
pub trait ResponseSink: Send {
	/// Writes one chunk.
	async fn write(&mut self, chunk: Bytes) -> Result<(), BoxError>;

	/// Closes the sink after the last chunk.
	async fn close(&mut self) -> Result<(), BoxError> {
		Ok(())
	}

	/// Ends the response after [`close`](ResponseSink::close).
	async fn end(&mut self) -> Result<(), BoxError> {
		Ok(())
	}
}

#[async_trait]
impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
	async fn write(&mut self, chunk: Bytes) -> Result<(), BoxError> {
		(**self).write(chunk).await
	}

	async fn close(&mut self) -> Result<(), BoxError> {
		(**self).close().await
	}

	async fn end(&mut self) -> Result<(), BoxError> {
		(**self).end().await
	}
}

/// Adapts any tokio writer into a [`ResponseSink`]
///
/// Every chunk is written whole and flushed. Closing shuts the writer down.
///
/// # Examples
///
/// ```
/// use voks_render::{ResponseSink, WriterSink};
///
/// # tokio_test::block_on(async {
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write("<p>".into()).await.unwrap();
/// assert_eq!(sink.into_inner(), b"<p>");
/// # });
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
	writer: W,
}

impl<W> WriterSink<W> {
	/// Wraps `writer`.
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Get a reference to the underlying writer
	pub fn get_ref(&self) -> &W {
		&self.writer
	}

	/// Convert into the underlying writer
	pub fn into_inner(self) -> W {
		self.writer
	}
}

#[async_trait]
impl<W> ResponseSink for WriterSink<W>
where
	W: AsyncWrite + Unpin + Send,
{
	async fn write(&mut self, chunk: Bytes) -> Result<(), BoxError> {
		self.writer.write_all(&chunk).await?;
		self.writer.flush().await?;
		Ok(())
	}

	async fn close(&mut self) -> Result<(), BoxError> {
		self.writer.shutdown().await?;
		Ok(())
	}
}
