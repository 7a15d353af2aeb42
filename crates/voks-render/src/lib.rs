//! # Voks Render
//!
//! Consumers that drain a [`Template`](voks_template::Template):
//!
//! - [`render_to_string`]: buffers the whole document, failures go straight to the caller
//! - [`StreamRenderer`] / [`render_to_stream`]: forwards each chunk to a
//!   [`ResponseSink`] as soon as it is produced
//!
//! Streaming is pull-driven. The next chunk is only resolved once the sink has
//! accepted the previous one, so sink backpressure reaches the template.
//!
//! ## Example
//!
//! ```
//! use voks_render::{StreamOptions, WriterSink, render_to_stream};
//! use voks_template::html;
//!
//! # tokio_test::block_on(async {
//! let mut sink = WriterSink::new(Vec::new());
//! render_to_stream(&mut sink, html!("<!DOCTYPE html>"), StreamOptions::new().close_stream(true))
//! 	.await
//! 	.unwrap();
//! assert_eq!(sink.into_inner(), b"<!DOCTYPE html>");
//! # });
//! ```

pub mod error;
pub mod options;
pub mod renderer;
pub mod reporter;
pub mod sink;

pub use error::{RenderError, RenderResult};
pub use options::StreamOptions;
pub use renderer::{StreamRenderer, render_to_stream, render_to_string};
pub use reporter::{FailureReporter, TracingReporter};
pub use sink::{ResponseSink, WriterSink};
