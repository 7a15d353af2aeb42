//! Streaming configuration.

use serde::{Deserialize, Serialize};

/// Options for a streaming render.
///
/// Deserializes from host settings with every key optional.
///
/// # Examples
///
/// ```
/// use voks_render::StreamOptions;
///
/// let options = StreamOptions::new().close_stream(true);
/// assert!(options.close_stream);
/// assert!(!StreamOptions::default().close_stream);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamOptions {
	/// Close and end the sink once every chunk has been written.
	pub close_stream: bool,
}

impl StreamOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether the sink is closed after a successful render.
	pub fn close_stream(mut self, close: bool) -> Self {
		self.close_stream = close;
		self
	}
}
