//! # Voks
//!
//! Streaming HTML templates whose dynamic parts may be asynchronous.
//!
//! A template is literal markup with interpolated values. Values can be plain
//! text and numbers (escaped), attributes, raw markup, nested templates,
//! foreign chunk streams or futures that settle into any of these. Rendering
//! walks the template in declaration order and produces output chunks lazily,
//! waiting on one pending value at a time, so a slow leading value never lets
//! a fast trailing one jump ahead.
//!
//! ## Feature Flags
//!
//! - `html` - escaping, raw content and attribute formatting (`voks-html`)
//! - `template` - template units and the resolution engine (`voks-template`)
//! - `render` (default) - full-buffer and streaming consumers (`voks-render`)
//! - `full` - everything
//!
//! ## Quick Example
//!
//! ```
//! use voks::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let name = Unit::pending(async { "<Ada>" });
//! let page = html!(
//! 	"<main " {attr("dataUser", "ada")} ">"
//! 	"<h1>Hello, " {name} "</h1>"
//! 	{raw("<hr>")}
//! 	"</main>"
//! );
//!
//! let output = render_to_string(page).await.unwrap();
//! assert_eq!(output, r#"<main data-user="ada"><h1>Hello, &lt;Ada&gt;</h1><hr></main>"#);
//! # });
//! ```

#[cfg(feature = "html")]
pub use voks_html as html;

#[cfg(feature = "template")]
pub use voks_template as template;

#[cfg(feature = "render")]
pub use voks_render as render;

// Convenience re-exports for common types
#[cfg(feature = "html")]
pub use voks_html::{Attribute, AttributeValue, RawContent, attr, escape_html, minify, raw};

#[cfg(feature = "template")]
pub use voks_template::{Chunks, Template, TemplateError, Unit, html};

#[cfg(feature = "render")]
pub use voks_render::{
	RenderError, RenderResult, ResponseSink, StreamOptions, StreamRenderer, WriterSink,
	render_to_stream, render_to_string,
};

/// Everything needed to write and render templates
pub mod prelude {
	#[cfg(feature = "html")]
	pub use crate::{Attribute, RawContent, attr, raw};

	#[cfg(feature = "template")]
	pub use crate::{Template, Unit, html};

	#[cfg(feature = "render")]
	pub use crate::{
		RenderError, ResponseSink, StreamOptions, StreamRenderer, WriterSink, render_to_stream,
		render_to_string,
	};
}
