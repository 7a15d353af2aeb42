//! HTML escaping for dynamic template content
//!
//! Every dynamic value that ends up as plain text in the output goes through
//! [`escape`]. Static template text and [`RawContent`] never do.
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#39;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`

use std::borrow::Cow;

use crate::markers::RawContent;

/// Escape HTML special characters
///
/// Works in a single pass, which is equivalent to replacing `&` before any
/// other character: entities introduced by the replacement are never escaped
/// a second time.
///
/// # Examples
///
/// ```
/// use voks_html::escape_html;
///
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#39;XSS&#39;)&lt;/script&gt;");
/// assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
/// assert_eq!(escape_html(r#"<a href="test">link</a>"#),
///            "&lt;a href=&quot;test&quot;&gt;link&lt;/a&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Unescape HTML entities
///
/// Inverse of [`escape_html`], applied in the opposite order so that `&amp;`
/// is resolved last. Only meant for text that was produced by
/// [`escape_html`]; raw content has no inverse.
///
/// # Examples
///
/// ```
/// use voks_html::unescape_html;
///
/// assert_eq!(unescape_html("&lt;div&gt;"), "<div>");
/// assert_eq!(unescape_html("&quot;quoted&quot;"), r#""quoted""#);
/// assert_eq!(unescape_html("&#39;single&#39;"), "'single'");
/// assert_eq!(unescape_html("&amp;lt;"), "&lt;");
/// ```
pub fn unescape_html(s: &str) -> String {
	s.replace("&gt;", ">")
		.replace("&lt;", "<")
		.replace("&#39;", "'")
		.replace("&quot;", "\"")
		.replace("&amp;", "&")
}

/// Values that know how to present themselves as HTML-safe text
///
/// Plain strings are entity-escaped. [`RawContent`] is the single bypass:
/// it hands back its content untouched.
pub trait HtmlEscape {
	/// Returns the HTML-safe form of this value
	fn escape_html(&self) -> Cow<'_, str>;
}

impl HtmlEscape for str {
	fn escape_html(&self) -> Cow<'_, str> {
		if self.contains(['&', '"', '\'', '<', '>']) {
			Cow::Owned(escape_html(self))
		} else {
			Cow::Borrowed(self)
		}
	}
}

impl HtmlEscape for String {
	fn escape_html(&self) -> Cow<'_, str> {
		self.as_str().escape_html()
	}
}

impl HtmlEscape for RawContent {
	fn escape_html(&self) -> Cow<'_, str> {
		Cow::Borrowed(self.as_str())
	}
}

impl<T: HtmlEscape + ?Sized> HtmlEscape for &T {
	fn escape_html(&self) -> Cow<'_, str> {
		(**self).escape_html()
	}
}

/// Escape a dynamic value for output
///
/// # Examples
///
/// ```
/// use voks_html::{RawContent, escape};
///
/// assert_eq!(escape("<b>"), "&lt;b&gt;");
/// assert_eq!(escape(&RawContent::new("<b>")), "<b>");
/// ```
pub fn escape<T: HtmlEscape + ?Sized>(value: &T) -> Cow<'_, str> {
	value.escape_html()
}
