//! Content markers deciding whether text is escaped
//!
//! [`StaticFragment`] wraps the literal source segments of a template and
//! [`RawContent`] wraps caller-supplied text that must be emitted verbatim.
//! Both are immutable once built.

use std::borrow::Cow;
use std::fmt;

/// A trusted literal segment of a template
///
/// # Examples
///
/// ```
/// use voks_html::StaticFragment;
///
/// let fragment = StaticFragment::new("<div>");
/// assert_eq!(fragment.as_str(), "<div>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaticFragment(Cow<'static, str>);

impl StaticFragment {
	/// Creates a new static fragment
	pub fn new(content: impl Into<Cow<'static, str>>) -> Self {
		Self(content.into())
	}

	/// Get the literal text
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns `true` for a zero-length segment
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Convert to the owned literal text
	pub fn into_string(self) -> String {
		self.0.into_owned()
	}
}

impl From<&'static str> for StaticFragment {
	fn from(s: &'static str) -> Self {
		Self::new(s)
	}
}

impl From<String> for StaticFragment {
	fn from(s: String) -> Self {
		Self::new(s)
	}
}

impl AsRef<str> for StaticFragment {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for StaticFragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Caller-marked content that bypasses escaping
///
/// The wrapped value is stringified once, at construction.
///
/// # Examples
///
/// ```
/// use voks_html::{RawContent, raw};
///
/// let content = raw("<b>Bold</b>");
/// assert_eq!(content.as_str(), "<b>Bold</b>");
/// assert_eq!(RawContent::new(42).as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContent(String);

impl RawContent {
	/// Wraps any displayable value as raw content
	pub fn new(content: impl fmt::Display) -> Self {
		Self(content.to_string())
	}

	/// Get the verbatim text
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert to String
	pub fn into_string(self) -> String {
		self.0
	}
}

impl AsRef<str> for RawContent {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for RawContent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Mark `content` as raw so it is emitted without escaping
pub fn raw(content: impl fmt::Display) -> RawContent {
	RawContent::new(content)
}
