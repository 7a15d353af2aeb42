//! Literal-whitespace minification of rendered HTML
//!
//! This is a cosmetic pass over finished output. It does not understand
//! markup, so whitespace inside `<pre>` or attribute values is collapsed too.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static SPACE_BEFORE_CLOSE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\s>").expect("close pattern is valid"));
static SPACE_BETWEEN_TAGS: Lazy<Regex> =
	Lazy::new(|| Regex::new(r">\s*<").expect("between-tags pattern is valid"));
static SPACE_AFTER_CLOSE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r">\s*").expect("after-close pattern is valid"));

/// Collapse insignificant whitespace in rendered HTML
///
/// # Examples
///
/// ```
/// use voks_html::minify;
///
/// assert_eq!(
///     minify("<html >\n  <head>\n\t<title> test</title>\n  </head>\n</html>"),
///     "<html><head><title>test</title></head></html>"
/// );
/// ```
pub fn minify(text: &str) -> String {
	let text = text.replace('\t', "");
	let text = WHITESPACE_RUN.replace_all(&text, " ");
	let text = SPACE_BEFORE_CLOSE.replace_all(&text, ">");
	let text = SPACE_BETWEEN_TAGS.replace_all(&text, "><");
	SPACE_AFTER_CLOSE.replace_all(&text, ">").into_owned()
}
