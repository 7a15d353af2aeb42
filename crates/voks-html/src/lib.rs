//! # Voks HTML
//!
//! Leaf building blocks shared by the voks template engine:
//!
//! - HTML escaping of untrusted text, with [`RawContent`] as the only bypass
//! - [`StaticFragment`] for trusted literal template text
//! - [`Attribute`] descriptors that format themselves per value shape
//! - A cosmetic whitespace [`minify`] pass
//!
//! ## Example
//!
//! ```
//! use voks_html::{attr, escape_html, raw, escape};
//!
//! assert_eq!(escape_html("a < b"), "a &lt; b");
//! assert_eq!(escape(&raw("<br>")), "<br>");
//! assert_eq!(attr("ariaHidden", true).to_string(), "aria-hidden ");
//! ```

pub mod attribute;
pub mod escaping;
pub mod markers;
pub mod minify;
pub mod number;

pub use attribute::{Attribute, AttributeValue, attr, kebab_case};
pub use escaping::{HtmlEscape, escape, escape_html, unescape_html};
pub use markers::{RawContent, StaticFragment, raw};
pub use minify::minify;
pub use number::{format_float, format_number};
