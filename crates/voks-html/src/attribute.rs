//! Attribute descriptors for dynamically added HTML attributes
//!
//! An [`Attribute`] formats itself depending on the shape of its value:
//!
//! | value | output |
//! |---|---|
//! | `true` | `key ` |
//! | `false`, `null` | nothing |
//! | object or array | `key="<escaped json>" ` |
//! | string or number | `key="<escaped value>" ` |
//! | [`RawContent`] | `key="<verbatim>" ` |
//!
//! The trailing space is part of the contract. The resolution engine trims it
//! when the attribute is the last one before non-attribute content.

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Number, Value};

use crate::escaping::HtmlEscape;
use crate::markers::RawContent;
use crate::number::format_number;

static CAMEL_BOUNDARY: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel boundary pattern is valid"));

/// Converts a camelCase key into kebab-case
///
/// A hyphen is inserted between each lowercase letter and a following
/// uppercase letter, then the whole key is lowercased. Keys that are already
/// kebab-case are returned unchanged.
///
/// # Examples
///
/// ```
/// use voks_html::kebab_case;
///
/// assert_eq!(kebab_case("dataFubar"), "data-fubar");
/// assert_eq!(kebab_case("data-fubar"), "data-fubar");
/// assert_eq!(kebab_case("ariaLabelledBy"), "aria-labelled-by");
/// ```
pub fn kebab_case(key: &str) -> String {
	CAMEL_BOUNDARY.replace_all(key, "$1-$2").to_lowercase()
}

/// The value side of an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
	/// Any JSON-shaped value; `Null` stands for both null and undefined
	Value(Value),
	/// Emitted without escaping
	Raw(RawContent),
}

impl AttributeValue {
	/// The omitted value
	pub const fn null() -> Self {
		Self::Value(Value::Null)
	}

	/// Returns `true` if the value is a boolean
	pub fn is_boolean(&self) -> bool {
		matches!(self, Self::Value(Value::Bool(_)))
	}

	/// Returns `true` if the value is an object or an array
	pub fn is_structured(&self) -> bool {
		matches!(self, Self::Value(Value::Object(_) | Value::Array(_)))
	}
}

impl Default for AttributeValue {
	fn default() -> Self {
		Self::null()
	}
}

impl From<Value> for AttributeValue {
	fn from(value: Value) -> Self {
		Self::Value(value)
	}
}

impl From<Map<String, Value>> for AttributeValue {
	fn from(map: Map<String, Value>) -> Self {
		Self::Value(Value::Object(map))
	}
}

impl From<RawContent> for AttributeValue {
	fn from(raw: RawContent) -> Self {
		Self::Raw(raw)
	}
}

impl From<&str> for AttributeValue {
	fn from(s: &str) -> Self {
		Self::Value(Value::String(s.to_owned()))
	}
}

impl From<String> for AttributeValue {
	fn from(s: String) -> Self {
		Self::Value(Value::String(s))
	}
}

impl From<Cow<'_, str>> for AttributeValue {
	fn from(s: Cow<'_, str>) -> Self {
		Self::Value(Value::String(s.into_owned()))
	}
}

impl From<bool> for AttributeValue {
	fn from(b: bool) -> Self {
		Self::Value(Value::Bool(b))
	}
}

impl From<()> for AttributeValue {
	fn from(_: ()) -> Self {
		Self::null()
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or_else(Self::null, Into::into)
	}
}

impl<T: Into<Value>> From<Vec<T>> for AttributeValue {
	fn from(items: Vec<T>) -> Self {
		Self::Value(Value::Array(items.into_iter().map(Into::into).collect()))
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(n: $ty) -> Self {
					Self::Value(Value::Number(Number::from(n)))
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for AttributeValue {
	fn from(n: f64) -> Self {
		// Non-finite floats have no JSON form and are omitted.
		Self::Value(Number::from_f64(n).map_or(Value::Null, Value::Number))
	}
}

impl From<f32> for AttributeValue {
	fn from(n: f32) -> Self {
		Self::from(f64::from(n))
	}
}

/// A single key/value HTML attribute
///
/// The key is kebab-cased once, at construction.
///
/// # Examples
///
/// ```
/// use voks_html::Attribute;
///
/// assert_eq!(Attribute::new("dataFubar", "hello").to_string(), r#"data-fubar="hello" "#);
/// assert_eq!(Attribute::new("required", true).to_string(), "required ");
/// assert_eq!(Attribute::new("hidden", false).to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
	key: String,
	value: AttributeValue,
}

impl Attribute {
	/// Creates a new attribute, kebab-casing `key`
	pub fn new(key: impl AsRef<str>, value: impl Into<AttributeValue>) -> Self {
		Self {
			key: kebab_case(key.as_ref()),
			value: value.into(),
		}
	}

	/// Get the kebab-cased key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Get the value
	pub fn value(&self) -> &AttributeValue {
		&self.value
	}

	/// Returns `true` if the value is a boolean
	pub fn is_boolean(&self) -> bool {
		self.value.is_boolean()
	}

	/// Returns `true` if formatting yields no output
	pub fn is_omitted(&self) -> bool {
		matches!(
			self.value,
			AttributeValue::Value(Value::Null | Value::Bool(false))
		)
	}
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.value {
			AttributeValue::Value(Value::Bool(true)) => write!(f, "{} ", self.key),
			AttributeValue::Value(Value::Bool(false) | Value::Null) => Ok(()),
			AttributeValue::Value(Value::String(s)) => {
				write!(f, "{}=\"{}\" ", self.key, s.escape_html())
			}
			AttributeValue::Value(Value::Number(n)) => {
				write!(f, "{}=\"{}\" ", self.key, format_number(n))
			}
			// Objects and arrays use their JSON text.
			AttributeValue::Value(value) => {
				write!(f, "{}=\"{}\" ", self.key, value.to_string().escape_html())
			}
			AttributeValue::Raw(raw) => write!(f, "{}=\"{}\" ", self.key, raw.escape_html()),
		}
	}
}

/// Shorthand for [`Attribute::new`]
pub fn attr(key: impl AsRef<str>, value: impl Into<AttributeValue>) -> Attribute {
	Attribute::new(key, value)
}
