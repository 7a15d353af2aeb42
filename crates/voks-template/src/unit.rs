//! Template units, the items a template is made of
//!
//! Every value interpolated into a template is converted into a [`Unit`] up
//! front, so the resolution engine dispatches on an explicit variant instead
//! of probing the shape of a value. Pending values are re-classified when they
//! settle: the settled value is itself a [`Unit`] and goes through the same
//! dispatch again.

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use futures::stream::{Stream, TryStreamExt};
use serde_json::{Map, Number, Value};
use voks_html::{Attribute, AttributeValue, RawContent, StaticFragment, format_float};

use crate::error::BoxError;
use crate::template::Template;

/// A boxed future settling into another unit
pub type PendingUnit = Pin<Box<dyn Future<Output = Result<Unit, BoxError>> + Send>>;

/// A boxed foreign producer of output chunks
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, BoxError>> + Send>>;

/// One item of a template unit list
///
/// # Examples
///
/// ```
/// use voks_template::Unit;
///
/// assert!(matches!(Unit::from(None::<&str>), Unit::Empty));
/// assert!(matches!(Unit::from(false), Unit::Empty));
/// assert!(matches!(Unit::from(0), Unit::Number(_)));
/// assert!(matches!(Unit::from("<b>"), Unit::Text(_)));
/// ```
pub enum Unit {
	/// Renders as an empty chunk (null, undefined or `false`)
	Empty,
	/// Renders as its decimal form, `0` included
	Number(Number),
	/// Plain text, escaped on output
	Text(String),
	/// Text emitted verbatim
	Raw(RawContent),
	/// Literal template text, emitted verbatim
	Static(StaticFragment),
	/// A single attribute
	Attribute(Attribute),
	/// Units resolved in order with no separator
	List(Vec<Unit>),
	/// An attribute bag; each pair becomes an [`Attribute`] in insertion order
	Mapping(Vec<(String, AttributeValue)>),
	/// A nested template, delegated to without escaping
	Template(Template),
	/// A foreign chunk producer, delegated to without escaping
	Stream(ChunkStream),
	/// A value that is not available yet
	Pending(PendingUnit),
}

impl Unit {
	/// Wraps a future that always settles successfully
	///
	/// # Examples
	///
	/// ```
	/// use voks_template::Unit;
	///
	/// let unit = Unit::pending(async { "hello" });
	/// assert!(matches!(unit, Unit::Pending(_)));
	/// ```
	pub fn pending<F, T>(future: F) -> Self
	where
		F: Future<Output = T> + Send + 'static,
		T: Into<Unit>,
	{
		Self::Pending(Box::pin(async move { Ok(future.await.into()) }))
	}

	/// Wraps a fallible future; its error ends the resolution
	pub fn try_pending<F, T, E>(future: F) -> Self
	where
		F: Future<Output = Result<T, E>> + Send + 'static,
		T: Into<Unit>,
		E: Into<BoxError>,
	{
		Self::Pending(Box::pin(async move {
			future.await.map(Into::into).map_err(Into::into)
		}))
	}

	/// Wraps a foreign stream of already-rendered chunks
	///
	/// The chunks are trusted markup and are not escaped.
	pub fn stream<S, E>(stream: S) -> Self
	where
		S: Stream<Item = Result<String, E>> + Send + 'static,
		E: Into<BoxError> + 'static,
	{
		Self::Stream(Box::pin(stream.map_err(Into::into)))
	}

	/// Builds an attribute bag from key/value pairs, keeping their order
	///
	/// # Examples
	///
	/// ```
	/// use voks_template::Unit;
	///
	/// let unit = Unit::attributes([("dataFubar", "fubar")]);
	/// assert!(matches!(unit, Unit::Mapping(ref pairs) if pairs.len() == 1));
	/// ```
	pub fn attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		Self::Mapping(
			pairs
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}

	/// Returns `true` for values that delegate to another chunk producer
	pub fn is_producer(&self) -> bool {
		matches!(self, Self::Template(_) | Self::Stream(_))
	}
}

impl fmt::Debug for Unit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("Empty"),
			Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
			Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
			Self::Raw(raw) => f.debug_tuple("Raw").field(raw).finish(),
			Self::Static(fragment) => f.debug_tuple("Static").field(fragment).finish(),
			Self::Attribute(attribute) => f.debug_tuple("Attribute").field(attribute).finish(),
			Self::List(units) => f.debug_tuple("List").field(units).finish(),
			Self::Mapping(pairs) => f.debug_tuple("Mapping").field(pairs).finish(),
			Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
			Self::Stream(_) => f.write_str("Stream(..)"),
			Self::Pending(_) => f.write_str("Pending(..)"),
		}
	}
}

impl From<&str> for Unit {
	fn from(s: &str) -> Self {
		Self::Text(s.to_owned())
	}
}

impl From<String> for Unit {
	fn from(s: String) -> Self {
		Self::Text(s)
	}
}

impl From<&String> for Unit {
	fn from(s: &String) -> Self {
		Self::Text(s.clone())
	}
}

impl From<Cow<'_, str>> for Unit {
	fn from(s: Cow<'_, str>) -> Self {
		Self::Text(s.into_owned())
	}
}

impl From<char> for Unit {
	fn from(c: char) -> Self {
		Self::Text(c.to_string())
	}
}

impl From<bool> for Unit {
	fn from(b: bool) -> Self {
		if b {
			Self::Text(b.to_string())
		} else {
			Self::Empty
		}
	}
}

impl From<()> for Unit {
	fn from(_: ()) -> Self {
		Self::Empty
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Unit {
				fn from(n: $ty) -> Self {
					Self::Number(Number::from(n))
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Unit {
	fn from(n: f64) -> Self {
		Number::from_f64(n).map_or_else(|| Self::Text(format_float(n)), Self::Number)
	}
}

impl From<f32> for Unit {
	fn from(n: f32) -> Self {
		Self::from(f64::from(n))
	}
}

impl From<RawContent> for Unit {
	fn from(raw: RawContent) -> Self {
		Self::Raw(raw)
	}
}

impl From<StaticFragment> for Unit {
	fn from(fragment: StaticFragment) -> Self {
		Self::Static(fragment)
	}
}

impl From<Attribute> for Unit {
	fn from(attribute: Attribute) -> Self {
		Self::Attribute(attribute)
	}
}

impl From<Template> for Unit {
	fn from(template: Template) -> Self {
		Self::Template(template)
	}
}

impl<T: Into<Unit>> From<Option<T>> for Unit {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Empty, Into::into)
	}
}

impl<T: Into<Unit>> From<Vec<T>> for Unit {
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Unit>, const N: usize> From<[T; N]> for Unit {
	fn from(items: [T; N]) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl From<Map<String, Value>> for Unit {
	fn from(map: Map<String, Value>) -> Self {
		Self::Mapping(
			map.into_iter()
				.map(|(key, value)| (key, AttributeValue::from(value)))
				.collect(),
		)
	}
}

impl From<Value> for Unit {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Empty,
			Value::Bool(b) => Self::from(b),
			Value::Number(n) => Self::Number(n),
			Value::String(s) => Self::Text(s),
			Value::Array(items) => Self::from(items),
			Value::Object(map) => Self::from(map),
		}
	}
}
