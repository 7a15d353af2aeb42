//! Templates, the chunk producers built from literal text and values

use voks_html::StaticFragment;

use crate::engine::Chunks;
use crate::interleave::interleave;
use crate::unit::Unit;

/// An ordered list of units that resolves into HTML chunks
///
/// A template is consumed when it is resolved, either directly through
/// [`Template::into_chunks`] or by being interpolated into another template.
///
/// # Examples
///
/// ```
/// use voks_template::{Template, Unit};
///
/// let template = Template::from_parts(["<div>", "</div>"], vec![Unit::from(0)]);
/// assert_eq!(template.units().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Template {
	units: Vec<Unit>,
}

impl Template {
	/// Creates a template from an already ordered unit list
	pub fn new(units: Vec<Unit>) -> Self {
		Self { units }
	}

	/// Creates a template from literal segments and interpolated values
	///
	/// See [`interleave`] for how both sides are merged.
	pub fn from_parts<S>(segments: impl IntoIterator<Item = S>, values: Vec<Unit>) -> Self
	where
		S: Into<StaticFragment>,
	{
		Self::new(interleave(segments, values))
	}

	/// Get the unit list
	pub fn units(&self) -> &[Unit] {
		&self.units
	}

	/// Convert into the unit list
	pub fn into_units(self) -> Vec<Unit> {
		self.units
	}

	/// Starts resolving this template
	pub fn into_chunks(self) -> Chunks {
		Chunks::new(self.units)
	}
}

impl From<Vec<Template>> for Template {
	/// Renders several templates back to back, as if interpolated into an
	/// otherwise empty template.
	fn from(templates: Vec<Template>) -> Self {
		Self::new(vec![Unit::from(templates)])
	}
}

/// Builds a [`Template`] from literal text and `{ value }` interpolations
///
/// String literals are trusted template text. Every braced expression is
/// converted with [`Unit::from`] and escaped on output unless it resolves to
/// markup (a template, raw content, an attribute). Braced values written next
/// to each other form a single list value, so consecutive attributes keep the
/// spaces between them.
///
/// # Examples
///
/// ```
/// use voks_template::{html, Unit};
///
/// let name = "<World>";
/// let template = html!("<h1>Hello, " {name} "!</h1>");
/// assert_eq!(template.units().len(), 3);
///
/// let empty = html!();
/// assert!(empty.units().is_empty());
/// ```
#[macro_export]
macro_rules! html {
	// Expecting a literal segment.
	(@segment [$($segment:expr,)*] [$($value:expr,)*]) => {
		$crate::Template::from_parts([$($segment,)* ""], ::std::vec![$($value,)*])
	};
	(@segment [$($segment:expr,)*] [$($value:expr,)*] $literal:literal $($rest:tt)*) => {
		$crate::html!(@value [$($segment,)* $literal,] [$($value,)*] $($rest)*)
	};
	(@segment [$($segment:expr,)*] [$($value:expr,)*] { $interpolated:expr } $($rest:tt)*) => {
		$crate::html!(@value [$($segment,)* "",] [$($value,)*] { $interpolated } $($rest)*)
	};

	// Expecting an interpolated value.
	(@value [$($segment:expr,)*] [$($value:expr,)*]) => {
		$crate::Template::from_parts([$($segment,)*], ::std::vec![$($value,)*])
	};
	(@value [$($segment:expr,)*] [$($value:expr,)*] { $interpolated:expr } $($rest:tt)*) => {
		$crate::html!(
			@run [$($segment,)*] [$($value,)*] [$crate::Unit::from($interpolated),] $($rest)*
		)
	};
	(@value [$($segment:expr,)*] [$($value:expr,)*] $literal:literal $($rest:tt)*) => {
		$crate::html!(@segment [$($segment,)*] [$($value,)* $crate::Unit::Empty,] $literal $($rest)*)
	};

	// Collecting adjacent interpolations into one value.
	(@run [$($segment:expr,)*] [$($value:expr,)*] [$($run:expr,)+] { $interpolated:expr } $($rest:tt)*) => {
		$crate::html!(
			@run [$($segment,)*] [$($value,)*] [$($run,)+ $crate::Unit::from($interpolated),] $($rest)*
		)
	};
	(@run [$($segment:expr,)*] [$($value:expr,)*] [$single:expr,] $($rest:tt)*) => {
		$crate::html!(@segment [$($segment,)*] [$($value,)* $single,] $($rest)*)
	};
	(@run [$($segment:expr,)*] [$($value:expr,)*] [$($run:expr,)+] $($rest:tt)*) => {
		$crate::html!(
			@segment [$($segment,)*] [$($value,)* $crate::Unit::List(::std::vec![$($run,)+]),] $($rest)*
		)
	};

	() => {
		$crate::Template::default()
	};
	($($tokens:tt)+) => {
		$crate::html!(@segment [] [] $($tokens)+)
	};
}
