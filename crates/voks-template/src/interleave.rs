//! Merging literal segments and interpolated values into one unit list
//!
//! A template is written as `N` literal segments with up to `N` values between
//! and after them (tagged-template arity is `N - 1`). The resolver walks a
//! single ordered list, so both sides are zipped together here.

use voks_html::StaticFragment;

use crate::unit::Unit;

/// Zips literal segments and values into `segment, value, segment, …`
///
/// Each segment is wrapped as a [`Unit::Static`]. A position without a value
/// contributes only its segment, and is dropped entirely when that segment is
/// empty too. Values beyond the last segment are ignored.
///
/// # Examples
///
/// ```
/// use voks_template::{Unit, interleave};
///
/// let units = interleave(["a", "b", "c", "d"], vec![Unit::from("val"), Unit::from(0)]);
/// assert_eq!(units.len(), 6);
/// ```
pub fn interleave<S>(segments: impl IntoIterator<Item = S>, values: Vec<Unit>) -> Vec<Unit>
where
	S: Into<StaticFragment>,
{
	let segments = segments.into_iter();
	let mut values = values.into_iter();
	let mut units = Vec::with_capacity(segments.size_hint().0 * 2);

	for segment in segments {
		let fragment = segment.into();
		match values.next() {
			Some(value) => {
				units.push(Unit::Static(fragment));
				units.push(value);
			}
			None if fragment.is_empty() => {}
			None => units.push(Unit::Static(fragment)),
		}
	}

	units
}
