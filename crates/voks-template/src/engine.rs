//! The resolution engine
//!
//! [`Chunks`] turns a unit list into a lazy, single-pass stream of output
//! text. It keeps an explicit stack of frames instead of recursing, so a
//! nested list, template or pending value simply pushes a frame and the next
//! poll continues inside it. Only the top frame is ever polled, which gives
//! two guarantees:
//!
//! - output follows declaration order, however late a pending value settles
//! - at most one suspension is outstanding at a time (no sibling fan-out)
//!
//! Dispatch per unit:
//!
//! | unit | output |
//! |---|---|
//! | `Empty` | one empty chunk |
//! | `Number` | its decimal form |
//! | `Static`, `Raw` | verbatim |
//! | `Text` | escaped |
//! | `Attribute` | formatted; trailing space trimmed unless another attribute follows |
//! | `List`, `Mapping`, `Template` | their units, in order |
//! | `Stream` | every chunk it yields, verbatim |
//! | `Pending` | the settled unit, dispatched again |

use std::iter::Peekable;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use std::vec;

use futures::stream::{FusedStream, Stream};
use voks_html::{Attribute, escape_html, format_number};

use crate::error::TemplateError;
use crate::unit::{ChunkStream, PendingUnit, Unit};

enum Frame {
	Units(Peekable<vec::IntoIter<Unit>>),
	Stream(ChunkStream),
	Pending(PendingUnit),
}

/// Lazy stream of output chunks for one template
///
/// Created by [`Template::into_chunks`](crate::Template::into_chunks). The
/// stream ends after the last unit, or right after the first error.
///
/// # Examples
///
/// ```
/// use futures::TryStreamExt;
/// use voks_template::{Template, Unit};
///
/// # tokio_test::block_on(async {
/// let template = Template::from_parts(["<b>", "</b>"], vec![Unit::pending(async { "a & b" })]);
/// let chunks: Vec<String> = template.into_chunks().try_collect().await.unwrap();
/// assert_eq!(chunks.concat(), "<b>a &amp; b</b>");
/// # });
/// ```
pub struct Chunks {
	stack: Vec<Frame>,
}

impl Chunks {
	pub(crate) fn new(units: Vec<Unit>) -> Self {
		Self {
			stack: vec![Frame::Units(units.into_iter().peekable())],
		}
	}

	fn push_units(&mut self, units: Vec<Unit>) {
		self.stack.push(Frame::Units(units.into_iter().peekable()));
	}

	fn fail(&mut self, error: TemplateError) -> Poll<Option<Result<String, TemplateError>>> {
		self.stack.clear();
		Poll::Ready(Some(Err(error)))
	}

	/// Emits the chunk for `unit`, or pushes the frame that will produce it.
	fn resolve(&mut self, unit: Unit, followed_by_attribute: bool) -> Option<String> {
		match unit {
			Unit::Empty => Some(String::new()),
			Unit::Number(n) => Some(format_number(&n)),
			Unit::Text(text) => Some(escape_html(&text)),
			Unit::Raw(raw) => Some(raw.into_string()),
			Unit::Static(fragment) => Some(fragment.into_string()),
			Unit::Attribute(attribute) => {
				let mut formatted = attribute.to_string();
				if !followed_by_attribute {
					formatted.truncate(formatted.trim_end().len());
				}
				Some(formatted)
			}
			Unit::List(units) => {
				self.push_units(units);
				None
			}
			Unit::Mapping(pairs) => {
				self.push_units(
					pairs
						.into_iter()
						.map(|(key, value)| Unit::Attribute(Attribute::new(key, value)))
						.collect(),
				);
				None
			}
			Unit::Template(template) => {
				self.push_units(template.into_units());
				None
			}
			Unit::Stream(stream) => {
				self.stack.push(Frame::Stream(stream));
				None
			}
			Unit::Pending(pending) => {
				tracing::trace!(depth = self.stack.len(), "suspending on pending template value");
				self.stack.push(Frame::Pending(pending));
				None
			}
		}
	}
}

impl Stream for Chunks {
	type Item = Result<String, TemplateError>;

	fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		let this = &mut *self;
		loop {
			let Some(frame) = this.stack.last_mut() else {
				return Poll::Ready(None);
			};

			match frame {
				Frame::Units(units) => {
					let Some(unit) = units.next() else {
						this.stack.pop();
						continue;
					};
					let followed_by_attribute = matches!(units.peek(), Some(Unit::Attribute(_)));
					if let Some(chunk) = this.resolve(unit, followed_by_attribute) {
						return Poll::Ready(Some(Ok(chunk)));
					}
				}
				Frame::Stream(stream) => match ready!(stream.as_mut().poll_next(cx)) {
					Some(Ok(chunk)) => return Poll::Ready(Some(Ok(chunk))),
					Some(Err(error)) => return this.fail(TemplateError::Chunk(error)),
					None => {
						this.stack.pop();
					}
				},
				Frame::Pending(pending) => {
					let settled = ready!(pending.as_mut().poll(cx));
					this.stack.pop();
					match settled {
						// A settled value may itself be a template, a list or
						// another pending value, so it is dispatched again.
						Ok(unit) => {
							if let Some(chunk) = this.resolve(unit, false) {
								return Poll::Ready(Some(Ok(chunk)));
							}
						}
						Err(error) => {
							tracing::trace!(%error, "pending template value failed to settle");
							return this.fail(TemplateError::Settlement(error));
						}
					}
				}
			}
		}
	}
}

impl FusedStream for Chunks {
	fn is_terminated(&self) -> bool {
		self.stack.is_empty()
	}
}
