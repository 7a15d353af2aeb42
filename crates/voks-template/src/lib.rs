//! # Voks Template
//!
//! Templates made of literal text and interpolated values, resolved into a
//! lazy, strictly ordered stream of HTML chunks.
//!
//! ## Features
//!
//! - **[`html!`]**: builds a [`Template`] from string literals and `{ value }` blocks
//! - **[`Unit`]**: the sum type every interpolated value is converted into
//! - **[`Chunks`]**: the resolution engine, a [`futures::Stream`] of output text
//!
//! Values are escaped if and only if they end up as plain scalars. Nested
//! templates, raw content, attributes and foreign chunk streams are emitted as
//! markup, including when they only appear after a pending value settles.
//!
//! ## Example
//!
//! ```
//! use futures::TryStreamExt;
//! use voks_template::{Unit, html};
//!
//! # tokio_test::block_on(async {
//! let greeting = Unit::pending(async { html!("<em>" {"friends & family"} "</em>") });
//! let template = html!("<p>Hello, " {greeting} "!</p>");
//!
//! let chunks: Vec<String> = template.into_chunks().try_collect().await.unwrap();
//! assert_eq!(chunks.concat(), "<p>Hello, <em>friends &amp; family</em>!</p>");
//! # });
//! ```

pub mod engine;
pub mod error;
pub mod interleave;
pub mod template;
pub mod unit;

pub use engine::Chunks;
pub use error::{BoxError, TemplateError, TemplateResult};
pub use interleave::interleave;
pub use template::Template;
pub use unit::{ChunkStream, PendingUnit, Unit};

// Markup helpers used alongside `html!`
pub use voks_html::{Attribute, AttributeValue, RawContent, StaticFragment, attr, raw};
