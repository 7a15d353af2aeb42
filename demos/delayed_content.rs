//! Streams a page whose paragraphs come from slow lookups.
//!
//! Each lookup races a timeout. A lookup that answers in time renders as
//! escaped text; one that does not is replaced by a fallback component that
//! the client can fill in later.
//!
//! ```text
//! RUST_LOG=debug cargo run --example delayed_content
//! ```

use std::time::Duration;

use rand::Rng;
use tracing_subscriber::EnvFilter;
use voks::prelude::*;

const TIMEOUT: Duration = Duration::from_millis(500);

fn paragraph(text: Unit) -> Template {
	html!(
		r#"
    <p class="info">"# {text} "</p>
"
	)
}

/// Looks `text` up with an increasing, partly random delay.
fn delayed_content(text: &'static str, id: u64) -> Unit {
	let delay = Duration::from_millis(rand::thread_rng().gen_range(1..=100) * id).max(Duration::from_millis(100));
	tracing::info!(id, ?delay, "content will be delayed");

	Unit::pending(async move {
		tokio::select! {
			_ = tokio::time::sleep(delay) => Unit::from(text),
			_ = tokio::time::sleep(TIMEOUT) => {
				tracing::info!(id, "content canceled due to timeout, deferred to client-side");
				let src = format!("/{id}");
				Unit::from(html!(
					"<my-fallback-component " {attr("src", src)} ">timeout!</my-fallback-component>"
				))
			}
		}
	})
}

#[tokio::main]
async fn main() -> Result<(), RenderError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();

	let paragraphs: Vec<Template> = ["Hello", "from", "the", "slow", "side"]
		.into_iter()
		.zip(1..)
		.map(|(word, id)| paragraph(delayed_content(word, id)))
		.collect();
	let page = html!(
		"<!DOCTYPE html>
<html lang=\"en\">
  <body>
    <h1>Delayed content</h1>" {paragraphs} "
  </body>
</html>
"
	);

	render_to_stream(
		WriterSink::new(tokio::io::stdout()),
		page,
		StreamOptions::new().close_stream(true),
	)
	.await
}
