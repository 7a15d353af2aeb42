//! End-to-end streaming into response sinks

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rstest::rstest;
use voks::prelude::*;
use voks::render::FailureReporter;
use voks::{RenderResult, TemplateError};
use voks_integration_tests::{SharedSink, SinkEvent, delayed};

fn write(chunk: &str) -> SinkEvent {
	SinkEvent::Write(chunk.to_owned())
}

#[rstest]
#[tokio::test]
async fn test_streams_chunks_in_declaration_order() {
	// Arrange: the first value settles last
	let sink = SharedSink::new();
	let template = html!(
		"<ul>"
		"<li>" {Unit::pending(delayed(50, "first"))} "</li>"
		"<li>" {Unit::pending(delayed(1, "second"))} "</li>"
		"</ul>"
	);

	// Act
	render_to_stream(sink.clone(), template, StreamOptions::new()).await.unwrap();

	// Assert
	assert_eq!(sink.written(), "<ul><li>first</li><li>second</li></ul>");
	assert!(!sink.events().contains(&SinkEvent::Close));
}

#[rstest]
#[tokio::test]
async fn test_close_stream_closes_then_ends() {
	// Arrange
	let sink = SharedSink::new();

	// Act
	render_to_stream(sink.clone(), html!("<p>" {1} "</p>"), StreamOptions::new().close_stream(true))
		.await
		.unwrap();

	// Assert
	assert_eq!(
		sink.events(),
		[write("<p>"), write("1"), write("</p>"), SinkEvent::Close, SinkEvent::End]
	);
}

#[rstest]
#[tokio::test]
async fn test_foreign_chunk_stream_is_forwarded() {
	// Arrange
	let items = futures::stream::iter(["<li>a</li>", "<li>b</li>"].map(|item| Ok::<_, TemplateError>(item.to_owned())));
	let sink = SharedSink::new();

	// Act
	render_to_stream(sink.clone(), html!("<ul>" {Unit::stream(items)} "</ul>"), StreamOptions::new())
		.await
		.unwrap();

	// Assert
	assert_eq!(sink.written(), "<ul><li>a</li><li>b</li></ul>");
}

#[rstest]
#[tokio::test]
async fn test_settlement_failure_stops_stream_and_reports() {
	// Arrange
	let reports = Arc::new(Mutex::new(Vec::new()));
	let seen = Arc::clone(&reports);
	let renderer = StreamRenderer::with_reporter(move |error: &RenderError| {
		seen.lock().unwrap().push(error.to_string());
	})
	.options(StreamOptions::new().close_stream(true));
	let sink = SharedSink::new();
	let failing = Unit::try_pending(async {
		tokio::time::sleep(Duration::from_millis(5)).await;
		Err::<String, _>("upstream timed out")
	});

	// Act
	let result: RenderResult<()> = renderer
		.render(sink.clone(), html!("<main>" {failing} "</main>"))
		.await;

	// Assert
	let error = result.unwrap_err();
	assert!(matches!(error, RenderError::Stream(_)));
	assert!(matches!(
		error.root(),
		RenderError::Template(TemplateError::Settlement(_))
	));
	assert_eq!(sink.events(), [write("<main>")]);
	assert_eq!(*reports.lock().unwrap(), ["Failed to stream the response!"]);
}

#[rstest]
#[tokio::test]
async fn test_sink_failure_is_not_retried() {
	// Arrange
	let sink = SharedSink::failing_after(2);

	// Act
	let result = render_to_stream(
		sink.clone(),
		html!("<a>" {"b"} "<c>" {"d"}),
		StreamOptions::new().close_stream(true),
	)
	.await;

	// Assert
	assert!(matches!(result.unwrap_err().root(), RenderError::Sink(_)));
	assert_eq!(sink.events(), [write("<a>"), write("b")]);
}

#[rstest]
#[tokio::test]
async fn test_writer_sink_over_duplex_pipe() {
	use tokio::io::AsyncReadExt;

	// Arrange
	let (client, mut server) = tokio::io::duplex(16);
	let reader = tokio::spawn(async move {
		let mut received = String::new();
		server.read_to_string(&mut received).await.map(|_| received)
	});
	let template = html!("<section>" {Unit::pending(delayed(5, "backpressure & order"))} "</section>");

	// Act
	render_to_stream(WriterSink::new(client), template, StreamOptions::new().close_stream(true))
		.await
		.unwrap();

	// Assert
	let received = reader.await.unwrap().unwrap();
	assert_eq!(received, "<section>backpressure &amp; order</section>");
}

#[rstest]
#[tokio::test]
async fn test_custom_reporter_trait_object() {
	struct Counting(Arc<Mutex<usize>>);

	impl FailureReporter for Counting {
		fn report(&self, _error: &RenderError) {
			*self.0.lock().unwrap() += 1;
		}
	}

	// Arrange
	let count = Arc::new(Mutex::new(0));
	let renderer = StreamRenderer::new().reporter(Counting(Arc::clone(&count)));

	// Act
	let first = renderer.render(SharedSink::failing_after(0), html!("<p>")).await;
	let second = renderer.render(SharedSink::new(), html!("<p>")).await;

	// Assert
	assert!(first.is_err());
	assert!(second.is_ok());
	assert_eq!(*count.lock().unwrap(), 1);
}
