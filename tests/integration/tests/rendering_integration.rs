//! End-to-end rendering of templates into one string

use rstest::rstest;
use serde_json::json;
use voks::prelude::*;
use voks::{RenderError, TemplateError};
use voks_integration_tests::delayed;

fn say_hello_sync(text: &str) -> &str {
	text
}

async fn say_hello_async(text: &'static str) -> &'static str {
	delayed(100, text).await
}

#[rstest]
#[tokio::test]
async fn test_simple_tag() {
	let output = render_to_string(html!("<div></div>")).await.unwrap();

	assert_eq!(output, "<div></div>");
}

#[rstest]
#[tokio::test]
async fn test_document_with_doctype_is_verbatim() {
	// Arrange
	let literal = "
    <!DOCTYPE html>
    <html lang=\"en\">
    <head><title>Document</title></head>
    <body></body>
    </html>
  ";

	// Act
	let output = render_to_string(html!(
		"
    <!DOCTYPE html>
    <html lang=\"en\">
    <head><title>Document</title></head>
    <body></body>
    </html>
  "
	))
	.await
	.unwrap();

	// Assert
	assert_eq!(output, literal);
}

#[rstest]
#[case(Unit::from("hello, world!"), "<div>hello, world!</div>")]
#[case(Unit::from(4711), "<div>4711</div>")]
#[case(Unit::from(0), "<div>0</div>")]
#[case(Unit::from(1.0), "<div>1</div>")]
#[case(Unit::from(-0.0), "<div>0</div>")]
#[case(Unit::from(1e20), "<div>100000000000000000000</div>")]
#[case(Unit::from(vec![Unit::Empty, Unit::from(false), Unit::from(None::<&str>)]), "<div></div>")]
#[case(Unit::from(json!([null, false, 0])), "<div>0</div>")]
#[tokio::test]
async fn test_interpolated_scalars(#[case] value: Unit, #[case] expected: &str) {
	let output = render_to_string(html!("<div>" {value} "</div>")).await.unwrap();

	assert_eq!(output, expected);
}

#[rstest]
#[tokio::test]
async fn test_collection_of_templates() {
	let sub_templates = vec![html!("<p>hello,</p>"), html!("<p>world!</p>")];

	let output = render_to_string(html!("<div>" {sub_templates} "</div>")).await.unwrap();

	assert_eq!(output, "<div><p>hello,</p><p>world!</p></div>");
}

#[rstest]
#[tokio::test]
async fn test_async_value_keeps_declaration_order() {
	// Arrange
	let template = html!(
		"<div>" {Unit::pending(say_hello_async("wait for it! Hello,"))} " "
		{say_hello_sync("you sync world!")} "</div>"
	);

	// Act
	let output = render_to_string(template).await.unwrap();

	// Assert
	assert_eq!(output, "<div>wait for it! Hello, you sync world!</div>");
}

#[rstest]
#[tokio::test]
async fn test_async_sub_templates() {
	let sub_templates = vec![
		html!("<p>" {Unit::pending(say_hello_async("wait for it! Hello,"))} "</p>"),
		html!("<p>" {say_hello_sync("you sync world!")} "</p>"),
	];

	let output = render_to_string(html!("<div>" {sub_templates} "</div>")).await.unwrap();

	assert_eq!(output, "<div><p>wait for it! Hello,</p><p>you sync world!</p></div>");
}

#[rstest]
#[tokio::test]
async fn test_async_sub_sub_templates() {
	// Arrange
	let emphasized = html!("<em>" {Unit::pending(say_hello_async("you async emphasized world!"))} "</em>");
	let sub_templates = vec![
		html!("<p>" {Unit::pending(say_hello_async("wait for it! Hello,"))} "</p>"),
		html!("<p>" {emphasized} "</p>"),
	];

	// Act
	let output = render_to_string(html!("<div>" {sub_templates} "</div>")).await.unwrap();

	// Assert
	assert_eq!(
		output,
		"<div><p>wait for it! Hello,</p><p><em>you async emphasized world!</em></p></div>"
	);
}

#[rstest]
#[tokio::test]
async fn test_plain_text_is_escaped() {
	let message = r#"<script>console.log("hello, world!")</script>"#;

	let output = render_to_string(html!("<div>" {message} "</div>")).await.unwrap();

	assert_eq!(
		output,
		"<div>&lt;script&gt;console.log(&quot;hello, world!&quot;)&lt;/script&gt;</div>"
	);
}

#[rstest]
#[tokio::test]
async fn test_nested_template_is_not_escaped() {
	let message = html!(r#"<script>console.log("hello, world!")</script>"#);

	let output = render_to_string(html!("<div>" {message} "</div>")).await.unwrap();

	assert_eq!(output, r#"<div><script>console.log("hello, world!")</script></div>"#);
}

#[rstest]
#[tokio::test]
async fn test_collection_as_root() {
	let output = render_to_string(vec![html!("<p>hello</p>"), html!(" "), html!("<p>world!</p>")])
		.await
		.unwrap();

	assert_eq!(output, "<p>hello</p> <p>world!</p>");
}

#[rstest]
#[case(true, "<aside><my-fallback-component></my-fallback-component></aside>")]
#[case(false, "<aside>&lt;b&gt;slow&lt;/b&gt;</aside>")]
#[tokio::test]
async fn test_lookup_with_markup_fallback(#[case] times_out: bool, #[case] expected: &str) {
	// Arrange: the lookup either returns plain text or times out into markup
	let value = Unit::pending(async move {
		if times_out {
			Unit::from(html!("<my-fallback-component></my-fallback-component>"))
		} else {
			Unit::from(delayed(5, "<b>slow</b>").await)
		}
	});

	// Act
	let output = render_to_string(html!("<aside>" {value} "</aside>")).await.unwrap();

	// Assert
	assert_eq!(output, expected);
}

#[rstest]
#[tokio::test]
async fn test_failure_never_returns_partial_string() {
	// Arrange
	let failing = Unit::try_pending(async { Err::<String, _>("lookup failed") });

	// Act
	let result = render_to_string(html!("<p>" {"before"} {failing} "</p>")).await;

	// Assert
	let error = result.unwrap_err();
	assert!(matches!(error, RenderError::Template(TemplateError::Settlement(_))));
	assert_eq!(
		std::error::Error::source(&error).map(|e| e.to_string()).as_deref(),
		Some("lookup failed")
	);
}

#[rstest]
#[tokio::test]
async fn test_template_chunks_are_lazy_and_ordered() {
	use futures::StreamExt;

	// Arrange
	let template = html!("<ol>" {Unit::pending(delayed(30, "a"))} {Unit::pending(delayed(1, "b"))} "</ol>");

	// Act
	let chunks: Vec<String> = template
		.into_chunks()
		.map(|chunk| chunk.unwrap())
		.collect()
		.await;

	// Assert
	assert_eq!(chunks, ["<ol>", "a", "b", "</ol>"]);
}
