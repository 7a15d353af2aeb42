//! Attribute formatting inside rendered templates

use rstest::rstest;
use serde_json::json;
use voks::prelude::*;
use voks::minify;

#[rstest]
#[tokio::test]
async fn test_simple_attribute_value_is_escaped() {
	let placeholder = "this is a placeholder& text";

	let output = render_to_string(html!(r#"<input type="text" placeholder=""# {placeholder} r#"" />"#))
		.await
		.unwrap();

	assert_eq!(output, r#"<input type="text" placeholder="this is a placeholder&amp; text" />"#);
}

#[rstest]
#[tokio::test]
async fn test_conditional_attributes() {
	// Arrange
	let placeholder = "this is a placeholder text";
	let template = html!(
		r#"<input type="text"
    "# {attr("placeholder", placeholder)} "
    " {attr("fake-false-attribute", "false")} "
    " {attr("falsi-attribute", false)} "
    " {attr("nullish-attribute", ())} "
  />"
	);

	// Act
	let output = minify(&render_to_string(template).await.unwrap());

	// Assert
	assert_eq!(
		output,
		r#"<input type="text" placeholder="this is a placeholder text" fake-false-attribute="false" />"#
	);
}

#[rstest]
#[tokio::test]
async fn test_list_of_attributes() {
	// Arrange
	let attributes = [
		("placeholder", "this is a placeholder& text"),
		("required", "required"),
	];
	let list: Vec<Attribute> = attributes
		.into_iter()
		.map(|(key, value)| attr(key, value))
		.collect();

	// Act
	let output = render_to_string(html!(r#"<input type="text" "# {list} " />"))
		.await
		.unwrap();

	// Assert
	assert_eq!(
		output,
		r#"<input type="text" placeholder="this is a placeholder&amp; text" required="required" />"#
	);
}

#[rstest]
#[tokio::test]
async fn test_minified_multiline_tag() {
	// Arrange
	let placeholder = "this is a placeholder text";
	let template = html!(
		r#"<input type="text"
      "# {attr("placeholder", placeholder)} "
      " {attr("fake-false-attribute", "false")} "
      " {attr("falsi-attribute", false)} "
      " {attr("truey-attribute", true)} "
      " {attr("nullish-attribute", ())} "
      " {attr("data-test", 5)} "
    />"
	);

	// Act
	let output = minify(&render_to_string(template).await.unwrap());

	// Assert
	assert_eq!(
		output,
		r#"<input type="text" placeholder="this is a placeholder text" fake-false-attribute="false" truey-attribute data-test="5" />"#
	);
}

#[rstest]
#[tokio::test]
async fn test_pending_space_before_tag_end() {
	let output = minify(&render_to_string(html!("<button " {()} ">label</button>")).await.unwrap());

	assert_eq!(output, "<button>label</button>");
}

#[rstest]
#[tokio::test]
async fn test_camel_case_keys_are_kebab_cased() {
	let data_attribute = "some-data";

	let output = minify(
		&render_to_string(html!(r#"<input type="text" "# {attr("dataFubar", data_attribute)} " />"))
			.await
			.unwrap(),
	);

	assert_eq!(output, r#"<input type="text" data-fubar="some-data" />"#);
}

#[rstest]
#[tokio::test]
async fn test_minified_document() {
	let template = html!(
		"<html " {()} ">
    <head>
      <title> test</title>

    </head>
  </html>"
	);

	let output = minify(&render_to_string(template).await.unwrap());

	assert_eq!(output, "<html><head><title>test</title></head></html>");
}

#[rstest]
#[case(json!({"dataFubar": "fubar"}), r#"<div data-fubar="fubar"></div>"#)]
#[case(
	json!({
		"class": "hello",
		"dataFubar": "fubar",
		"data-fabula": true,
		"falsy": false,
		"nully": null,
	}),
	r#"<div class="hello" data-fubar="fubar" data-fabula></div>"#
)]
#[case(json!({"dataList": [1, "two"]}), r#"<div data-list="[1,&quot;two&quot;]"></div>"#)]
#[tokio::test]
async fn test_object_literal_attributes(#[case] attributes: serde_json::Value, #[case] expected: &str) {
	let output = minify(&render_to_string(html!("<div " {attributes} "></div>")).await.unwrap());

	assert_eq!(output, expected);
}

#[rstest]
#[tokio::test]
async fn test_raw_template_content() {
	let template = html!("<div " {raw(r#"><script>alert("hello")</script><div"#)} "></div>");

	let output = minify(&render_to_string(template).await.unwrap());

	assert_eq!(output, r#"<div><script>alert("hello")</script><div></div>"#);
}

#[rstest]
#[tokio::test]
async fn test_raw_attribute_value() {
	let attributes = Unit::attributes([("dataFubar", raw(r#"<script>alert("hello")</script>"#))]);

	let output = minify(&render_to_string(html!("<div " {attributes} "></div>")).await.unwrap());

	assert_eq!(output, r#"<div data-fubar="<script>alert("hello")</script>"></div>"#);
}

#[rstest]
#[tokio::test]
async fn test_pending_attribute_is_trimmed() {
	let pending = Unit::pending(async { attr("hidden", true) });

	let output = render_to_string(html!("<p " {pending} ">x</p>")).await.unwrap();

	assert_eq!(output, "<p hidden>x</p>");
}
