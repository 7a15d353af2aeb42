//! Renders a full HTML document whose paragraph arrives late.
//!
//! ```text
//! cargo run --example document
//! ```

use std::time::Duration;

use voks::prelude::*;

fn html_document(content: Template) -> Template {
	html!(
		r#"
  <!DOCTYPE html>
  <html lang="en">
  <head>
      <meta charset="UTF-8">
      <meta http-equiv="X-UA-Compatible" content="IE=edge">
      <meta name="viewport" content="width=device-width, initial-scale=1.0">
      <title>Document</title>
  </head>
  <body>
    "# {content} "
  </body>
  </html>
"
	)
}

async fn delayed_content(text: &'static str) -> &'static str {
	tokio::time::sleep(Duration::from_secs(2)).await;
	text
}

#[tokio::main]
async fn main() -> Result<(), RenderError> {
	let message = "Welcome!";
	let page = html_document(html!(
		"
  <h1>" {message} "</h1>
  <p>" {Unit::pending(delayed_content("Hello World!"))} "</p>
"
	));

	let output = render_to_string(page).await?;
	println!("{output}");
	Ok(())
}
