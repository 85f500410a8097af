//! Maud HTML templates for the form-based flow.

use keysmith_common::views::{ApiErrorResponse, Artifact};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Form fields posted to `/result`, with their labels.
pub const SUBJECT_FIELDS: [(&str, &str); 6] = [
    ("CommonName", "Common name (e.g. example.com)"),
    ("Country", "Country (two-letter code)"),
    ("Province", "State or province"),
    ("Locality", "Locality"),
    ("Organization", "Organization"),
    ("OrganizationalUnit", "Organizational unit"),
];

pub fn render_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style {
                    (PreEscaped(r#"
                        body { font-family: system-ui; max-width: 800px; margin: 50px auto; padding: 20px; color: #212529; }
                        label { display: block; margin: 15px 0 5px; font-weight: 600; }
                        input { width: 100%; padding: 10px; box-sizing: border-box; border: 2px solid #495057; border-radius: 4px; }
                        button { background: #0056b3; color: #ffffff; padding: 12px 24px; border: none; border-radius: 4px; margin-top: 20px; cursor: pointer; }
                        pre { background: #f8f9fa; padding: 15px; border: 1px solid #dee2e6; border-radius: 4px; overflow-x: auto; }
                        .error { background: #f8d7da; color: #842029; padding: 15px; border-radius: 4px; border: 2px solid #842029; }
                    "#))
                }
            }
            body {
                h1 { (title) }
                (content)
            }
        }
    }
}

pub fn render_index() -> Markup {
    render_layout(
        "Generate a private key and CSR",
        html! {
            form method="post" action="/result" {
                @for (name, label) in SUBJECT_FIELDS {
                    label for=(name) { (label) }
                    input type="text" id=(name) name=(name);
                }
                button type="submit" { "Generate" }
            }
        },
    )
}

pub fn render_result(artifacts: &[Artifact]) -> Markup {
    render_layout(
        "Your private key and CSR",
        html! {
            p { "Keep the private key secret. Submit the CSR to your certificate authority." }
            @for artifact in artifacts {
                h2 { (artifact.name) }
                pre { (artifact.data) }
            }
            a href="/" { "Generate another" }
        },
    )
}

pub fn render_error(error: &ApiErrorResponse) -> Markup {
    render_layout(
        "Generation failed",
        html! {
            div class="error" {
                p { (error.message) }
                @if let Some(code) = &error.code {
                    p { small { "Error code: " (code) } }
                }
            }
            a href="/" { "Back" }
        },
    )
}
