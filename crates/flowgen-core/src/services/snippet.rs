//! Client snippet rendering for the workflow execution endpoint.
//!
//! Every snippet performs the same request: `POST {base_url}/execute` with the
//! payload as a JSON body. Only the surrounding source text differs.

use crate::error::Result;
use crate::models::{Language, Payload};
use crate::template::SnippetTemplate;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::borrow::Cow;
use tracing::debug;

const CURL_TEMPLATE: SnippetTemplate =
    SnippetTemplate::new(include_str!("../../assets/snippets/curl.tmpl"));
const PYTHON_TEMPLATE: SnippetTemplate =
    SnippetTemplate::new(include_str!("../../assets/snippets/python.tmpl"));
const JS_TEMPLATE: SnippetTemplate =
    SnippetTemplate::new(include_str!("../../assets/snippets/js.tmpl"));
const TS_TEMPLATE: SnippetTemplate =
    SnippetTemplate::new(include_str!("../../assets/snippets/ts.tmpl"));

/// How one language embeds the payload
struct Renderer {
    template: SnippetTemplate,
    indent: &'static [u8],
    quote: fn(&str) -> Cow<'_, str>,
}

fn renderer(language: Language) -> Renderer {
    match language {
        Language::Curl => Renderer {
            template: CURL_TEMPLATE,
            indent: b"  ",
            quote: shell_single_quoted,
        },
        Language::Python => Renderer {
            template: PYTHON_TEMPLATE,
            indent: b"    ",
            quote: verbatim,
        },
        Language::Js => Renderer {
            template: JS_TEMPLATE,
            indent: b"    ",
            quote: verbatim,
        },
        Language::Ts => Renderer {
            template: TS_TEMPLATE,
            indent: b"    ",
            quote: verbatim,
        },
    }
}

/// Render a snippet that sends `payload` to `{base_url}/execute`.
///
/// Output is a pure function of the arguments and carries no trailing newline.
pub fn render_snippet(language: Language, base_url: &str, payload: &Payload) -> Result<String> {
    let renderer = renderer(language);
    let json = to_pretty_json(payload, renderer.indent)?;
    let body = (renderer.quote)(&json);

    debug!(
        language = %language,
        fields = payload.len(),
        "Rendering client snippet"
    );

    Ok(renderer
        .template
        .render(&[("base_url", base_url), ("payload", &*body)]))
}

/// String-keyed entry point: parse the language identifier, then render.
pub fn generate_code(language: &str, base_url: &str, payload: &Payload) -> Result<String> {
    let language: Language = language.parse()?;
    render_snippet(language, base_url, payload)
}

fn to_pretty_json(payload: &Payload, indent: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    payload.serialize(&mut serializer)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn verbatim(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

/// Escape text for use inside a POSIX single-quoted word
fn shell_single_quoted(text: &str) -> Cow<'_, str> {
    if text.contains('\'') {
        Cow::Owned(text.replace('\'', r"'\''"))
    } else {
        Cow::Borrowed(text)
    }
}
