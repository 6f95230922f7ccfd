use serde::{Deserialize, Serialize};
use serde_json::{Serializer, Value, ser::PrettyFormatter};
use syntect::{html::ClassStyle, parsing::SyntaxSet};

use crate::application::render::types::RenderError;

use super::highlight;

pub(crate) const EMPTY_JSON_PLACEHOLDER: &str = "<pre class=\"empty-json\">{} // Empty JSON</pre>";

/// Deepest array/object nesting that is re-indented. Beyond this the value's
/// own serializer and destructor would recurse too far.
pub(crate) const MAX_JSON_DEPTH: usize = 1_000;

/// Re-indent valid JSON with two spaces, preserving key order.
pub(crate) fn reformat(text: &str) -> Result<String, RenderError> {
    let depth = nesting_depth(text);
    if depth > MAX_JSON_DEPTH {
        return Err(RenderError::InvalidJson {
            message: format!(
                "nesting depth {depth} exceeds the previewable limit of {MAX_JSON_DEPTH}"
            ),
        });
    }

    let mut parser = serde_json::Deserializer::from_str(text);
    parser.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut parser))
        .and_then(|value| parser.end().map(|()| value))
        .map_err(|err| RenderError::InvalidJson {
            message: err.to_string(),
        })?;

    let mut buffer = Vec::with_capacity(text.len());
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"  "));
    value
        .serialize(&mut serializer)
        .map_err(|err| RenderError::Document {
            message: err.to_string(),
        })?;

    String::from_utf8(buffer).map_err(|err| RenderError::Document {
        message: err.to_string(),
    })
}

/// Deepest bracket nesting outside string literals. Only a guard; the parser
/// still decides validity.
fn nesting_depth(text: &str) -> usize {
    let (mut depth, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

pub(crate) fn render_json(
    text: &str,
    syntax_set: &SyntaxSet,
    class_style: &ClassStyle,
) -> Result<String, RenderError> {
    if text.trim().is_empty() {
        return Ok(EMPTY_JSON_PLACEHOLDER.to_string());
    }

    let formatted = reformat(text)?;
    highlight::highlight_code("json", "json", &formatted, syntax_set, class_style)
}
