use crate::application::render::types::RenderError;
use crate::domain::format::FormatTag;

use super::escape::escape_html;

/// Uniform block shown when a format strategy fails.
pub(crate) fn error_block(format: FormatTag, error: &RenderError) -> String {
    format!(
        concat!(
            "<div class=\"parse-error\" data-format=\"{tag}\">",
            "<div class=\"error-icon\" aria-hidden=\"true\">\u{26a0}\u{fe0f}</div>",
            "<div class=\"error-content\">",
            "<h4>Failed to parse {name}</h4>",
            "<p>{message}</p>",
            "<small>Showing content as plain text</small>",
            "</div>",
            "</div>"
        ),
        tag = format.as_str(),
        name = format.display_name(),
        message = escape_html(&error.to_string()),
    )
}

/// Rich JSON failure display: the parser message plus the untouched input so the
/// malformed token can be located.
pub(crate) fn json_error_block(message: &str, original: &str) -> String {
    format!(
        concat!(
            "<div class=\"json-error\">",
            "<div class=\"error-header\">\u{274c} JSON parse error:</div>",
            "<div class=\"error-message\">{message}</div>",
            "<pre class=\"original-json\">{original}</pre>",
            "</div>"
        ),
        message = escape_html(message),
        original = escape_html(original),
    )
}
