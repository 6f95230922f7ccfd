use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

use crate::application::render::types::RenderError;

use super::escape::escape_html;

/// Highlight a whole document in a grammar that must exist in the syntax set.
///
/// `label` names the block in the markup (`data-language`, `language-*` class);
/// `token` is what the grammar is looked up by.
pub(crate) fn highlight_code(
    label: &str,
    token: &str,
    code: &str,
    syntax_set: &SyntaxSet,
    class_style: &ClassStyle,
) -> Result<String, RenderError> {
    let syntax = find_syntax(syntax_set, token).ok_or_else(|| RenderError::Highlighting {
        language: label.to_string(),
        message: format!("no grammar registered for `{token}`"),
    })?;

    render_block(label, syntax, code, syntax_set, class_style)
}

/// Highlight a fenced code block from a Markdown document. Unknown or missing
/// languages fall back to the plain-text grammar.
pub(crate) fn highlight_fence(
    language: Option<&str>,
    code: &str,
    syntax_set: &SyntaxSet,
    class_style: &ClassStyle,
) -> Result<String, RenderError> {
    let label = language.unwrap_or("text").to_ascii_lowercase();
    let syntax =
        find_syntax(syntax_set, &label).unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    render_block(&label, syntax, code, syntax_set, class_style)
}

fn render_block(
    label: &str,
    syntax: &SyntaxReference,
    code: &str,
    syntax_set: &SyntaxSet,
    class_style: &ClassStyle,
) -> Result<String, RenderError> {
    let mut code_with_newline = code.to_string();
    if !code_with_newline.ends_with('\n') {
        code_with_newline.push('\n');
    }

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, *class_style);

    for line in LinesWithEndings::from(code_with_newline.as_str()) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|err| RenderError::Highlighting {
                language: label.to_string(),
                message: err.to_string(),
            })?;
    }

    let highlighted = generator.finalize();
    let label = escape_html(label);

    Ok(format!(
        "<pre class=\"syntax-highlight syntax-lang-{label}\" data-language=\"{label}\"><code class=\"language-{label} syntax-code\">{highlighted}</code></pre>"
    ))
}

fn find_syntax<'a>(syntax_set: &'a SyntaxSet, token: &str) -> Option<&'a SyntaxReference> {
    let lowercase = token.to_ascii_lowercase();
    syntax_set
        .find_syntax_by_token(&lowercase)
        .or_else(|| syntax_set.find_syntax_by_name(&lowercase))
        .or_else(|| syntax_set.find_syntax_by_extension(&lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::render::service::bundled_syntax_set;
    use syntect::parsing::SyntaxSetBuilder;

    fn class_style() -> ClassStyle {
        ClassStyle::SpacedPrefixed { prefix: "syntax-" }
    }

    #[test]
    fn highlights_css_with_prefixed_classes() {
        let syntax_set = bundled_syntax_set();
        let html = highlight_code(
            "css",
            "css",
            "body { color: red; }",
            &syntax_set,
            &class_style(),
        )
        .expect("css highlights");

        assert!(html.starts_with(
            "<pre class=\"syntax-highlight syntax-lang-css\" data-language=\"css\"><code class=\"language-css syntax-code\">"
        ));
        assert!(html.contains("syntax-source syntax-css"));
        assert!(html.ends_with("</code></pre>"));
    }

    #[test]
    fn highlighted_output_escapes_markup() {
        let syntax_set = bundled_syntax_set();
        let html = highlight_code(
            "javascript",
            "js",
            "if (a < b && c > d) { alert('<script>'); }",
            &syntax_set,
            &class_style(),
        )
        .expect("js highlights");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn missing_grammar_is_an_error() {
        let mut builder = SyntaxSetBuilder::new();
        builder.add_plain_text_syntax();
        let syntax_set = builder.build();

        let err = highlight_code("xml", "xml", "<a/>", &syntax_set, &class_style())
            .expect_err("xml grammar is missing");
        assert!(matches!(err, RenderError::Highlighting { ref language, .. } if language == "xml"));
    }

    #[test]
    fn unknown_fence_language_falls_back_to_plain_text() {
        let syntax_set = bundled_syntax_set();
        let html = highlight_fence(Some("NoSuchLang"), "x < y", &syntax_set, &class_style())
            .expect("fence highlights");

        assert!(html.contains("data-language=\"nosuchlang\""));
        assert!(html.contains("x &lt; y"));
    }
}
