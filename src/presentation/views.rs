use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::domain::format::FormatTag;

/// Standalone HTML document wrapping a rendered preview.
#[derive(Template)]
#[template(path = "preview.html")]
pub struct PreviewPage<'a> {
    pub title: &'a str,
    pub format: FormatTag,
    pub stylesheet: &'a str,
    pub body: &'a str,
}

/// Askama failure, tagged with the template that produced it.
#[derive(Debug, Error)]
#[error("failed to render `{template}`")]
pub struct TemplateRenderError {
    template: &'static str,
    #[source]
    error: AskamaError,
}

pub fn render_template<T: Template>(template: T) -> Result<String, TemplateRenderError> {
    template.render().map_err(|error| TemplateRenderError {
        template: std::any::type_name::<T>(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_escapes_title_and_embeds_body_verbatim() {
        let html = render_template(PreviewPage {
            title: "<notes>.md",
            format: FormatTag::Markdown,
            stylesheet: ".syntax-code { color: red; }",
            body: "<p>hello</p>",
        })
        .expect("page renders");

        assert!(
            html.contains("<title>&#60;notes&#62;.md</title>")
                || html.contains("<title>&lt;notes&gt;.md</title>")
        );
        assert!(html.contains("<main class=\"preview-content\">\n<p>hello</p>\n</main>"));
        assert!(html.contains("data-format=\"markdown\""));
        assert!(html.contains(".syntax-code { color: red; }"));
    }
}
