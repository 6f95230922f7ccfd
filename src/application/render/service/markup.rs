use lol_html::{RewriteStrSettings, element, rewrite_str};

use crate::application::render::types::RenderError;

/// Drop the elements that would load resources or run code inside the preview
/// frame, then wrap what remains. Everything else, including inline event
/// handler attributes, is left as authored.
pub(crate) fn preview_html(markup: &str) -> Result<String, RenderError> {
    let filtered = rewrite_str(
        markup,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("script", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("style", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("link", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("meta", |el| {
                    el.remove();
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|err| RenderError::Document {
        message: err.to_string(),
    })?;

    Ok(format!(
        "<div class=\"code-block html-preview\">{filtered}</div>"
    ))
}
