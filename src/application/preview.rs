//! Preview session glue: what the editor does when a file is opened or the
//! text changes. Detection, rendering and counters in one call.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::render::{
    FormatRenderer, RenderError, RenderRequest, RenderService, highlight_stylesheet,
    render_service,
};
use crate::domain::{
    format::{FormatTag, detect},
    stats::DocumentStats,
};
use crate::presentation::views::{PreviewPage, TemplateRenderError, render_template};

pub const DEFAULT_LARGE_DOCUMENT_CHARS: usize = 10_000;

/// Everything the preview pane and status bar need after a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub format: FormatTag,
    pub html: String,
    /// True when `html` is an error block rather than the requested rendering.
    pub degraded: bool,
    pub stats: DocumentStats,
    pub large: bool,
}

#[derive(Clone)]
pub struct PreviewService {
    renderer: Arc<FormatRenderer>,
    large_document_chars: usize,
}

impl PreviewService {
    pub fn new(renderer: Arc<FormatRenderer>, large_document_chars: usize) -> Self {
        Self {
            renderer,
            large_document_chars,
        }
    }

    /// Preview a freshly opened file, detecting the format from its name.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn open(&self, file_name: &str, text: &str) -> Preview {
        let format = detect(file_name);
        debug!(%format, "Detected format from file name");
        self.refresh(format, text)
    }

    /// Re-render after an edit or an explicit format switch.
    pub fn refresh(&self, format: FormatTag, text: &str) -> Preview {
        let output = self.renderer.render(&RenderRequest::new(format, text));
        let stats = DocumentStats::from_text(text);

        Preview {
            format,
            degraded: output.is_degraded(),
            html: output.into_html(),
            large: stats.is_large(self.large_document_chars),
            stats,
        }
    }

    /// Wrap a preview into a self-contained HTML document styled with `theme`.
    pub fn standalone_page(
        &self,
        title: &str,
        preview: &Preview,
        theme: &str,
    ) -> Result<String, PreviewPageError> {
        let stylesheet = highlight_stylesheet(theme)?;
        let page = render_template(PreviewPage {
            title,
            format: preview.format,
            stylesheet: &stylesheet,
            body: &preview.html,
        })?;
        Ok(page)
    }
}

impl Default for PreviewService {
    fn default() -> Self {
        Self::new(render_service(), DEFAULT_LARGE_DOCUMENT_CHARS)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewPageError {
    #[error(transparent)]
    Stylesheet(#[from] RenderError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
}
