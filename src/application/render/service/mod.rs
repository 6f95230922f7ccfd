mod csv;
mod escape;
mod fallback;
mod highlight;
mod json;
mod markdown;
mod markup;
mod stylesheet;

use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::Arc,
};

use metrics::counter;
use once_cell::sync::{Lazy, OnceCell};
use syntect::{dumps::from_uncompressed_data, html::ClassStyle, parsing::SyntaxSet};
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::render::types::{RenderError, RenderOutput, RenderRequest, RenderService};
use crate::domain::format::FormatTag;

use self::escape::escape_html;
use self::markdown::{MarkdownRenderer, default_options};

pub use stylesheet::{DEFAULT_THEME, available_themes, highlight_stylesheet};

pub const METRIC_RENDER_TOTAL: &str = "seekeech_render_total";
pub const METRIC_RENDER_DEGRADED_TOTAL: &str = "seekeech_render_degraded_total";

pub(crate) const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "syntax-" };

/// Format-dispatch renderer: Comrak for Markdown, lol_html for the HTML preview,
/// Syntect for code formats, serde_json for JSON and a literal splitter for CSV.
pub struct FormatRenderer {
    options: comrak::Options<'static>,
    syntax_set: SyntaxSet,
    class_style: ClassStyle,
    highlight_fenced_code: bool,
}

impl FormatRenderer {
    /// Construct a renderer over the syntax pack bundled at build time.
    pub fn with_config(config: &RenderPipelineConfig) -> Self {
        Self::with_syntax_set(bundled_syntax_set(), config)
    }

    /// Construct a renderer over a caller-supplied grammar collection.
    pub fn with_syntax_set(syntax_set: SyntaxSet, config: &RenderPipelineConfig) -> Self {
        Self {
            options: default_options(),
            syntax_set,
            class_style: CLASS_STYLE,
            highlight_fenced_code: config.highlight_fenced_code,
        }
    }

    /// Run the strategy for `format` without degrading failures.
    pub fn try_render(&self, format: FormatTag, text: &str) -> Result<String, RenderError> {
        match format {
            FormatTag::Plain => Ok(plain_block(text)),
            FormatTag::Markdown => MarkdownRenderer {
                options: &self.options,
                syntax_set: &self.syntax_set,
                class_style: &self.class_style,
                highlight_fenced_code: self.highlight_fenced_code,
            }
            .render(text),
            FormatTag::Html => markup::preview_html(text),
            FormatTag::Css => self.highlight(format, "css", text),
            FormatTag::Javascript => self.highlight(format, "js", text),
            FormatTag::Xml => self.highlight(format, "xml", text),
            FormatTag::Json => json::render_json(text, &self.syntax_set, &self.class_style),
            FormatTag::Csv => Ok(csv::render_table(text)),
        }
    }

    fn highlight(&self, format: FormatTag, token: &str, text: &str) -> Result<String, RenderError> {
        highlight::highlight_code(
            format.as_str(),
            token,
            text,
            &self.syntax_set,
            &self.class_style,
        )
    }

    fn degrade(&self, format: FormatTag, text: &str, error: RenderError) -> RenderOutput {
        counter!(METRIC_RENDER_DEGRADED_TOTAL, "format" => format.as_str()).increment(1);

        let html = match &error {
            RenderError::InvalidJson { message } => {
                debug!(
                    target = "application::render::json",
                    error = %message,
                    "JSON input did not parse"
                );
                fallback::json_error_block(message, text)
            }
            other => {
                warn!(
                    target = "application::render",
                    format = %format,
                    error = %other,
                    "Format strategy failed; showing degraded preview"
                );
                fallback::error_block(format, other)
            }
        };

        RenderOutput::degraded(format, html, error)
    }
}

impl Default for FormatRenderer {
    fn default() -> Self {
        Self::with_config(&active_render_config())
    }
}

impl RenderService for FormatRenderer {
    fn render(&self, request: &RenderRequest) -> RenderOutput {
        let format = request.format;
        counter!(METRIC_RENDER_TOTAL, "format" => format.as_str()).increment(1);

        let attempt = catch_unwind(AssertUnwindSafe(|| {
            self.try_render(format, &request.text)
        }));

        match attempt {
            Ok(Ok(html)) => RenderOutput::rendered(format, html),
            Ok(Err(error)) => self.degrade(format, &request.text, error),
            Err(payload) => {
                let error = RenderError::Panicked {
                    message: panic_message(payload.as_ref()),
                };
                self.degrade(format, &request.text, error)
            }
        }
    }
}

static RENDER_SERVICE: Lazy<Arc<FormatRenderer>> =
    Lazy::new(|| Arc::new(FormatRenderer::default()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<FormatRenderer> {
    Arc::clone(&RENDER_SERVICE)
}

/// Render `text` as `format` with the shared renderer. Never fails; strategy
/// failures come back as a marked error block.
pub fn render(format: FormatTag, text: &str) -> String {
    render_service()
        .render(&RenderRequest::new(format, text))
        .into_html()
}

pub(crate) fn bundled_syntax_set() -> SyntaxSet {
    let syntax_bytes = include_bytes!(env!("SYNTAX_PACK_FILE"));
    from_uncompressed_data(syntax_bytes).expect("syntax pack must be valid")
}

fn plain_block(text: &str) -> String {
    format!("<pre class=\"plain-text\">{}</pre>", escape_html(text))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct RenderPipelineConfig {
    pub highlight_fenced_code: bool,
}

impl Default for RenderPipelineConfig {
    fn default() -> Self {
        Self {
            highlight_fenced_code: true,
        }
    }
}

impl From<&crate::config::RenderSettings> for RenderPipelineConfig {
    fn from(settings: &crate::config::RenderSettings) -> Self {
        Self {
            highlight_fenced_code: settings.highlight_fenced_code,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderConfigError {
    #[error("render service already configured")]
    AlreadyConfigured,
}

static RENDER_PIPELINE_CONFIG: OnceCell<RenderPipelineConfig> = OnceCell::new();

/// Fix the configuration the shared renderer is built with. Must run before the
/// first call to [`render_service`] to take effect.
pub fn configure_render_service(config: RenderPipelineConfig) -> Result<(), RenderConfigError> {
    RENDER_PIPELINE_CONFIG
        .set(config)
        .map_err(|_| RenderConfigError::AlreadyConfigured)
}

fn active_render_config() -> RenderPipelineConfig {
    RENDER_PIPELINE_CONFIG.get().cloned().unwrap_or_default()
}
