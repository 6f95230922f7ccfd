use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::format::FormatTag;

/// Rendering request passed into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Declared format of the text; unknown tags have already degraded to plain.
    pub format: FormatTag,
    /// Raw editor content.
    pub text: String,
}

impl RenderRequest {
    pub fn new(format: FormatTag, text: impl Into<String>) -> Self {
        Self {
            format,
            text: text.into(),
        }
    }
}

/// Markup returned to callers. Always safe to inject into the preview surface;
/// a failed strategy is folded into `html` as a marked error block and recorded
/// in `failure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub format: FormatTag,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<RenderError>,
}

impl RenderOutput {
    pub fn rendered(format: FormatTag, html: String) -> Self {
        Self {
            format,
            html,
            failure: None,
        }
    }

    pub fn degraded(format: FormatTag, html: String, failure: RenderError) -> Self {
        Self {
            format,
            html,
            failure: Some(failure),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

/// Structured errors surfaced by the individual format strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderError {
    #[error("markdown conversion failed: {message}")]
    Markdown { message: String },
    #[error("syntax highlighting failed: {language}: {message}")]
    Highlighting { language: String, message: String },
    #[error("document processing failed: {message}")]
    Document { message: String },
    #[error("{message}")]
    InvalidJson { message: String },
    #[error("stylesheet generation failed: {message}")]
    Stylesheet { message: String },
    #[error("renderer panicked: {message}")]
    Panicked { message: String },
}

/// Trait exposed by the rendering pipeline. Implementations must be pure and
/// total: the same request always yields the same output and never an error.
pub trait RenderService: Send + Sync {
    fn render(&self, request: &RenderRequest) -> RenderOutput;
}
