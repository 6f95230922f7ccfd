//! Format-dispatch rendering engine.
//!
//! Rendering is pure: a format tag and raw text go in, HTML that is safe to
//! inject into the preview surface comes out. Strategy failures never reach
//! the caller; they are folded into the returned markup as error blocks.

mod service;
mod types;

pub use service::{
    DEFAULT_THEME, FormatRenderer, METRIC_RENDER_DEGRADED_TOTAL, METRIC_RENDER_TOTAL,
    RenderConfigError, RenderPipelineConfig, available_themes, configure_render_service,
    highlight_stylesheet, render, render_service,
};
pub use types::{RenderError, RenderOutput, RenderRequest, RenderService};
