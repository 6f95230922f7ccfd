use once_cell::sync::Lazy;
use syntect::{
    highlighting::ThemeSet,
    html::css_for_theme_with_class_style,
};

use crate::application::render::types::RenderError;

use super::CLASS_STYLE;

pub const DEFAULT_THEME: &str = "base16-ocean.light";

static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// CSS for the `syntax-` class vocabulary emitted by the code strategies.
pub fn highlight_stylesheet(theme_name: &str) -> Result<String, RenderError> {
    let theme = THEMES
        .themes
        .get(theme_name)
        .ok_or_else(|| RenderError::Stylesheet {
            message: format!("theme `{theme_name}` not found"),
        })?;

    css_for_theme_with_class_style(theme, CLASS_STYLE).map_err(|err| RenderError::Stylesheet {
        message: err.to_string(),
    })
}

/// Names accepted by [`highlight_stylesheet`], sorted.
pub fn available_themes() -> Vec<&'static str> {
    THEMES.themes.keys().map(String::as_str).collect()
}
