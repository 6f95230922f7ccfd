//! Seekeech: format-aware live previews for a plain-text editor.
//!
//! The core is two pure functions: [`detect`] maps a file name to a
//! [`FormatTag`], and [`render`] turns text of that format into HTML that is
//! safe to inject into a preview surface. Rendering never fails; a strategy
//! that cannot cope with its input produces a marked error block instead.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

pub use application::render::render;
pub use domain::format::{FormatTag, detect};
