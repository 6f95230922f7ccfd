//! Presentation layer: askama templates around rendered previews.

pub mod views;
