//! Application services layer.

pub mod error;
pub mod preview;
pub mod render;
