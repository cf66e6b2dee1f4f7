pub mod editing;
pub mod io;
pub mod models;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::*;
pub use models::*;
pub use render::{RenderBlock, render_blocks};
