//! Command handlers for the flagfetch binary.

mod completions;
mod presets;
mod render;

pub use completions::handle_completions;
pub use presets::handle_presets;
pub use render::handle_render;
