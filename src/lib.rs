//! flagfetch - recolor terminal ASCII-art banners with flag color presets.
//!
//! The core is a pure, synchronous pipeline over in-memory values: a named
//! color preset is looked up in the built-in registry, its lightness is
//! adjusted for the terminal background, the colors are distributed
//! proportionally across the slots of an ASCII-art template, and the
//! result is serialized to ANSI escape sequences at the caller-supplied
//! capability level. No I/O happens inside the core; art text and the
//! capability level come in as values, colorized lines go out as values.
//!
//! # Module Structure
//!
//! - [`color`] - RGB/HSL color model and ANSI serialization
//! - [`presets`] - named presets and the read-only registry
//! - [`art`] - template parsing and proportional color distribution
//! - [`render`] - final escape-sequence emission
//! - [`options`] - the explicit configuration struct callers fill in

pub mod art;
pub mod color;
pub mod options;
pub mod presets;
pub mod render;

pub use options::RenderOptions;
pub use render::{recolor_art, RenderError};
