//! Color model: RGB colors, perceptual lightness, and ANSI serialization.
//!
//! This module is the bottom of the recoloring pipeline. It knows nothing
//! about presets or ASCII art; it converts a single color between RGB and
//! HSL, adjusts its lightness, and serializes it to the escape sequence a
//! terminal of a given capability level understands.
//!
//! # Module Structure
//!
//! - [`rgb`] - The [`Rgb`] color type: hex parsing, lightness adjustment,
//!   ANSI serialization
//! - [`hsl`] - Pure RGB <-> HSL conversion functions
//! - [`lightness`] - The clamped [`Lightness`] value type
//! - [`palette`] - xterm 256/16-color palettes and nearest-color quantization

mod hsl;
mod lightness;
mod palette;
mod rgb;

pub use lightness::Lightness;
pub use palette::{nearest_ansi16, nearest_ansi256};
pub use rgb::{InvalidColor, Rgb};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Terminal color capability level, supplied by the caller.
///
/// Determines which serialization a color uses. 16-color mode cannot
/// represent fine gradients and falls back to the nearest named color.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSystem {
    /// The 16 named colors (codes 30-37 and 90-97).
    Ansi16,
    /// The 256-color indexed palette (codes 38;5;n).
    Ansi256,
    /// 24-bit true color (codes 38;2;r;g;b).
    Rgb,
}
