//! Explicit configuration contract between callers and the color core.
//!
//! The render pipeline takes a fixed struct with enumerated fields rather
//! than a loose options bag, so the contract with the CLI (or any other
//! frontend) stays statically checkable.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::color::{ColorSystem, Lightness};

/// How preset colors spread across the art.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionMode {
    /// Color varies with the column inside each line; every line re-runs
    /// the proportional mapping over its own slot count.
    Horizontal,
    /// Color varies with the line number; every character in a line shares
    /// one color. This is the flag-stripe look and the default.
    Vertical,
}

/// Whether the terminal background is dark or light.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalTheme {
    Dark,
    Light,
}

/// Everything the render pipeline needs from its caller.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Name of a registered preset.
    pub preset: String,
    /// Lightness target; `None` uses the per-theme default.
    pub lightness: Option<Lightness>,
    pub mode: DistributionMode,
    /// Terminal capability; `None` degrades to 16-color rendering.
    pub color_system: Option<ColorSystem>,
    pub theme: TerminalTheme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preset: "rainbow".to_owned(),
            lightness: None,
            mode: DistributionMode::Vertical,
            color_system: Some(ColorSystem::Rgb),
            theme: TerminalTheme::Dark,
        }
    }
}
