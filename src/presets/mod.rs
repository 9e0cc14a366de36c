//! Named color presets and the built-in registry.
//!
//! A preset is an ordered, non-empty sequence of colors representing a
//! flag or theme. The registry is populated once from a fixed table and
//! is read-only afterwards, so the canonical presets never drift; every
//! adjusting operation returns a fresh [`Preset`].

mod catalogue;

use std::sync::OnceLock;

use tracing::debug;

use crate::color::{Lightness, Rgb};
use crate::options::TerminalTheme;

/// Errors from preset lookup or derivation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown preset: {name:?}")]
    UnknownPreset { name: String },

    #[error("weights must have one entry per color ({colors} colors, {weights} weights)")]
    WeightMismatch { colors: usize, weights: usize },
}

/// A named, ordered sequence of colors.
///
/// Order is significant: it is the sequence rendered top-to-bottom (or
/// left-to-right) across the art.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    name: String,
    colors: Vec<Rgb>,
}

impl Preset {
    /// Builds a preset from hex color strings.
    ///
    /// Used by the registry; exposed for tests and custom callers.
    /// The color list must be non-empty.
    pub fn from_hex_colors(
        name: impl Into<String>,
        hex_colors: &[&str],
    ) -> Result<Self, crate::color::InvalidColor> {
        assert!(!hex_colors.is_empty(), "a preset needs at least one color");
        let colors = hex_colors
            .iter()
            .map(|s| s.parse())
            .collect::<Result<_, _>>()?;
        Ok(Self {
            name: name.into(),
            colors,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns a new preset with every color's lightness replaced by
    /// `target`, keeping the name and color count.
    ///
    /// Pure: the original preset is untouched. Out-of-range targets are
    /// clamped by [`Lightness`] itself.
    pub fn with_lightness(&self, target: Lightness) -> Self {
        Self {
            name: self.name.clone(),
            colors: self
                .colors
                .iter()
                .map(|c| c.with_lightness(target))
                .collect(),
        }
    }

    /// Adjusts lightness with respect to the terminal background.
    ///
    /// On a dark background, colors darker than `target` are lifted to it
    /// so they stay visible; on a light background, colors lighter than
    /// `target` are pulled down. Colors already on the legible side are
    /// left alone.
    pub fn with_lightness_adaptive(&self, target: Lightness, theme: TerminalTheme) -> Self {
        let adjust = |c: &Rgb| match theme {
            TerminalTheme::Dark if c.lightness() < target => c.with_lightness(target),
            TerminalTheme::Light if c.lightness() > target => c.with_lightness(target),
            _ => *c,
        };
        Self {
            name: self.name.clone(),
            colors: self.colors.iter().map(adjust).collect(),
        }
    }

    /// Returns a new preset with each color repeated `weights[i]` times.
    pub fn with_weights(&self, weights: &[u8]) -> Result<Self, PresetError> {
        if weights.len() != self.colors.len() {
            return Err(PresetError::WeightMismatch {
                colors: self.colors.len(),
                weights: weights.len(),
            });
        }
        let colors = self
            .colors
            .iter()
            .zip(weights)
            .flat_map(|(c, &w)| std::iter::repeat(*c).take(usize::from(w)))
            .collect();
        Ok(Self {
            name: self.name.clone(),
            colors,
        })
    }
}

static REGISTRY: OnceLock<Vec<Preset>> = OnceLock::new();

fn registry() -> &'static [Preset] {
    REGISTRY
        .get_or_init(|| {
            debug!(presets = catalogue::CATALOGUE.len(), "building preset registry");
            catalogue::CATALOGUE
                .iter()
                .map(|(name, hex_colors)| {
                    Preset::from_hex_colors(*name, hex_colors)
                        .expect("built-in presets should parse")
                })
                .collect()
        })
        .as_slice()
}

/// Looks up a built-in preset by name.
pub fn get(name: &str) -> Result<&'static Preset, PresetError> {
    registry()
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| PresetError::UnknownPreset {
            name: name.to_owned(),
        })
}

/// All built-in presets in registration order.
pub fn all() -> &'static [Preset] {
    registry()
}

/// Default lightness target for a terminal background.
pub fn default_lightness(theme: TerminalTheme) -> Lightness {
    match theme {
        TerminalTheme::Dark => Lightness::new(0.65),
        TerminalTheme::Light => Lightness::new(0.4),
    }
}
