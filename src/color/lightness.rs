//! Clamped perceptual lightness value.

use serde::{Deserialize, Serialize};

/// Perceived brightness in `[0, 1]`, in the HSL sense.
///
/// User-supplied lightness is inherently approximate, so construction
/// clamps out-of-range values instead of rejecting them.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Lightness(f32);

impl Lightness {
    /// Creates a lightness value, clamping to `[0, 1]`.
    ///
    /// NaN maps to `0.0`.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The raw value in `[0, 1]`.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<Lightness> for f32 {
    fn from(lightness: Lightness) -> Self {
        lightness.0
    }
}

impl From<f32> for Lightness {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass_through() {
        assert_eq!(Lightness::new(0.65).value(), 0.65);
        assert_eq!(Lightness::new(0.0).value(), 0.0);
        assert_eq!(Lightness::new(1.0).value(), 1.0);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(Lightness::new(1.5).value(), 1.0);
        assert_eq!(Lightness::new(-0.25).value(), 0.0);
    }

    #[test]
    fn nan_clamps_to_zero() {
        assert_eq!(Lightness::new(f32::NAN).value(), 0.0);
    }
}
