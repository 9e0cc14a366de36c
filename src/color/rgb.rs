//! The RGB color type.
//!
//! Colors are immutable once constructed; adjusting operations return a
//! new value. Channel range is enforced by the `u8` type, so the only
//! construction failures are malformed hex or escape-sequence input.

use std::fmt;
use std::str::FromStr;

use super::{hsl, nearest_ansi16, nearest_ansi256, ColorSystem, Lightness};

/// Errors from constructing a color.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidColor {
    #[error("hex color must have exactly six digits: {0:?}")]
    HexLength(String),

    #[error("invalid hex digit in color: {0:?}")]
    HexDigit(String),

    #[error("malformed 24-bit ANSI sequence: {0:?}")]
    AnsiSequence(String),

    #[error("channel value out of range in ANSI sequence: {0:?}")]
    ChannelRange(String),
}

/// A single color with three 8-bit channels.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Serializes this color to the escape sequence selecting it as
    /// foreground or background at the given capability level.
    ///
    /// 24-bit systems get the exact channels; 256-color systems get the
    /// nearest palette index; 16-color systems get the nearest named color.
    pub fn to_ansi(self, system: ColorSystem, background: bool) -> String {
        match system {
            ColorSystem::Rgb => {
                let layer = if background { 48 } else { 38 };
                format!("\x1b[{};2;{};{};{}m", layer, self.r, self.g, self.b)
            }
            ColorSystem::Ansi256 => {
                let layer = if background { 48 } else { 38 };
                format!("\x1b[{};5;{}m", layer, nearest_ansi256(self))
            }
            ColorSystem::Ansi16 => {
                let index = nearest_ansi16(self);
                let mut code = if index < 8 {
                    30 + u32::from(index)
                } else {
                    90 + u32::from(index - 8)
                };
                if background {
                    code += 10;
                }
                format!("\x1b[{code}m")
            }
        }
    }

    /// Returns a new color with its HSL lightness replaced by `target`,
    /// preserving hue and saturation up to channel rounding (±1 unit).
    ///
    /// Applying the same target twice yields the same color as applying
    /// it once.
    pub fn with_lightness(self, target: Lightness) -> Self {
        let (h, s, l) = hsl::from_rgb(self.r, self.g, self.b);
        let target = target.value();
        // Already within one channel quantum of the target (the slack over
        // 1.0 absorbs f32 error); converting again would only shift the
        // channels by rounding noise.
        if (l - target).abs() * 510.0 <= 1.001 {
            return self;
        }
        let (r, g, b) = hsl::to_rgb(h, s, target);
        Self::new(r, g, b)
    }

    /// The HSL lightness of this color.
    pub fn lightness(self) -> Lightness {
        let (_, _, l) = hsl::from_rgb(self.r, self.g, self.b);
        Lightness::new(l)
    }

    /// Parses a 24-bit ANSI sequence (`ESC[38;2;r;g;bm` or `ESC[48;2;r;g;bm`)
    /// back into the color it selects.
    pub fn from_ansi(sequence: &str) -> Result<Self, InvalidColor> {
        let malformed = || InvalidColor::AnsiSequence(sequence.to_owned());

        let body = sequence
            .strip_prefix("\x1b[")
            .and_then(|s| s.strip_suffix('m'))
            .ok_or_else(malformed)?;
        let mut parts = body.split(';');
        match (parts.next(), parts.next()) {
            (Some("38") | Some("48"), Some("2")) => {}
            _ => return Err(malformed()),
        }

        let channel = |part: Option<&str>| -> Result<u8, InvalidColor> {
            part.ok_or_else(malformed)?
                .parse()
                .map_err(|_| InvalidColor::ChannelRange(sequence.to_owned()))
        };
        let r = channel(parts.next())?;
        let g = channel(parts.next())?;
        let b = channel(parts.next())?;
        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(Self::new(r, g, b))
    }

    /// Hex form, `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = InvalidColor;

    /// Parses `#RRGGBB` or `RRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(InvalidColor::HexLength(s.to_owned()));
        }
        let parse = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| InvalidColor::HexDigit(s.to_owned()))
        };
        Ok(Self::new(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
