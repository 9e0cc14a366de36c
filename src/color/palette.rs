//! xterm color palettes and nearest-color quantization.
//!
//! The 256-color palette is the standard xterm layout: 16 system colors,
//! a 6x6x6 color cube, and a 24-step grayscale ramp. Quantization distance
//! is Euclidean in RGB space; equidistant entries resolve to the lowest
//! palette index.

use std::sync::OnceLock;

use super::Rgb;

/// The 16 standard colors as xterm renders them by default.
const SYSTEM_COLORS: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0x80, 0x00, 0x00), // red
    Rgb::new(0x00, 0x80, 0x00), // green
    Rgb::new(0x80, 0x80, 0x00), // yellow
    Rgb::new(0x00, 0x00, 0x80), // blue
    Rgb::new(0x80, 0x00, 0x80), // magenta
    Rgb::new(0x00, 0x80, 0x80), // cyan
    Rgb::new(0xC0, 0xC0, 0xC0), // white
    Rgb::new(0x80, 0x80, 0x80), // bright black
    Rgb::new(0xFF, 0x00, 0x00), // bright red
    Rgb::new(0x00, 0xFF, 0x00), // bright green
    Rgb::new(0xFF, 0xFF, 0x00), // bright yellow
    Rgb::new(0x00, 0x00, 0xFF), // bright blue
    Rgb::new(0xFF, 0x00, 0xFF), // bright magenta
    Rgb::new(0x00, 0xFF, 0xFF), // bright cyan
    Rgb::new(0xFF, 0xFF, 0xFF), // bright white
];

/// Channel values used by the 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

static XTERM_PALETTE: OnceLock<[Rgb; 256]> = OnceLock::new();

/// The full 256-entry xterm palette, built once.
pub(crate) fn xterm_palette() -> &'static [Rgb; 256] {
    XTERM_PALETTE.get_or_init(|| {
        let mut palette = [Rgb::new(0, 0, 0); 256];
        palette[..16].copy_from_slice(&SYSTEM_COLORS);
        for r in 0..6 {
            for g in 0..6 {
                for b in 0..6 {
                    palette[16 + 36 * r + 6 * g + b] =
                        Rgb::new(CUBE_LEVELS[r], CUBE_LEVELS[g], CUBE_LEVELS[b]);
                }
            }
        }
        for (i, slot) in palette[232..].iter_mut().enumerate() {
            let v = 8 + 10 * i as u8;
            *slot = Rgb::new(v, v, v);
        }
        palette
    })
}

/// Index of the nearest entry in the 256-color xterm palette.
pub fn nearest_ansi256(color: Rgb) -> u8 {
    nearest_in(xterm_palette(), color)
}

/// Index (0-15) of the nearest of the 16 named colors.
pub fn nearest_ansi16(color: Rgb) -> u8 {
    nearest_in(&SYSTEM_COLORS, color)
}

fn nearest_in(palette: &[Rgb], color: Rgb) -> u8 {
    let mut best = 0;
    let mut best_dist = u32::MAX;
    for (i, candidate) in palette.iter().enumerate() {
        let dist = distance_sq(color, *candidate);
        // Strictly-less keeps the lowest index on ties.
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best as u8
}

fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_expected_layout() {
        let palette = xterm_palette();
        assert_eq!(palette[0], Rgb::new(0, 0, 0));
        assert_eq!(palette[15], Rgb::new(255, 255, 255));
        // First cube entry, then one with every level distinct.
        assert_eq!(palette[16], Rgb::new(0, 0, 0));
        assert_eq!(palette[16 + 36 + 6 * 2 + 3], Rgb::new(95, 135, 175));
        // Grayscale ramp endpoints.
        assert_eq!(palette[232], Rgb::new(8, 8, 8));
        assert_eq!(palette[255], Rgb::new(238, 238, 238));
    }

    #[test]
    fn exact_palette_colors_map_to_themselves() {
        assert_eq!(nearest_ansi256(Rgb::new(95, 135, 175)), 67);
        assert_eq!(nearest_ansi256(Rgb::new(8, 8, 8)), 232);
    }

    #[test]
    fn equidistant_colors_resolve_to_lowest_index() {
        // (4,4,4) is exactly as far from index 0 (black) as from the first
        // grayscale ramp entry (8,8,8); the tie goes to index 0.
        assert_eq!(nearest_ansi256(Rgb::new(4, 4, 4)), 0);
    }

    #[test]
    fn nearest_entry_beats_every_other_index() {
        let samples = [
            Rgb::new(200, 30, 30),
            Rgb::new(85, 205, 252),
            Rgb::new(17, 99, 231),
            Rgb::new(250, 218, 94),
        ];
        let palette = xterm_palette();
        for color in samples {
            let idx = nearest_ansi256(color) as usize;
            let best = distance_sq(color, palette[idx]);
            for entry in palette.iter() {
                assert!(best <= distance_sq(color, *entry));
            }
        }
    }

    #[test]
    fn nearest_ansi16_picks_named_colors() {
        assert_eq!(nearest_ansi16(Rgb::new(255, 0, 0)), 9);
        assert_eq!(nearest_ansi16(Rgb::new(0, 0, 0)), 0);
        assert_eq!(nearest_ansi16(Rgb::new(250, 250, 250)), 15);
        assert_eq!(nearest_ansi16(Rgb::new(130, 10, 120)), 5);
    }
}
