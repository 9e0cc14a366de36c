//! Proportional mapping of preset colors onto template slots.
//!
//! Slot `i` of `n` maps to preset color index `floor(i * k / n)`, clamped
//! to `k - 1`. The mapping is monotonic, uses every color at least once
//! whenever `n >= k`, and samples an evenly spaced prefix when `n < k`.

use tracing::debug;

use crate::color::Rgb;
use crate::options::DistributionMode;
use crate::presets::Preset;

use super::ArtTemplate;

/// Colors assigned to every slot of a template, one vector per line.
///
/// Rebuilt per render; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorAssignment {
    per_line: Vec<Vec<Rgb>>,
}

impl ColorAssignment {
    /// Color for a `(line, slot)` position, if that slot exists.
    pub fn color_at(&self, line: usize, slot: usize) -> Option<Rgb> {
        self.per_line.get(line)?.get(slot).copied()
    }

    /// Slot colors for one line, in slot order.
    pub fn line(&self, line: usize) -> &[Rgb] {
        self.per_line.get(line).map_or(&[], Vec::as_slice)
    }

    /// True when no slot received a color.
    pub fn is_empty(&self) -> bool {
        self.per_line.iter().all(Vec::is_empty)
    }
}

/// Assigns a preset color to every slot of `template`.
pub fn distribute(
    preset: &Preset,
    template: &ArtTemplate,
    mode: DistributionMode,
) -> ColorAssignment {
    let colors = preset.colors();
    debug!(
        preset = preset.name(),
        k = colors.len(),
        lines = template.line_count(),
        ?mode,
        "distributing preset colors"
    );

    let per_line = match mode {
        DistributionMode::Horizontal => template
            .lines()
            .iter()
            .map(|line| {
                let n = line.slot_count();
                (0..n).map(|i| colors[index_for(i, n, colors.len())]).collect()
            })
            .collect(),
        DistributionMode::Vertical => {
            let n = template.line_count();
            template
                .lines()
                .iter()
                .enumerate()
                .map(|(line_idx, line)| {
                    let color = colors[index_for(line_idx, n, colors.len())];
                    vec![color; line.slot_count()]
                })
                .collect()
        }
    };

    ColorAssignment { per_line }
}

/// Preset index for slot `i` of `n`, given `k` preset colors.
fn index_for(i: usize, n: usize, k: usize) -> usize {
    debug_assert!(i < n);
    (i * k / n).min(k - 1)
}
