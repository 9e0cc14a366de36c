//! Emit colorized text from a template and a color assignment.
//!
//! The renderer walks the template, wraps colored runs in the escape
//! sequences their assigned colors serialize to, and resets at the end of
//! every colored stretch so color never leaks into unrelated output.
//! Coloring failures degrade the visuals instead of aborting: a missing
//! color system falls back to 16-color mode, and a malformed template can
//! still be printed plain.

use tracing::debug;

use crate::art::{
    distribute, strip_markers, ArtTemplate, ColorAssignment, MalformedTemplate, Segment,
};
use crate::color::{ColorSystem, Rgb};
use crate::options::RenderOptions;
use crate::presets::{self, PresetError};

/// The SGR reset sequence.
pub const RESET: &str = "\x1b[0m";

/// Errors from the full recoloring pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Template(#[from] MalformedTemplate),
}

/// Runs the whole pipeline: preset lookup, lightness adjustment,
/// distribution, and rendering.
///
/// Returns one output line per input template line.
pub fn recolor_art(text: &str, options: &RenderOptions) -> Result<Vec<String>, RenderError> {
    let preset = presets::get(&options.preset)?;
    let lightness = options
        .lightness
        .unwrap_or_else(|| presets::default_lightness(options.theme));
    let preset = preset.with_lightness_adaptive(lightness, options.theme);

    let template = ArtTemplate::parse(text)?.normalize();
    let assignment = distribute(&preset, &template, options.mode);
    Ok(render(&template, &assignment, options.color_system))
}

/// Renders a template with an assignment at the given capability level.
///
/// `None` degrades to the most conservative 16-color mode rather than
/// failing; this is a cosmetic layer and must not abort the display.
pub fn render(
    template: &ArtTemplate,
    assignment: &ColorAssignment,
    system: Option<ColorSystem>,
) -> Vec<String> {
    let system = system.unwrap_or(ColorSystem::Ansi16);
    debug!(?system, lines = template.line_count(), "rendering art");

    template
        .lines()
        .iter()
        .enumerate()
        .map(|(line_idx, line)| {
            let mut out = String::new();
            let mut slot = 0;
            let mut active: Option<Rgb> = None;

            for segment in line.segments() {
                match segment {
                    Segment::Literal(text) => {
                        if active.take().is_some() {
                            out.push_str(RESET);
                        }
                        out.push_str(text);
                    }
                    Segment::Run(text) => {
                        for ch in text.chars() {
                            if let Some(color) = assignment.color_at(line_idx, slot) {
                                if active != Some(color) {
                                    out.push_str(&color.to_ansi(system, false));
                                    active = Some(color);
                                }
                            }
                            out.push(ch);
                            slot += 1;
                        }
                    }
                }
            }

            if active.is_some() {
                out.push_str(RESET);
            }
            out
        })
        .collect()
}

/// Renders template text with markers stripped and no coloring.
///
/// The degraded fallback when parsing fails.
pub fn render_plain(text: &str) -> Vec<String> {
    text.lines().map(strip_markers).collect()
}

/// Colorizes arbitrary key/value lines with a foreground/background pair,
/// independent of the art path.
pub fn colorize_fields<'a, I>(
    lines: I,
    foreground: Rgb,
    background: Option<Rgb>,
    system: Option<ColorSystem>,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let system = system.unwrap_or(ColorSystem::Ansi16);
    lines
        .into_iter()
        .map(|line| {
            let mut out = foreground.to_ansi(system, false);
            if let Some(bg) = background {
                out.push_str(&bg.to_ansi(system, true));
            }
            out.push_str(line);
            out.push_str(RESET);
            out
        })
        .collect()
}
