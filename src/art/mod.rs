//! ASCII-art templates with neofetch-style `${cN}` color markers.
//!
//! A marker starts a colored run that extends to the next marker or the
//! end of the line. Text before the first marker the template has ever
//! seen is literal; once a marker has appeared, lines that start without
//! one continue the previous run, matching how neofetch art carries color
//! across lines. A template with no markers at all is treated as fully
//! recolorable.
//!
//! # Module Structure
//!
//! - [`ArtTemplate`] / [`TemplateLine`] - parsed, normalized art
//! - [`distribute`] - proportional mapping of preset colors onto slots

mod distribute;

pub use distribute::{distribute, ColorAssignment};

use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Highest marker index neofetch art uses.
const MAX_MARKER_INDEX: u32 = 6;

/// Errors from parsing an art template.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MalformedTemplate {
    #[error("unterminated color marker at line {line}, column {column}")]
    Unterminated { line: usize, column: usize },

    #[error("color marker index {index} out of range 1-6 at line {line}")]
    IndexOutOfRange { line: usize, index: String },
}

/// One piece of a template line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any colored run; rendered unchanged.
    Literal(String),
    /// Text inside a colored run; every character is a color slot.
    Run(String),
}

/// A parsed template line.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TemplateLine {
    segments: Vec<Segment>,
}

impl TemplateLine {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of color slots (characters inside runs) on this line.
    pub fn slot_count(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Run(text) => text.chars().count(),
                Segment::Literal(_) => 0,
            })
            .sum()
    }

    /// The line's text with markers removed.
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Run(text) | Segment::Literal(text) => text.as_str(),
            })
            .collect()
    }

    fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Literal(text) | Segment::Run(text) if text.is_empty() => {}
            segment => self.segments.push(segment),
        }
    }
}

/// Parsed ASCII art, read-only to the rest of the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtTemplate {
    lines: Vec<TemplateLine>,
}

impl ArtTemplate {
    /// Parses template text, scanning `${cN}` markers.
    pub fn parse(text: &str) -> Result<Self, MalformedTemplate> {
        let mut lines = Vec::new();
        // Set once the first marker of the whole template has been seen;
        // leading text on later lines then continues the previous run.
        let mut in_run = false;

        for (line_idx, raw) in text.lines().enumerate() {
            let mut line = TemplateLine::default();
            let mut rest = raw;
            let mut consumed = 0;

            while let Some(pos) = rest.find("${c") {
                let before = &rest[..pos];
                line.push(if in_run {
                    Segment::Run(before.to_owned())
                } else {
                    Segment::Literal(before.to_owned())
                });

                let marker_start = consumed + pos;
                let after_open = &rest[pos + 3..];
                let close = after_open.find('}').ok_or(MalformedTemplate::Unterminated {
                    line: line_idx,
                    column: marker_start,
                })?;
                let digits = &after_open[..close];
                match digits.parse::<u32>() {
                    Ok(n) if (1..=MAX_MARKER_INDEX).contains(&n) => {}
                    _ => {
                        return Err(MalformedTemplate::IndexOutOfRange {
                            line: line_idx,
                            index: digits.to_owned(),
                        })
                    }
                }

                in_run = true;
                consumed = marker_start + 3 + close + 1;
                rest = &after_open[close + 1..];
            }

            line.push(if in_run {
                Segment::Run(rest.to_owned())
            } else {
                Segment::Literal(rest.to_owned())
            });
            lines.push(line);
        }

        // No markers anywhere: treat every line as one recolorable run.
        if !in_run {
            for line in &mut lines {
                let text = line.plain_text();
                line.segments = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Segment::Run(text)]
                };
            }
        }

        debug!(lines = lines.len(), "parsed art template");
        Ok(Self { lines })
    }

    /// Pads every line with trailing spaces to a uniform display width.
    pub fn normalize(mut self) -> Self {
        let width = self.width();
        for line in &mut self.lines {
            let pad = width.saturating_sub(line.plain_text().width());
            if pad > 0 {
                line.push(Segment::Literal(" ".repeat(pad)));
            }
        }
        self
    }

    pub fn lines(&self) -> &[TemplateLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Widest line, in display columns.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.plain_text().width())
            .max()
            .unwrap_or(0)
    }

    /// All lines with markers removed and no coloring.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(TemplateLine::plain_text).collect()
    }
}

/// Best-effort removal of well-formed `${cN}` markers.
///
/// The degraded fallback for text that failed [`ArtTemplate::parse`]:
/// anything that does not look like a complete marker stays in place.
pub fn strip_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("${c") {
        out.push_str(&rest[..pos]);
        let after_open = &rest[pos + 3..];
        match after_open.find('}') {
            Some(close) if after_open[..close].chars().all(|c| c.is_ascii_digit()) => {
                rest = &after_open[close + 1..];
            }
            _ => {
                out.push_str("${c");
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}
