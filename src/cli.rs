//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use flagfetch::color::ColorSystem;
use flagfetch::options::{DistributionMode, TerminalTheme};

#[derive(Parser)]
#[command(name = "flagfetch", version, about = "Recolor ASCII-art banners with flag color presets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Recolor an art template and print it
    Render(RenderArgs),

    /// List the built-in presets
    Presets {
        /// Emit the catalogue as JSON instead of a swatch listing
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args)]
pub struct RenderArgs {
    /// Art template file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Color preset to apply
    #[arg(short, long, default_value = "rainbow")]
    pub preset: String,

    /// How colors spread across the art
    #[arg(short, long, value_enum, default_value = "vertical")]
    pub mode: DistributionMode,

    /// Terminal color capability
    #[arg(short, long, value_enum, default_value = "rgb")]
    pub color_system: ColorSystem,

    /// Terminal background the colors must stay legible on
    #[arg(short, long, value_enum, default_value = "dark")]
    pub theme: TerminalTheme,

    /// Lightness target in 0..1; defaults to 0.65 (dark) or 0.40 (light)
    #[arg(short, long)]
    pub lightness: Option<f32>,
}
