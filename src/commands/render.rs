//! The `render` subcommand: recolor an art template and print it.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

use flagfetch::color::Lightness;
use flagfetch::render::{recolor_art, render_plain, RenderError};
use flagfetch::RenderOptions;

use crate::cli::RenderArgs;

pub fn handle_render(args: &RenderArgs) -> Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read art template {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read art template from stdin")?;
            buf
        }
    };

    let options = RenderOptions {
        preset: args.preset.clone(),
        lightness: args.lightness.map(Lightness::new),
        mode: args.mode,
        color_system: Some(args.color_system),
        theme: args.theme,
    };

    let lines = match recolor_art(&text, &options) {
        Ok(lines) => lines,
        // A broken template degrades to plain output; the banner still
        // has to show its information.
        Err(RenderError::Template(err)) => {
            eprintln!("warning: {err}; rendering without colors");
            render_plain(&text)
        }
        Err(err) => return Err(err.into()),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
