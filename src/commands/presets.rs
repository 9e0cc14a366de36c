//! The `presets` subcommand: list the built-in catalogue.

use anyhow::Result;
use serde::Serialize;

use flagfetch::color::ColorSystem;
use flagfetch::presets;
use flagfetch::render::RESET;

#[derive(Serialize)]
struct PresetEntry<'a> {
    name: &'a str,
    colors: Vec<String>,
}

pub fn handle_presets(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = presets::all()
            .iter()
            .map(|p| PresetEntry {
                name: p.name(),
                colors: p.colors().iter().map(|c| c.to_hex()).collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for preset in presets::all() {
        let swatch: String = preset
            .colors()
            .iter()
            .map(|c| format!("{}█{RESET}", c.to_ansi(ColorSystem::Rgb, false)))
            .collect();
        println!("{:<20} {swatch}", preset.name());
    }
    Ok(())
}
