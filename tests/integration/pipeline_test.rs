//! Library-level pipeline tests against the public API.

use flagfetch::art::{distribute, ArtTemplate};
use flagfetch::color::{ColorSystem, Lightness, Rgb};
use flagfetch::options::{DistributionMode, RenderOptions, TerminalTheme};
use flagfetch::presets::Preset;
use flagfetch::render::{colorize_fields, recolor_art, render};

#[test]
fn three_color_preset_over_six_lines_renders_two_line_bands() {
    let preset = Preset::from_hex_colors("flag", &["#FF0000", "#00FF00", "#0000FF"]).unwrap();
    let template = ArtTemplate::parse("..\n..\n..\n..\n..\n..")
        .unwrap()
        .normalize();
    let assignment = distribute(&preset, &template, DistributionMode::Vertical);
    let lines = render(&template, &assignment, Some(ColorSystem::Rgb));

    let expected = [
        "\x1b[38;2;255;0;0m..\x1b[0m",
        "\x1b[38;2;255;0;0m..\x1b[0m",
        "\x1b[38;2;0;255;0m..\x1b[0m",
        "\x1b[38;2;0;255;0m..\x1b[0m",
        "\x1b[38;2;0;0;255m..\x1b[0m",
        "\x1b[38;2;0;0;255m..\x1b[0m",
    ];
    assert_eq!(lines, expected);
}

#[test]
fn recolor_art_preserves_line_count_and_literal_text() {
    let art = "${c2}  .--.\n |o_o |\n |:_/ |\n//   \\ \\\n(|     | )";
    let options = RenderOptions::default();
    let lines = recolor_art(art, &options).unwrap();

    assert_eq!(lines.len(), art.lines().count());
    let stripped: String = lines
        .join("\n")
        .split("\x1b[")
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_owned()
            } else {
                part.splitn(2, 'm').nth(1).unwrap_or("").to_owned()
            }
        })
        .collect();
    assert!(stripped.contains("|o_o |"));
    assert!(stripped.contains("(|     | )"));
}

#[test]
fn light_theme_produces_darker_colors_than_dark_theme() {
    let art = "banner\nbanner\nbanner";
    let dark = RenderOptions {
        theme: TerminalTheme::Dark,
        ..RenderOptions::default()
    };
    let light = RenderOptions {
        theme: TerminalTheme::Light,
        ..RenderOptions::default()
    };

    let sum = |lines: Vec<String>| -> u32 {
        lines
            .iter()
            .flat_map(|l| l.split("\x1b[38;2;"))
            .skip(1)
            .filter_map(|chunk| {
                let body = chunk.split('m').next()?;
                let mut parts = body.split(';');
                let r: u32 = parts.next()?.parse().ok()?;
                let g: u32 = parts.next()?.parse().ok()?;
                let b: u32 = parts.next()?.parse().ok()?;
                Some(r + g + b)
            })
            .sum()
    };

    let dark_sum = sum(recolor_art(art, &dark).unwrap());
    let light_sum = sum(recolor_art(art, &light).unwrap());
    assert!(
        light_sum < dark_sum,
        "light theme should clamp colors darker ({light_sum} vs {dark_sum})"
    );
}

#[test]
fn colorize_fields_is_independent_of_the_art_path() {
    let preset = flagfetch::presets::get("rainbow").unwrap();
    let fg = preset.colors()[0].with_lightness(Lightness::new(0.65));
    let lines = colorize_fields(
        ["OS: linux", "Kernel: 6.1"],
        fg,
        None,
        Some(ColorSystem::Rgb),
    );

    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.starts_with("\x1b[38;2;"));
        assert!(line.ends_with("\x1b[0m"));
    }
}

#[test]
fn ansi256_rendering_quantizes_to_indexed_codes() {
    let preset = Preset::from_hex_colors("cube", &["#5F87AF"]).unwrap();
    let template = ArtTemplate::parse("x").unwrap();
    let assignment = distribute(&preset, &template, DistributionMode::Vertical);
    let lines = render(&template, &assignment, Some(ColorSystem::Ansi256));

    // #5F87AF is exactly xterm cube index 67.
    assert_eq!(lines[0], "\x1b[38;5;67mx\x1b[0m");
    assert_eq!(Rgb::new(0x5F, 0x87, 0xAF).to_ansi(ColorSystem::Ansi256, false), "\x1b[38;5;67m");
}

#[test]
fn sixteen_color_fallback_never_fails() {
    let preset = Preset::from_hex_colors("odd", &["#123456", "#FEDCBA"]).unwrap();
    let template = ArtTemplate::parse("ab\ncd").unwrap();
    let assignment = distribute(&preset, &template, DistributionMode::Vertical);
    let lines = render(&template, &assignment, None);

    for line in lines {
        assert!(line.starts_with("\x1b[") && line.ends_with("\x1b[0m"));
    }
}
