//! Color engine commands: contrast, shades, palette

use crate::{ContrastArgs, PaletteArgs, ShadesArgs};
use anyhow::{Result, anyhow, bail};
use toki_color::{
    WcagLevel, contrast_ratio, find_accessible_color, generate_palette, generate_shades, is_color,
};

fn ensure_color(value: &str) -> Result<()> {
    if !is_color(value) {
        bail!("Not a #rrggbb color: '{value}'");
    }
    Ok(())
}

pub fn run_contrast(args: ContrastArgs) -> Result<()> {
    ensure_color(&args.foreground)?;
    ensure_color(&args.background)?;
    let level: WcagLevel = args.level.parse().map_err(|e: String| anyhow!(e))?;

    let ratio = contrast_ratio(&args.foreground, &args.background);
    let verdict = |threshold: f64| if ratio >= threshold { "pass" } else { "fail" };
    println!("{} on {}", args.foreground, args.background);
    println!("  Contrast ratio: {ratio:.2}:1");
    println!("  AA  ({:.1}:1): {}", WcagLevel::Aa.threshold(), verdict(WcagLevel::Aa.threshold()));
    println!("  AAA ({:.1}:1): {}", WcagLevel::Aaa.threshold(), verdict(WcagLevel::Aaa.threshold()));

    if args.fix && ratio < level.threshold() {
        let fixed = find_accessible_color(&args.foreground, &args.background, level);
        let fixed_ratio = contrast_ratio(&fixed, &args.background);
        println!("  Suggested {level}: {fixed} ({fixed_ratio:.2}:1)");
    }
    Ok(())
}

pub fn run_shades(args: ShadesArgs) -> Result<()> {
    ensure_color(&args.color)?;
    let shades = generate_shades(&args.color, args.count);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&shades)?);
        return Ok(());
    }
    for (key, hex) in &shades {
        println!("{key:>4}  {hex}");
    }
    Ok(())
}

pub fn run_palette(args: PaletteArgs) -> Result<()> {
    ensure_color(&args.color)?;
    let palette = generate_palette(&args.color, args.count);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }
    for hex in &palette {
        println!("{hex}");
    }
    Ok(())
}
