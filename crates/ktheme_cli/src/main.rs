//! Ktheme CLI
//!
//! Thin shell over the theme engine: explore the preset catalog, validate
//! theme JSON files, emit CSS and apply expansion packs.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ktheme_core::{generate_palette_from_seed, Color};
use ktheme_css::generate_theme_adaptation_css;
use ktheme_engine::{
    apply_expansion_pack, create_theme_engine, expansion_packs, theme_sets, validate_theme, Theme,
};

#[derive(Parser)]
#[command(name = "ktheme", about = "Theme engine CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List preset themes, curated sets and expansion packs
    List,
    /// Validate a theme JSON file
    Validate {
        /// Path to a theme JSON file
        file: PathBuf,
    },
    /// Emit adaptation CSS for a preset id or theme JSON file
    Css {
        /// Preset id (e.g. "navy-gold") or path to a theme JSON file
        theme: String,
    },
    /// Export a preset theme as JSON
    Export {
        /// Preset id, ignored with --all
        id: Option<String>,
        /// Export the whole catalog as a JSON array
        #[arg(long)]
        all: bool,
    },
    /// Apply an expansion pack to a preset and print the result
    Expand {
        /// Preset id
        id: String,
        /// Expansion pack id (e.g. "motion-pack")
        pack: String,
    },
    /// Derive a full palette from a seed color
    Palette {
        /// Seed color as a 6-digit hex string
        seed: String,
    },
}

fn load_theme(reference: &str) -> Result<Theme> {
    let engine = create_theme_engine(true)?;
    if let Some(theme) = engine.get_theme(reference) {
        tracing::debug!(id = reference, "using preset theme");
        return Ok(theme.clone());
    }

    let path = PathBuf::from(reference);
    if path.exists() {
        let json = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let theme: Theme = serde_json::from_str(&json)
            .with_context(|| format!("parsing {}", path.display()))?;
        return Ok(theme);
    }

    bail!("no preset or file named {reference}");
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List => {
            let engine = create_theme_engine(true)?;
            println!("Presets:");
            for theme in engine.get_all_themes() {
                println!(
                    "  {:<16} {} - {}",
                    theme.metadata.id, theme.metadata.name, theme.metadata.description
                );
            }
            println!("\nSets:");
            for set in theme_sets() {
                let ids: Vec<&str> = set
                    .themes
                    .iter()
                    .map(|theme| theme.metadata.id.as_str())
                    .collect();
                println!("  {:<20} {}", set.id, ids.join(", "));
            }
            println!("\nExpansion packs:");
            for pack in expansion_packs() {
                println!("  {:<20} {}", pack.id, pack.summary);
            }
        }
        Command::Validate { file } => {
            let json = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let theme: Theme = serde_json::from_str(&json)
                .with_context(|| format!("parsing {}", file.display()))?;

            let result = validate_theme(&theme);
            for error in &result.errors {
                println!("error: {error}");
            }
            for warning in &result.warnings {
                println!("warning: {warning}");
            }
            if result.valid {
                println!("{} is valid", theme.metadata.id);
            } else {
                bail!("{} failed validation", file.display());
            }
        }
        Command::Css { theme } => {
            let theme = load_theme(&theme)?;
            println!("{}", generate_theme_adaptation_css(&theme));
        }
        Command::Export { id, all } => {
            let engine = create_theme_engine(true)?;
            if all {
                println!("{}", engine.export_all_themes()?);
            } else {
                let id = id.context("preset id required unless --all is given")?;
                println!("{}", engine.export_theme(&id)?);
            }
        }
        Command::Expand { id, pack } => {
            let theme = load_theme(&id)?;
            let expanded = apply_expansion_pack(&theme, &pack)?;
            println!("{}", serde_json::to_string_pretty(&expanded)?);
        }
        Command::Palette { seed } => {
            let palette = generate_palette_from_seed(&Color::hex(&seed))?;
            let json = serde_json::to_string_pretty(&SeedPaletteView::from(&palette))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Serializable view of a derived palette, in schema role order.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SeedPaletteView<'a> {
    primary: &'a Color,
    on_primary: &'a Color,
    primary_container: &'a Color,
    on_primary_container: &'a Color,
    secondary: &'a Color,
    on_secondary: &'a Color,
    secondary_container: &'a Color,
    on_secondary_container: &'a Color,
    tertiary: &'a Color,
    on_tertiary: &'a Color,
    tertiary_container: &'a Color,
    on_tertiary_container: &'a Color,
    background: &'a Color,
    on_background: &'a Color,
    surface: &'a Color,
    on_surface: &'a Color,
    surface_variant: &'a Color,
    on_surface_variant: &'a Color,
    outline: &'a Color,
    outline_variant: &'a Color,
}

impl<'a> From<&'a ktheme_core::SeedPalette> for SeedPaletteView<'a> {
    fn from(palette: &'a ktheme_core::SeedPalette) -> Self {
        Self {
            primary: &palette.primary,
            on_primary: &palette.on_primary,
            primary_container: &palette.primary_container,
            on_primary_container: &palette.on_primary_container,
            secondary: &palette.secondary,
            on_secondary: &palette.on_secondary,
            secondary_container: &palette.secondary_container,
            on_secondary_container: &palette.on_secondary_container,
            tertiary: &palette.tertiary,
            on_tertiary: &palette.on_tertiary,
            tertiary_container: &palette.tertiary_container,
            on_tertiary_container: &palette.on_tertiary_container,
            background: &palette.background,
            on_background: &palette.on_background,
            surface: &palette.surface,
            on_surface: &palette.on_surface,
            surface_variant: &palette.surface_variant,
            on_surface_variant: &palette.on_surface_variant,
            outline: &palette.outline,
            outline_variant: &palette.outline_variant,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(Cli::parse())
}
