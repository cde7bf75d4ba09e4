//! Notch CLI
//!
//! Paint a reverse border radius box to an image, or inspect how its corner
//! radii resolve and fit.
//!
//! - notch render --radius 20px --color red -o out.png
//! - notch resolve --radius "60px / 10px" --width 100 --height 50 --json

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use notch_css::paint::resolve_color;
use notch_css::properties::{
    BORDER_RADIUS_REVERSE, BORDER_RADIUS_REVERSE_BOTTOM_LEFT, BORDER_RADIUS_REVERSE_BOTTOM_RIGHT,
    BORDER_RADIUS_REVERSE_COLOR, BORDER_RADIUS_REVERSE_TOP_LEFT, BORDER_RADIUS_REVERSE_TOP_RIGHT,
};
use notch_css::{
    BorderRadiusReversePainter, BoxGeometry, ColorValue, Corner, CornerRadius,
    PaintWorkletGlobalScope, RadiusPair, StylePropertyMap, compute_properties, fit,
};
use notch_render::paint_to_canvas;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Notch: reverse border radius painter
#[derive(Parser, Debug)]
#[command(name = "notch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r##"EXAMPLES:
    # Red square with 20px notches
    notch render --radius 20px --color red -o notched.png

    # Elliptical notches on a wide box, over a white background
    notch render --width 300 --height 80 --radius "40px / 20px" \
        --color "#3366ff" --background white -o banner.png

    # Override one corner
    notch render --radius 20px --top-left "5px 30px" -o corner.png

    # Show resolved and fitted radii
    notch resolve --radius "60px 60px" --width 100 --height 50

    # Same, as JSON
    notch resolve --radius 20px --json
"##)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint the box and save it as an image
    Render {
        #[command(flatten)]
        paint: PaintArgs,

        /// Output image; the format follows the extension
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Composite onto this color instead of leaving the notches transparent
        #[arg(long, value_name = "COLOR")]
        background: Option<String>,
    },

    /// Print the resolved and fitted corner radii
    Resolve {
        #[command(flatten)]
        paint: PaintArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Box size and the properties handed to the paint.
#[derive(Args, Debug)]
struct PaintArgs {
    /// Box width in pixels
    #[arg(long, default_value = "100")]
    width: f64,

    /// Box height in pixels
    #[arg(long, default_value = "100")]
    height: f64,

    /// Shorthand radii, e.g. "10px 20px / 5px"
    #[arg(long, value_name = "SIDES")]
    radius: Option<String>,

    /// Fill color
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    /// Top-left radius, "X [Y]"
    #[arg(long, value_name = "RADIUS")]
    top_left: Option<String>,

    /// Top-right radius, "X [Y]"
    #[arg(long, value_name = "RADIUS")]
    top_right: Option<String>,

    /// Bottom-right radius, "X [Y]"
    #[arg(long, value_name = "RADIUS")]
    bottom_right: Option<String>,

    /// Bottom-left radius, "X [Y]"
    #[arg(long, value_name = "RADIUS")]
    bottom_left: Option<String>,

    /// Any other property, applied after the flags above (repeatable)
    #[arg(
        short = 'p',
        long = "property",
        value_name = "NAME=VALUE",
        value_parser = parse_property,
        allow_hyphen_values = true
    )]
    properties: Vec<(String, String)>,

    /// Registered paint to invoke
    #[arg(long, default_value = BorderRadiusReversePainter::NAME)]
    paint: String,
}

impl PaintArgs {
    const fn geometry(&self) -> BoxGeometry {
        BoxGeometry::new(self.width, self.height)
    }

    fn props(&self) -> StylePropertyMap {
        let mut props = StylePropertyMap::new();
        for (name, value) in [
            (BORDER_RADIUS_REVERSE, &self.radius),
            (BORDER_RADIUS_REVERSE_COLOR, &self.color),
            (BORDER_RADIUS_REVERSE_TOP_LEFT, &self.top_left),
            (BORDER_RADIUS_REVERSE_TOP_RIGHT, &self.top_right),
            (BORDER_RADIUS_REVERSE_BOTTOM_RIGHT, &self.bottom_right),
            (BORDER_RADIUS_REVERSE_BOTTOM_LEFT, &self.bottom_left),
        ] {
            if let Some(value) = value {
                props.set(name, value.as_str());
            }
        }
        for (name, value) in &self.properties {
            props.set(name.as_str(), value.as_str());
        }
        props
    }
}

/// Parse `NAME=VALUE` from `-p`.
fn parse_property(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing property name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            paint,
            output,
            background,
        } => render(&paint, &output, background.as_deref()),
        Command::Resolve { paint, json } => resolve(&paint, json),
    }
}

/// Paint to a canvas and save it.
fn render(args: &PaintArgs, output: &Path, background: Option<&str>) -> Result<()> {
    let scope = PaintWorkletGlobalScope::with_builtin_painters();
    let canvas = paint_to_canvas(&scope, &args.paint, args.geometry(), &args.props())
        .with_context(|| format!("failed to paint '{}'", args.paint))?;

    if let Some(background) = background {
        let color = ColorValue::parse(background)
            .ok_or_else(|| anyhow!("'{background}' is not a color"))?;
        canvas
            .composite_over(color)
            .save(output)
            .with_context(|| format!("failed to save image to '{}'", output.display()))?;
    } else {
        canvas
            .save_image(output)
            .with_context(|| format!("failed to save image to '{}'", output.display()))?;
    }

    println!(
        "{} {}x{} image to {}",
        "Saved".green().bold(),
        canvas.width(),
        canvas.height(),
        output.display()
    );
    Ok(())
}

/// One corner of a [`Report`].
#[derive(Debug, Serialize)]
struct CornerReport {
    corner: Corner,
    resolved: CornerRadius,
    fitted: RadiusPair,
}

/// What `notch resolve` prints.
#[derive(Debug, Serialize)]
struct Report {
    geometry: BoxGeometry,
    corners: Vec<CornerReport>,
    horizontal_factor: f64,
    vertical_factor: f64,
    scaled: bool,
    color: Option<String>,
}

fn build_report(args: &PaintArgs) -> Result<Report> {
    if args.paint != BorderRadiusReversePainter::NAME {
        bail!(
            "resolve only understands '{}', not '{}'",
            BorderRadiusReversePainter::NAME,
            args.paint
        );
    }
    let props = args.props();
    let geometry = args.geometry();
    let resolved = compute_properties(&props).context("failed to resolve corner radii")?;
    let fitted = fit(&resolved, geometry);

    Ok(Report {
        geometry,
        corners: resolved
            .iter()
            .zip(fitted.iter())
            .map(|((corner, resolved), (_, fitted))| CornerReport {
                corner,
                resolved,
                fitted,
            })
            .collect(),
        horizontal_factor: fitted.horizontal_factor(),
        vertical_factor: fitted.vertical_factor(),
        scaled: fitted.is_scaled(),
        color: resolve_color(&props).map(|color| color.to_hex_string()),
    })
}

/// Print the resolved and fitted radii.
fn resolve(args: &PaintArgs, json: bool) -> Result<()> {
    let report = build_report(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}x{}",
        "=== Box".bold(),
        report.geometry.width,
        report.geometry.height
    );
    println!("corner         resolved         fitted");
    for entry in &report.corners {
        let corner = format!("{:<14}", entry.corner.to_string());
        let resolved = format!("{} {}", entry.resolved.x, entry.resolved.y);
        println!(
            "{} {resolved:<16} {:.2} {:.2}",
            corner.cyan(),
            entry.fitted.x,
            entry.fitted.y
        );
    }
    let status = if report.scaled {
        "scaled".yellow().to_string()
    } else {
        "unscaled".green().to_string()
    };
    println!(
        "factors: horizontal {:.4}, vertical {:.4} ({status})",
        report.horizontal_factor, report.vertical_factor
    );
    println!(
        "color: {}",
        report.color.as_deref().unwrap_or("default (black)")
    );
    Ok(())
}
