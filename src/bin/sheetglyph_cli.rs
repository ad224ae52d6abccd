//! CLI tool for sheetglyph - paints one frame into a recording context and
//! outputs the draw operations as JSON
//!
//! Usage:
//!   sheetglyph_cli <skeleton.json>                      # Output ops to stdout
//!   sheetglyph_cli <skeleton.json> -o ops.json          # Output ops to file
//!   sheetglyph_cli <skeleton.json> --config app.json    # Locale/theme/log level
//!   sheetglyph_cli <skeleton.json> --scale 2            # Device pixel ratio x zoom

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use sheetglyph::app::{bootstrap, AppConfig, DEFAULT_UNIT_ID};
use sheetglyph::render::{RecordingContext, Scale};
use sheetglyph::SheetSkeleton;
use tracing_subscriber::EnvFilter;

struct Args {
    input: String,
    output: Option<String>,
    config: Option<String>,
    scale: f64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let input = args.next().ok_or("missing <skeleton.json>")?;
    let mut parsed = Args {
        input,
        output: None,
        config: None,
        scale: 1.0,
    };

    while let Some(flag) = args.next() {
        let value = args.next().ok_or(format!("{flag} needs a value"))?;
        match flag.as_str() {
            "-o" => parsed.output = Some(value),
            "--config" => parsed.config = Some(value),
            "--scale" => {
                parsed.scale = value
                    .parse()
                    .map_err(|e| format!("invalid --scale {value}: {e}"))?;
            }
            other => return Err(format!("unknown flag {other}")),
        }
    }
    Ok(parsed)
}

fn run(args: Args) -> sheetglyph::Result<()> {
    let config = match &args.config {
        Some(path) => AppConfig::from_json(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let skeleton: SheetSkeleton = serde_json::from_str(&fs::read_to_string(&args.input)?)?;
    let mut app = bootstrap(config)?;

    let mut ctx = RecordingContext::new();
    let painted =
        app.facade()
            .render_unit(DEFAULT_UNIT_ID, &mut ctx, Scale::uniform(args.scale), &skeleton);
    tracing::info!(painted, ops = ctx.ops().len(), "frame recorded");

    let json = ctx.to_json()?;
    match args.output {
        Some(path) => {
            fs::write(&path, &json)?;
            eprintln!("Written: {path}");
        }
        None => writeln!(io::stdout(), "{json}")?,
    }
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Usage: sheetglyph_cli <skeleton.json> [-o ops.json] [--config app.json] [--scale N]"
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
