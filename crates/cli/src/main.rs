#![deny(unsafe_code)]
//! CLI binary for the colorpick color picker core.
//!
//! Subcommands:
//! - `convert <color>`: print hex, RGB and HSV forms of a color
//! - `square`: render the saturation/brightness square to PNG
//! - `bar <component>`: render a component bar to PNG
//! - `history <color>...`: replay commits and undo/redo steps

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use colorpick_core::{normalize_hex, HsbComponent, Hsv, PickerSession, Rgb, SessionConfig};
use colorpick_gradients::{
    fixed_components, generate_bar, generate_square, snapshot, GradientImage,
};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;

/// Tallest bar the `bar` subcommand will render.
const MAX_BAR_HEIGHT: usize = 4096;

#[derive(Parser)]
#[command(name = "colorpick", about = "HSV color picker toolkit")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Session config JSON file (initial color and alpha).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Component {
    Hue,
    Saturation,
    Brightness,
}

impl From<Component> for HsbComponent {
    fn from(c: Component) -> Self {
        match c {
            Component::Hue => HsbComponent::Hue,
            Component::Saturation => HsbComponent::Saturation,
            Component::Brightness => HsbComponent::Brightness,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print hex, RGB and HSV representations of a color.
    Convert {
        /// Hex (`#f80`, `ff8800`) or HSV as `h,s,v` (degrees, 0-1, 0-1).
        color: String,
    },
    /// Render the 256x256 saturation/brightness square for a hue.
    Square {
        /// Hue in degrees. Defaults to the config's initial color.
        #[arg(long)]
        hue: Option<f64>,

        /// Output file path.
        #[arg(short, long, default_value = "square.png")]
        output: PathBuf,
    },
    /// Render a 256-wide component bar.
    Bar {
        /// Component that varies across the bar.
        #[arg(value_enum)]
        component: Component,

        /// Fixed hue in degrees.
        #[arg(long, default_value_t = 0.0)]
        hue: f64,

        /// Fixed saturation in [0, 1].
        #[arg(long, default_value_t = 1.0)]
        saturation: f64,

        /// Fixed brightness in [0, 1].
        #[arg(long, default_value_t = 1.0)]
        brightness: f64,

        /// Output height in pixels, at most 4096 (the bar is repeated vertically).
        #[arg(short = 'H', long, default_value_t = 24)]
        height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "bar.png")]
        output: PathBuf,
    },
    /// Commit each color in order, then undo and redo.
    History {
        /// Colors to commit, in hex.
        colors: Vec<String>,

        /// Undo steps to apply after committing.
        #[arg(long, default_value_t = 0)]
        undo: usize,

        /// Redo steps to apply after undoing.
        #[arg(long, default_value_t = 0)]
        redo: usize,
    },
}

/// Parses hex or an `h,s,v` triple.
fn parse_color(input: &str) -> Result<Hsv, CliError> {
    if input.contains(',') {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        let [h, s, v] = parts.as_slice() else {
            return Err(CliError::Input(format!(
                "expected h,s,v with three values, got '{input}'"
            )));
        };
        let num = |text: &str| -> Result<f64, CliError> {
            text.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| CliError::Input(format!("invalid number '{text}' in '{input}'")))
        };
        return Ok(Hsv::new(num(h)?, num(s)?, num(v)?));
    }
    let hex = normalize_hex(input)?;
    Ok(Rgb::from_hex(&hex)?.to_hsv())
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig, CliError> {
    match path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            SessionConfig::load(p).map_err(|e| CliError::config(p, e))
        }
        None => Ok(SessionConfig::default()),
    }
}

fn color_json(hsv: Hsv) -> serde_json::Value {
    let rgb = hsv.to_rgb();
    serde_json::json!({
        "hex": rgb.to_hex(),
        "rgb": [rgb.r, rgb.g, rgb.b],
        "hsv": hsv,
    })
}

fn describe(hsv: Hsv) -> String {
    let rgb = hsv.to_rgb();
    let byte = |c: f64| (c * 255.0).round() as u8;
    format!(
        "#{}  rgb({}, {}, {})  hsv({:.1}, {:.1}%, {:.1}%)",
        rgb.to_hex(),
        byte(rgb.r),
        byte(rgb.g),
        byte(rgb.b),
        hsv.h,
        hsv.s * 100.0,
        hsv.v * 100.0
    )
}

fn write_image(image: &GradientImage, output: &Path, json: bool) -> Result<(), CliError> {
    snapshot::write_png(image, output)?;
    if json {
        let info = serde_json::json!({
            "width": image.width(),
            "height": image.height(),
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {}x{} -> {}",
            image.width(),
            image.height(),
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Convert { color } => {
            let hsv = parse_color(&color)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&color_json(hsv))?);
            } else {
                println!("{}", describe(hsv));
            }
        }
        Command::Square { hue, output } => {
            let hue = hue.unwrap_or_else(|| config.initial_hsv().h);
            if !(0.0..=360.0).contains(&hue) {
                return Err(CliError::Input(format!(
                    "hue must be in [0, 360], got {hue}"
                )));
            }
            write_image(&generate_square(hue), &output, cli.json)?;
        }
        Command::Bar {
            component,
            hue,
            saturation,
            brightness,
            height,
            output,
        } => {
            if !(1..=MAX_BAR_HEIGHT).contains(&height) {
                return Err(CliError::Input(format!(
                    "height must be in [1, {MAX_BAR_HEIGHT}], got {height}"
                )));
            }
            let fixed = fixed_components(Hsv::new(hue, saturation, brightness));
            let bar = generate_bar(component.into(), fixed).stretched(height)?;
            write_image(&bar, &output, cli.json)?;
        }
        Command::History { colors, undo, redo } => {
            let mut session = PickerSession::from_config(&config);
            for color in &colors {
                session.set_color(parse_color(color)?);
                session.commit();
            }
            for _ in 0..undo {
                session.undo();
            }
            for _ in 0..redo {
                session.redo();
            }

            if cli.json {
                let info = serde_json::json!({
                    "color": color_json(session.color()),
                    "entries": session.history().len(),
                    "cursor": session.history().cursor(),
                    "can_undo": session.can_undo(),
                    "can_redo": session.can_redo(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", describe(session.color()));
                println!(
                    "entry {} of {}, can undo: {}, can redo: {}",
                    session.history().cursor() + 1,
                    session.history().len(),
                    session.can_undo(),
                    session.can_redo()
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
