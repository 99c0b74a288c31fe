//! Kata CLI
//!
//! Runs the katas from the command line: build a CSS selector, or compute a
//! rectangle's area (optionally through JSON).

mod parts;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kata_common::warning::warn_once;
use kata_geometry::{Rectangle, RectangleRecord};
use owo_colors::OwoColorize;

use parts::Token;

/// Kata: small exercises behind one binary
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    kata selector element=a 'attribute=href$=".png"' pseudo-class=focus

    # Two selectors joined by a combinator
    kata selector element=div id=main combinator=+ element=table id=data

    # Rectangle area, or its JSON
    kata rectangle --width 3 --height 4
    kata rectangle --width 3 --height 4 --json

    # Rectangle from JSON
    kata rectangle --from-json '{"width": 2, "height": 5}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a CSS selector from kind=value parts
    Selector {
        /// element=, id=, class=, attribute=, pseudo-class=, pseudo-element=,
        /// or combinator= to join with the next selector
        #[arg(value_name = "PART", required = true, value_parser = parts::parse_token)]
        parts: Vec<Token>,
    },

    /// Compute the area of a rectangle
    Rectangle {
        /// Width of the rectangle
        #[arg(long, allow_negative_numbers = true, required_unless_present = "from_json")]
        width: Option<f64>,

        /// Height of the rectangle
        #[arg(long, allow_negative_numbers = true, required_unless_present = "from_json")]
        height: Option<f64>,

        /// Print the rectangle as JSON instead of its area
        #[arg(long)]
        json: bool,

        /// Read the rectangle from a JSON object with width and height
        #[arg(long, value_name = "JSON", conflicts_with_all = ["width", "height"])]
        from_json: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Selector { parts: tokens } => {
            println!("{}", parts::build_selector(&tokens)?);
            Ok(())
        }
        Command::Rectangle {
            width,
            height,
            json,
            from_json,
        } => {
            let rectangle = load_rectangle(width, height, from_json.as_deref())?;
            if json {
                println!("{}", kata_json::serialize(&rectangle)?);
            } else {
                println!("{}", rectangle.area());
            }
            Ok(())
        }
    }
}

/// Build the rectangle from `--from-json` or from `--width`/`--height`.
fn load_rectangle(
    width: Option<f64>,
    height: Option<f64>,
    from_json: Option<&str>,
) -> Result<Rectangle> {
    let rectangle = if let Some(text) = from_json {
        kata_json::deserialize_as::<RectangleRecord, Rectangle>(text)
            .context("could not read rectangle JSON")?
    } else {
        Rectangle::new(
            width.context("--width is required")?,
            height.context("--height is required")?,
        )
    };

    if rectangle.width < 0.0 || rectangle.height < 0.0 {
        warn_once("rectangle", "negative side length; the area will be negative or zero");
    }
    Ok(rectangle)
}
