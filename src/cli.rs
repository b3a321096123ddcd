//! Command-line interface implementation

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::ascii::AsciiArt;
use crate::clipboard;
use crate::grid;
use crate::loader::{load_image, LoadError};

/// Process exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// PTA (Pixel To Ascii) - Render a raster image as ASCII art
#[derive(Parser)]
#[command(name = "apx")]
#[command(about = "PTA (Pixel To Ascii) - Render a raster image as ASCII art")]
#[command(version)]
pub struct Cli {
    /// Source image file
    #[arg(short, long)]
    pub image: PathBuf,

    /// Detail multiplier: scales both grid dimensions (1 = default detail)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub detail: u32,

    /// Character columns before the detail multiplier is applied
    #[arg(short, long, default_value_t = grid::DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Copy the rendered art to the system clipboard after printing
    #[arg(short, long)]
    pub copy: bool,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    run_convert(&cli)
}

/// Execute the conversion: load, downsample, quantize, print.
fn run_convert(cli: &Cli) -> ExitCode {
    let image = match load_image(&cli.image) {
        Ok(image) => image,
        Err(e @ LoadError::Open { .. }) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let grid = grid::grid_size(image.width(), image.height(), cli.width, cli.detail);
    let luma = grid::downsample(&image, grid);
    let art = AsciiArt::from_luma(&luma);

    println!("{}", art);

    if cli.copy {
        if let Err(e) = clipboard::copy_text(&art.to_string()) {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        eprintln!("ASCII art copied to clipboard.");
    }

    ExitCode::from(EXIT_SUCCESS)
}
