//! PTA (Pixel To Ascii) - Command-line tool for rendering images as ASCII art

use std::process::ExitCode;

use asciipix::cli;

fn main() -> ExitCode {
    cli::run()
}
