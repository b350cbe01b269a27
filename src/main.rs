use std::env;
use std::num::NonZeroU32;
use std::process::ExitCode;

use relief3d::{LoadError, create_interactive_3d_map};

const USAGE: &str = "Usage: relief3d <image> [downsample_factor]";

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let factor = match args.next() {
        Some(raw) => match raw.parse::<NonZeroU32>() {
            Ok(factor) => Some(factor),
            Err(_) => {
                eprintln!("Error: downsample factor must be a positive integer, got {raw:?}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    if args.next().is_some() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    println!("Loading image from {image_path}...");

    match create_interactive_3d_map(&image_path, factor) {
        Ok(()) => ExitCode::SUCCESS,
        // A missing file is reported but does not count as a failure.
        Err(LoadError::NotFound(_)) => {
            eprintln!("Error: Image file not found. Please check the path.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
