//! Command-line entry point.
//!
//! Exit statuses:
//! - 0: success, coordinate table written
//! - 2: usage error (clap)
//! - 3: catalog unreadable
//! - 4: not enough reference stars (no output written)
//! - 5: coordinate table write failure

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cat2axy::{run, PipelineConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cat2axy",
    about = "Convert a SExtractor catalog into an astrometry.net axy coordinate table",
    long_about = None
)]
struct Args {
    /// Path to the SExtractor catalog (columns: X Y FLUX FWHM ELONGATION)
    catalog: PathBuf,

    /// Image width in pixels
    width: u32,

    /// Image height in pixels
    height: u32,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args.catalog, args.width, args.height, &PipelineConfig::default()) {
        Ok(output) => {
            println!("wrote coordinate table {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
