//! Command-line interface implementation for sitebake.
//! Provides argument parsing using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for sitebake.
#[derive(Parser, Debug)]
#[command(author, version, about = "Render templates into a static site", long_about = None)]
pub struct Args {
    /// Source directory
    #[arg(short = 'i', long = "in", value_name = "DIR")]
    pub src_path: PathBuf,

    /// Output directory
    #[arg(short = 'o', long = "out", value_name = "DIR")]
    pub dest_path: PathBuf,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // Nothing useful to do if stdout is gone
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
