//! Build configuration.
//! Gathers everything a site build needs from the command line into one value.

use std::path::PathBuf;

use globset::GlobSet;

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::ignore::{build_exclusions, DEFAULT_EXCLUDES};

/// Settings for a single site build.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding the templates
    pub source_dir: PathBuf,
    /// Directory the rendered pages are written to
    pub output_dir: PathBuf,
    /// Templates that are never rendered standalone
    pub exclusions: GlobSet,
}

impl SiteConfig {
    /// Creates a configuration with the default exclusion set.
    pub fn new<S: Into<PathBuf>, O: Into<PathBuf>>(source_dir: S, output_dir: O) -> Result<Self> {
        Self::with_exclusions(source_dir, output_dir, &DEFAULT_EXCLUDES)
    }

    /// Creates a configuration excluding templates that match `excludes`.
    pub fn with_exclusions<S, O, E>(source_dir: S, output_dir: O, excludes: &[E]) -> Result<Self>
    where
        S: Into<PathBuf>,
        O: Into<PathBuf>,
        E: AsRef<str>,
    {
        Ok(Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            exclusions: build_exclusions(excludes)?,
        })
    }

    /// Checks that the configuration can be built from.
    ///
    /// # Errors
    /// * `Error::SourceDirectoryMissing` if the source directory does not exist
    pub fn validate(&self) -> Result<()> {
        if !self.source_dir.is_dir() {
            return Err(Error::SourceDirectoryMissing { path: self.source_dir.clone() });
        }
        Ok(())
    }
}

impl TryFrom<Args> for SiteConfig {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        Self::new(args.src_path, args.dest_path)
    }
}
