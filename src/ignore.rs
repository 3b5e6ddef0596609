//! Exclusion set handling.
//! Templates matching the exclusion set exist only to be extended or included
//! by other templates and are never rendered to a file of their own.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Templates excluded from standalone rendering when nothing else is configured.
pub const DEFAULT_EXCLUDES: [&str; 1] = ["base.html"];

/// Compiles exclusion patterns into a set usable for matching template names.
///
/// Each entry is a glob, so a plain template name matches only itself while
/// entries such as `partials/**` cover whole directories.
///
/// # Errors
/// * `Error::ExclusionError` if any entry is not a valid glob
pub fn build_exclusions<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        debug!("Excluding templates matching '{}'", pattern.as_ref());
        builder.add(Glob::new(pattern.as_ref())?);
    }
    Ok(builder.build()?)
}
