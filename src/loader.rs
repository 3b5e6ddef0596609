//! Template discovery.
//! Walks the site source directory and lists every template that should be
//! rendered to its own output file.

use std::path::Path;

use globset::GlobSet;
use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Lists the templates under `source_dir`, skipping names in `exclusions`.
///
/// Names are paths relative to `source_dir` joined with `/`, the form the
/// template engine loads them by. The list is sorted so that the build order
/// does not depend on the filesystem.
///
/// # Errors
/// * `Error::SourceUnreadable` if the walk fails or a path is not valid UTF-8
pub fn list_templates<P: AsRef<Path>>(source_dir: P, exclusions: &GlobSet) -> Result<Vec<String>> {
    let source_dir = source_dir.as_ref();
    let mut templates = Vec::new();
    for entry in WalkDir::new(source_dir) {
        let entry = entry.map_err(|e| Error::SourceUnreadable {
            path: e.path().unwrap_or(source_dir).to_path_buf(),
            source: e.into(),
        })?;
        // Follows symlinks, which the entry's own file type does not
        if !entry.path().is_file() {
            continue;
        }

        let name = template_name(source_dir, entry.path())?;
        if exclusions.is_match(&name) {
            debug!("Skipping excluded template {name}");
            continue;
        }
        templates.push(name);
    }

    templates.sort();
    Ok(templates)
}

/// Converts a path below `root` into a `/`-separated template name.
fn template_name(root: &Path, path: &Path) -> Result<String> {
    let unreadable = |reason: &str| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, reason.to_string()),
    };

    let relative = path.strip_prefix(root).map_err(|_| unreadable("outside of source directory"))?;
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str().ok_or_else(|| unreadable("path is not valid UTF-8")))
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("/"))
}
