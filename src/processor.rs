//! Site build orchestration.
//! Renders every discovered template with its composed context and writes the
//! result to the matching path under the output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::SiteConfig;
use crate::context::compose;
use crate::error::{Error, Result};
use crate::loader::list_templates;
use crate::registry::ContextRegistry;
use crate::renderer::TemplateRenderer;

/// Output of rendering a single template.
#[derive(Debug)]
pub struct ProcessResult {
    /// Template name relative to the source directory
    pub template: String,
    /// Destination file
    pub target: PathBuf,
    /// Rendered text
    pub content: String,
}

/// Renders templates with the contexts held by a registry.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    registry: &'a ContextRegistry,
    output_root: &'a Path,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        registry: &'a ContextRegistry,
        output_root: &'a Path,
    ) -> Self {
        Self { renderer, registry, output_root }
    }

    /// Composes the context for `template` and renders it.
    pub fn process(&self, template: &str) -> Result<ProcessResult> {
        let target = resolve_target_path(template, self.output_root);
        let context = compose(self.registry, template);
        debug!("Rendering {template}");
        let content = self.renderer.render(template, &context)?;
        Ok(ProcessResult { template: template.to_string(), target, content })
    }

    /// Renders `template` and writes it to its destination.
    pub fn build_page(&self, template: &str) -> Result<PathBuf> {
        ensure_parent_dir(template, &resolve_target_path(template, self.output_root))?;
        let result = self.process(template)?;
        println!("Writing: {}", result.target.display());
        write_file(&result.template, &result.target, &result.content)?;
        Ok(result.target)
    }
}

/// Joins a `/`-separated template name onto the output directory.
pub fn resolve_target_path<P: AsRef<Path>>(template: &str, output_root: P) -> PathBuf {
    template
        .split('/')
        .fold(output_root.as_ref().to_path_buf(), |path, segment| path.join(segment))
}

/// Creates every missing ancestor directory of `target`.
///
/// A directory that already exists, including one created concurrently by
/// someone else, counts as success.
pub fn ensure_parent_dir(template: &str, target: &Path) -> Result<()> {
    let Some(parent) = target.parent() else {
        return Ok(());
    };
    match fs::create_dir_all(parent) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && parent.is_dir() => Ok(()),
        Err(source) => Err(Error::DestinationWriteError {
            template: template.to_string(),
            path: parent.to_path_buf(),
            source,
        }),
    }
}

fn write_file(template: &str, target: &Path, content: &str) -> Result<()> {
    fs::write(target, content).map_err(|source| Error::DestinationWriteError {
        template: template.to_string(),
        path: target.to_path_buf(),
        source,
    })
}

/// Builds the whole site described by `config`.
///
/// Templates are processed one after another in name order. The first
/// failure stops the build; pages written before it are left on disk.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Written destination files in build order
pub fn run(
    config: &SiteConfig,
    registry: &ContextRegistry,
    renderer: &dyn TemplateRenderer,
) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let templates = list_templates(&config.source_dir, &config.exclusions)?;
    let processor = Processor::new(renderer, registry, &config.output_dir);

    let written = templates
        .iter()
        .map(|template| processor.build_page(template))
        .collect::<Result<Vec<_>>>()?;

    info!("Wrote {} pages to {}", written.len(), config.output_dir.display());
    Ok(written)
}
