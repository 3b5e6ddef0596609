//! Template renderer for sitebake.
//! Loads templates by name from the site source directory and renders them
//! with MiniJinja.
use std::path::Path;
use std::{fs, io};

use minijinja::{AutoEscape, Environment, ErrorKind};

use crate::context::Context;
use crate::error::{Error, Result};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template identified by `name` with the given context.
    ///
    /// # Arguments
    /// * `name` - Template path relative to the source directory, `/`-separated
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render(&self, name: &str, context: &Context) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that resolves templates, including the targets of
    /// `extends` and `include`, relative to `source_dir`.
    pub fn new<P: AsRef<Path>>(source_dir: P) -> Self {
        let mut env = Environment::new();
        let root = source_dir.as_ref().to_path_buf();
        env.set_loader(move |name: &str| load_source(&root, name));
        // Context values are inserted as-is, whatever the template extension.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

/// Reads the template `name` from below `root`.
///
/// Dotfiles such as `.htaccess` are valid names. Names with a `..` segment
/// and files that do not exist both load as `None`.
fn load_source(root: &Path, name: &str) -> std::result::Result<Option<String>, minijinja::Error> {
    let mut path = root.to_path_buf();
    for segment in name.split('/') {
        match segment {
            ".." => return Ok(None),
            "" | "." => continue,
            segment => path.push(segment),
        }
    }

    match fs::read_to_string(&path) {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("could not read template '{name}'"),
        )
        .with_source(e)),
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template from the source directory using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the loader cannot find `name`
    /// * `Error::RenderError` if parsing or rendering fails
    fn render(&self, name: &str, context: &Context) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(|source| {
            if source.kind() == ErrorKind::TemplateNotFound {
                Error::TemplateNotFound { template: name.to_string() }
            } else {
                Error::RenderError { template: name.to_string(), source }
            }
        })?;

        tmpl.render(context)
            .map_err(|source| Error::RenderError { template: name.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_with_inheritance() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("base.html"),
            "<title>{% block title %}{% endblock %}</title>",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("index.html"),
            r#"{% extends "base.html" %}{% block title %}{{ name }}{% endblock %}"#,
        )
        .unwrap();

        let renderer = MiniJinjaRenderer::new(temp_dir.path());
        let context = Context::from([("name".to_string(), json!("<Home>"))]);

        let result = renderer.render("index.html", &context).unwrap();
        assert_eq!(result, "<title><Home></title>");
    }

    #[test]
    fn test_render_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = MiniJinjaRenderer::new(temp_dir.path());

        match renderer.render("missing.html", &Context::new()) {
            Err(Error::TemplateNotFound { template }) => assert_eq!(template, "missing.html"),
            other => panic!("Expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_render_dotfile() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".well-known")).unwrap();
        fs::write(temp_dir.path().join(".htaccess"), "Options {{ opts }}").unwrap();
        fs::write(temp_dir.path().join(".well-known/security.txt"), "Contact: me").unwrap();
        let renderer = MiniJinjaRenderer::new(temp_dir.path());
        let context = Context::from([("opts".to_string(), json!("-Indexes"))]);

        assert_eq!(renderer.render(".htaccess", &context).unwrap(), "Options -Indexes");
        assert_eq!(
            renderer.render(".well-known/security.txt", &Context::new()).unwrap(),
            "Contact: me"
        );
    }

    #[test]
    fn test_parent_segments_are_not_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("site");
        fs::create_dir(&root).unwrap();
        fs::write(temp_dir.path().join("secret.html"), "secret").unwrap();
        let renderer = MiniJinjaRenderer::new(&root);

        assert!(matches!(
            renderer.render("../secret.html", &Context::new()),
            Err(Error::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_render_syntax_error_names_template() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.html"), "{% for %}").unwrap();
        let renderer = MiniJinjaRenderer::new(temp_dir.path());

        let err = renderer.render("broken.html", &Context::new()).unwrap_err();
        assert!(matches!(err, Error::RenderError { .. }));
        assert!(err.to_string().contains("broken.html"));
    }
}
