//! Error handling for sitebake.
//! Defines the error type and result alias used throughout the site build.

use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Which side of the context registry a registration targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    /// A literal template name.
    Exact,
    /// A regular expression matched against template names.
    Pattern,
}

impl fmt::Display for RegistrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationKind::Exact => write!(f, "template"),
            RegistrationKind::Pattern => write!(f, "templates matching"),
        }
    }
}

/// Errors that can occur while registering contexts or building the site.
///
/// Every variant raised during the render pass carries the name of the template
/// being processed, so the failing page can be identified from the message alone.
#[derive(Error, Debug)]
pub enum Error {
    /// A second context producer claimed an already registered name or pattern
    #[error("Duplicate context registration for {kind} '{key}'")]
    DuplicateRegistration { kind: RegistrationKind, key: String },

    /// A context pattern is not a valid regular expression
    #[error("Invalid context pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The exclusion set contains an invalid glob
    #[error("Invalid exclusion pattern: {0}")]
    ExclusionError(#[from] globset::Error),

    /// The source directory is missing or not a directory
    #[error("Source directory '{}' does not exist", path.display())]
    SourceDirectoryMissing { path: PathBuf },

    /// Walking the source directory failed
    #[error("Cannot read template source '{}': {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template engine could not load a discovered template
    #[error("Template '{template}' not found")]
    TemplateNotFound { template: String },

    /// The template engine failed to parse or render a template
    #[error("Failed to render template '{template}': {source}")]
    RenderError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// The rendered output could not be written
    #[error("Failed to write '{}' for template '{template}': {source}", path.display())]
    DestinationWriteError {
        template: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
