//! sitebake renders a directory of jinja templates into a static site.
//! Each template is rendered with a context composed from producers registered
//! by exact template name or by a pattern over template names, and written to
//! the same relative path under the output directory.

/// Command-line interface module
pub mod cli;

/// Build configuration assembled from the command line
pub mod config;

/// Render contexts and their composition
pub mod context;

/// Error types and handling
pub mod error;

/// Exclusion set for templates that are never rendered standalone
pub mod ignore;

/// Template discovery in the source directory
pub mod loader;

/// Logger setup
pub mod logger;

/// Site build orchestration
pub mod processor;

/// Registry mapping template names and patterns to context producers
pub mod registry;

/// Template rendering engine
pub mod renderer;

/// The site's navigation, page data and context registrations
pub mod site;
