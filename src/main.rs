//! sitebake's entry point.
//! Parses arguments, builds the context registry and renders the site.

use sitebake::{
    cli::{get_args, Args},
    config::SiteConfig,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor,
    renderer::MiniJinjaRenderer,
    site,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Registers every context producer, failing on duplicates
/// 2. Resolves the build configuration
/// 3. Renders each template into the output directory
fn run(args: Args) -> Result<()> {
    let registry = site::registry()?;
    let config = SiteConfig::try_from(args)?;
    let engine = MiniJinjaRenderer::new(&config.source_dir);

    processor::run(&config, &registry, &engine)?;
    Ok(())
}
